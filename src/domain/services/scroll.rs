use ratatui::widgets::ScrollbarState;

const PAGE_SIZE: u16 = 10;

/// Scroll state for the result pane. Long plans overflow the viewport,
/// so the pane scrolls by line and by page.
#[derive(Default)]
pub struct Scroll {
    content_length: u16,
    viewport_height: u16,
    pub position: u16,
    pub scrollbar_state: ScrollbarState,
}

impl Scroll {
    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.scrollbar_state.prev();
    }

    pub fn down(&mut self) {
        if self.position < self.max_position() {
            self.position += 1;
            self.scrollbar_state.next();
        }
    }

    pub fn up_page(&mut self) {
        for _ in 0..PAGE_SIZE {
            self.up();
        }
    }

    pub fn down_page(&mut self) {
        for _ in 0..PAGE_SIZE {
            self.down();
        }
    }

    pub fn top(&mut self) {
        self.position = 0;
        self.scrollbar_state.first();
    }

    pub fn set_state(&mut self, content_length: u16, viewport_height: u16) {
        self.content_length = content_length;
        self.viewport_height = viewport_height;
        self.position = self.position.min(self.max_position());
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(content_length)
            .viewport_content_length(viewport_height);
    }

    fn max_position(&self) -> u16 {
        return self.content_length.saturating_sub(self.viewport_height);
    }
}
