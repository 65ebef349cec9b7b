use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::PlanSummary;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::HistoryTable;
use crate::domain::services::PlanView;

#[derive(Clone, Copy, PartialEq)]
enum Focus {
    Keywords,
    Meals,
    Servings,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Keywords => return Focus::Meals,
            Focus::Meals => return Focus::Servings,
            Focus::Servings => return Focus::Keywords,
        }
    }
}

fn apply_focus(field: &mut tui_textarea::TextArea<'_>, title: &'static str, focused: bool) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::new(1, 1, 0, 0));
    if focused {
        block = block.border_type(BorderType::Double);
    }

    field.set_block(block);
}

fn parse_count(field: &tui_textarea::TextArea<'_>) -> i64 {
    // Unconstrained input; anything non-numeric fails the minimum-value
    // check at submit time.
    return field.lines().join("").trim().parse::<i64>().unwrap_or(0);
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut keywords = TextArea::new("Keywords");
    let mut meals = TextArea::new("Meals");
    let mut servings = TextArea::new("Servings per meal");
    meals.insert_str("1");
    servings.insert_str("1");
    let mut focus = Focus::Keywords;
    let loading = Loading::default();

    #[cfg(feature = "dev")]
    {
        keywords.insert_str("pasta, tomatoes, spinach");
    }

    loop {
        apply_focus(&mut keywords, "Keywords", focus == Focus::Keywords);
        apply_focus(&mut meals, "Meals", focus == Focus::Meals);
        apply_focus(&mut servings, "Servings per meal", focus == Focus::Servings);

        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(10),
                ])
                .split(frame.size());

            let counts = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(layout[1]);

            frame.render_widget(keywords.widget(), layout[0]);
            frame.render_widget(meals.widget(), counts[0]);
            frame.render_widget(servings.widget(), counts[1]);

            if app_state.error.is_empty() {
                frame.render_widget(
                    Paragraph::new(
                        "Press Enter to generate a plan, Tab to switch fields, CTRL+C to quit.",
                    ),
                    layout[2],
                );
            } else {
                frame.render_widget(
                    Paragraph::new(app_state.error.to_string())
                        .style(Style::default().fg(Color::Red)),
                    layout[2],
                );
            }

            if app_state.loading {
                loading.render(frame, layout[3]);
            } else if let Some(result) = &app_state.result {
                let lines = PlanView::lines(&PlanSummary::from_value(&result.ai_response));
                app_state
                    .scroll
                    .set_state(lines.len() as u16, layout[3].height);

                frame.render_widget(
                    Paragraph::new(lines).scroll((app_state.scroll.position, 0)),
                    layout[3],
                );
                frame.render_stateful_widget(
                    Scrollbar::new(ScrollbarOrientation::VerticalRight),
                    layout[3].inner(&Margin {
                        vertical: 1,
                        horizontal: 0,
                    }),
                    &mut app_state.scroll.scrollbar_state,
                );
            }

            if app_state.history_error.is_empty() {
                frame.render_widget(HistoryTable::widget(&app_state.history), layout[4]);
            } else {
                frame.render_widget(
                    Paragraph::new(app_state.history_error.to_string())
                        .style(Style::default().fg(Color::Red))
                        .block(Block::default().borders(Borders::ALL).title("History")),
                    layout[4],
                );
            }
        })?;

        match events.next().await? {
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardTab() => {
                focus = focus.next();
            }
            Event::KeyboardEnter() => {
                // At most one generate in flight; Enter is a no-op
                // while one is pending.
                if app_state.loading {
                    continue;
                }

                let keyword_text = keywords.lines().join(" ");
                app_state.submit(
                    &keyword_text,
                    parse_count(&meals),
                    parse_count(&servings),
                    &tx,
                )?;
            }
            Event::KeyboardCharInput(input) => {
                if app_state.loading {
                    continue;
                }

                match focus {
                    Focus::Keywords => keywords.input(input),
                    Focus::Meals => meals.input(input),
                    Focus::Servings => servings.input(input),
                };
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UITick() => (),
            event => {
                app_state.handle_event(event);
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut app_state = AppState::default();
    let mut events = EventsService::new(rx);

    // The initial history load fires once at startup, independent of
    // any submit.
    tx.send(Action::FetchHistory())?;

    start_loop(&mut terminal, &mut app_state, tx, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
