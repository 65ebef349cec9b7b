#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::GenerateRequest;
use crate::domain::models::GroceryRequest;

/// All UI state, updated only through `submit` and `handle_event` so
/// every transition is testable without a terminal.
#[derive(Default)]
pub struct AppState {
    pub loading: bool,
    pub error: String,
    pub result: Option<GroceryRequest>,
    pub history: Vec<GroceryRequest>,
    pub history_error: String,
    pub scroll: Scroll,
}

impl AppState {
    /// Validates the form and kicks off a generate. Validation failures
    /// set `error` and send nothing, so no network call ever happens
    /// for bad input.
    pub fn submit(
        &mut self,
        keywords: &str,
        meals: i64,
        servings: i64,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        let keywords = keywords.trim();
        if keywords.is_empty() {
            self.error = "Please enter at least one keyword.".to_string();
            return Ok(());
        }

        if meals < 1 || servings < 1 {
            self.error = "Meals and servings must each be at least 1.".to_string();
            return Ok(());
        }

        self.error.clear();
        self.result = None;
        self.loading = true;

        tx.send(Action::GeneratePlan(GenerateRequest {
            keywords: keywords.to_string(),
            meals: meals as u32,
            servings_per_meal: servings as u32,
        }))?;

        return Ok(());
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::PlanGenerated(result) => {
                self.result = Some(result);
                self.loading = false;
                self.scroll.top();
            }
            Event::PlanFailed(message) => {
                self.error = message;
                self.loading = false;
            }
            Event::HistoryLoaded(history) => {
                self.history = history;
            }
            Event::HistoryFailed(message) => {
                self.history_error = message;
            }
            // Keyboard and scroll events are handled by the UI loop.
            _ => (),
        }
    }
}
