#[cfg(test)]
#[path = "history_table_test.rs"]
mod tests;

use ratatui::prelude::Constraint;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Row;
use ratatui::widgets::Table;

use crate::domain::models::GroceryRequest;

const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Length(6),
    Constraint::Min(24),
    Constraint::Length(7),
    Constraint::Length(10),
];

pub struct HistoryTable {}

impl HistoryTable {
    /// Row cells in server order: no sorting, no filtering.
    pub fn cells(history: &[GroceryRequest]) -> Vec<[String; 4]> {
        return history
            .iter()
            .map(|row| {
                return [
                    row.id.to_string(),
                    row.keywords.to_string(),
                    row.meals.to_string(),
                    row.servings_per_meal.to_string(),
                ];
            })
            .collect();
    }

    pub fn widget(history: &[GroceryRequest]) -> Table<'static> {
        let rows = HistoryTable::cells(history)
            .into_iter()
            .map(|cells| {
                return Row::new(cells.to_vec());
            })
            .collect::<Vec<Row>>();

        return Table::new(rows)
            .header(
                Row::new(vec!["ID", "Keywords", "Meals", "Servings"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(Block::default().borders(Borders::ALL).title("History"))
            .widths(&COLUMN_WIDTHS);
    }
}
