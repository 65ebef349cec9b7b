#[cfg(test)]
#[path = "plan_view_test.rs"]
mod tests;

use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::section_icon;
use crate::domain::models::GroceryView;
use crate::domain::models::MealEntry;
use crate::domain::models::PlanSummary;

fn heading(text: &str) -> Line<'static> {
    return Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ));
}

fn bold(text: String) -> Line<'static> {
    return Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    ));
}

pub struct PlanView {}

impl PlanView {
    /// Lays out a normalized plan as terminal lines: meal cards first,
    /// then the grocery list, with section icons on headings.
    pub fn lines(summary: &PlanSummary) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![];

        if !summary.meals.is_empty() {
            lines.push(heading("🍽️ Meals"));
            for entry in &summary.meals {
                match entry {
                    MealEntry::Text(text) => {
                        lines.push(Line::from(format!("• {text}")));
                    }
                    MealEntry::Structured {
                        name,
                        ingredients,
                        instructions,
                    } => {
                        lines.push(bold(format!("• {name}")));
                        for ingredient in ingredients {
                            lines.push(Line::from(format!("    - {ingredient}")));
                        }
                        if !instructions.is_empty() {
                            lines.push(Line::from(format!("    {instructions}")));
                        }
                    }
                }
            }
            lines.push(Line::from(""));
        }

        if let Some(grocery) = &summary.grocery {
            lines.push(heading("🛒 Grocery List"));
            match grocery {
                GroceryView::Flat(items) => {
                    for item in items {
                        lines.push(Line::from(format!("• {item}")));
                    }
                }
                GroceryView::Sections(sections) => {
                    for section in sections {
                        lines.push(bold(format!(
                            "{} {}",
                            section_icon(&section.name),
                            section.name
                        )));
                        for item in &section.items {
                            lines.push(Line::from(format!("  • {item}")));
                        }
                    }
                }
            }
        }

        return lines;
    }
}
