#[cfg(test)]
#[path = "ai_response_test.rs"]
mod tests;

use serde_json::Value;

pub const DEFAULT_ICON: &str = "🛒";

const SECTION_ICONS: [(&str, &str); 11] = [
    ("Produce", "🍅"),
    ("Vegetables", "🥦"),
    ("Fruits", "🍎"),
    ("Meat", "🥩"),
    ("Poultry", "🍗"),
    ("Seafood", "🐟"),
    ("Dairy", "🥛"),
    ("Bakery", "🥖"),
    ("Pantry", "📦"),
    ("Spices", "🧂"),
    ("Oil", "🫒"),
];

pub fn section_icon(name: &str) -> &'static str {
    for (section, icon) in SECTION_ICONS {
        if section == name {
            return icon;
        }
    }

    return DEFAULT_ICON;
}

/// One meal out of the model response. Models sometimes return plain
/// strings instead of structured objects, so both shapes are first
/// class here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealEntry {
    Text(String),
    Structured {
        name: String,
        ingredients: Vec<String>,
        instructions: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrocerySection {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroceryView {
    Flat(Vec<String>),
    Sections(Vec<GrocerySection>),
}

/// Normalized view over an `ai_response` blob. `from_value` is total:
/// every field access is guarded with a default, so a malformed
/// response degrades to placeholder text instead of an error.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub meals: Vec<MealEntry>,
    pub grocery: Option<GroceryView>,
}

// Mirrors the truthiness rules the planner's own web client applies to
// the response, so both frontends drop the same values.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => return true,
        Value::Bool(b) => return !b,
        Value::Number(n) => return n.as_f64() == Some(0.0),
        Value::String(s) => return s.is_empty(),
        _ => return false,
    }
}

fn as_sequence(value: &Value) -> Vec<Value> {
    if let Value::Array(items) = value {
        return items.clone();
    }

    return vec![value.clone()];
}

fn scalar_label(value: &Value) -> String {
    if let Value::String(text) = value {
        return text.to_string();
    }

    // Numbers and bools display bare; containers fall back to compact
    // JSON rather than being dropped.
    return value.to_string();
}

fn ingredient_label(value: &Value) -> String {
    if is_falsy(value) {
        return "Unnamed ingredient".to_string();
    }

    if let Value::String(text) = value {
        return text.to_string();
    }

    if let Value::Object(fields) = value {
        let mut label = match fields.get("item") {
            Some(Value::Null) | None => "Unnamed ingredient".to_string(),
            Some(item) => scalar_label(item),
        };

        if let Some(quantity) = fields.get("quantity") {
            if !is_falsy(quantity) {
                let mut amount = scalar_label(quantity);
                if let Some(unit) = fields.get("unit") {
                    if !is_falsy(unit) {
                        amount = format!("{amount} {}", scalar_label(unit));
                    }
                }
                label = format!("{label} ({amount})");
            }
        }

        return label;
    }

    return scalar_label(value);
}

fn item_label(value: &Value) -> String {
    if is_falsy(value) {
        return "Unnamed item".to_string();
    }

    if let Value::String(text) = value {
        return text.to_string();
    }

    if let Value::Object(fields) = value {
        let label = match fields.get("item") {
            Some(Value::Null) | None => "Unnamed item".to_string(),
            Some(item) => scalar_label(item),
        };

        if let Some(quantity) = fields.get("quantity") {
            if !is_falsy(quantity) {
                return format!("{label} ({})", scalar_label(quantity));
            }
        }

        return label;
    }

    return scalar_label(value);
}

fn meal_entry(value: &Value, idx: usize) -> MealEntry {
    let fallback = format!("Meal {}", idx + 1);

    if is_falsy(value) {
        return MealEntry::Text(fallback);
    }

    if let Value::String(text) = value {
        return MealEntry::Text(text.to_string());
    }

    if let Value::Object(fields) = value {
        let name = match fields.get("name") {
            Some(Value::Null) | None => fallback,
            Some(name) => scalar_label(name),
        };

        let ingredients = fields
            .get("ingredients")
            .filter(|ingredients| return !ingredients.is_null())
            .map(|ingredients| {
                return as_sequence(ingredients)
                    .iter()
                    .map(|ingredient| {
                        return ingredient_label(ingredient);
                    })
                    .collect();
            })
            .unwrap_or_default();

        let instructions = match fields.get("instructions") {
            Some(Value::Null) | None => "".to_string(),
            Some(instructions) => scalar_label(instructions),
        };

        return MealEntry::Structured {
            name,
            ingredients,
            instructions,
        };
    }

    // Stray scalars get the same treatment as an object with every
    // field missing.
    return MealEntry::Structured {
        name: fallback,
        ingredients: vec![],
        instructions: "".to_string(),
    };
}

fn grocery_view(list: &Value) -> Option<GroceryView> {
    if is_falsy(list) {
        return None;
    }

    if let Value::Array(items) = list {
        let items = items
            .iter()
            .map(|item| {
                return item_label(item);
            })
            .collect();

        return Some(GroceryView::Flat(items));
    }

    if let Value::Object(sections) = list {
        // Key insertion order is preserved so sections render in the
        // order the server produced them.
        let sections = sections
            .iter()
            .map(|(name, items)| {
                return GrocerySection {
                    name: name.to_string(),
                    items: as_sequence(items)
                        .iter()
                        .map(|item| {
                            return item_label(item);
                        })
                        .collect(),
                };
            })
            .collect();

        return Some(GroceryView::Sections(sections));
    }

    return Some(GroceryView::Flat(vec![item_label(list)]));
}

impl PlanSummary {
    pub fn from_value(ai: &Value) -> PlanSummary {
        let mut summary = PlanSummary::default();

        if let Some(meals) = ai.get("meals") {
            if !is_falsy(meals) {
                summary.meals = as_sequence(meals)
                    .iter()
                    .enumerate()
                    .map(|(idx, meal)| {
                        return meal_entry(meal, idx);
                    })
                    .collect();
            }
        }

        if let Some(list) = ai.get("grocery_list") {
            summary.grocery = grocery_view(list);
        }

        return summary;
    }
}
