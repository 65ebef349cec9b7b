use anyhow::Result;
use serde_json::json;
use serde_json::Value;
use test_utils::ai_response_fixture;
use test_utils::ai_response_loose_fixture;

use super::PlanView;
use crate::domain::models::PlanSummary;

fn rendered(summary: &PlanSummary) -> Vec<String> {
    return PlanView::lines(summary)
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| {
                    return span.content.to_string();
                })
                .collect::<Vec<String>>()
                .join("");
        })
        .collect();
}

#[test]
fn it_renders_a_loose_response() -> Result<()> {
    let ai: Value = serde_json::from_str(ai_response_loose_fixture())?;
    let lines = rendered(&PlanSummary::from_value(&ai));

    insta::assert_snapshot!(lines.join("\n"), @r###"
    🍽️ Meals
    • Pasta night

    🛒 Grocery List
    • Pasta
    • Tomatoes
    • Spinach
    "###);

    return Ok(());
}

#[test]
fn it_renders_meal_cards_with_ingredients_and_instructions() -> Result<()> {
    let ai: Value = serde_json::from_str(ai_response_fixture())?;
    let lines = rendered(&PlanSummary::from_value(&ai));

    assert_eq!(lines[0], "🍽️ Meals");
    assert_eq!(lines[1], "• Tomato Spinach Pasta");
    assert_eq!(lines[2], "    - Pasta (200 g)");
    assert_eq!(lines[3], "    - Tomatoes (4)");
    assert_eq!(lines[4], "    - Spinach");
    assert_eq!(lines[5], "    - Olive oil (2 tbsp)");
    assert_eq!(
        lines[6],
        "    Boil the pasta, blister the tomatoes, wilt the spinach, toss together."
    );
    assert_eq!(lines[7], "• Spinach Omelette");

    return Ok(());
}

#[test]
fn it_renders_flat_grocery_lists_without_sections() {
    let summary = PlanSummary::from_value(&json!({ "grocery_list": ["Milk", "Eggs"] }));
    let lines = rendered(&summary);

    assert_eq!(lines, vec!["🛒 Grocery List", "• Milk", "• Eggs"]);
}

#[test]
fn it_renders_sections_with_icons_in_key_order() {
    let summary = PlanSummary::from_value(&json!({
        "grocery_list": { "Dairy": ["Milk"], "Produce": ["Tomato"] }
    }));
    let lines = rendered(&summary);

    assert_eq!(
        lines,
        vec![
            "🛒 Grocery List",
            "🥛 Dairy",
            "  • Milk",
            "🍅 Produce",
            "  • Tomato",
        ]
    );
}

#[test]
fn it_uses_the_default_icon_for_unknown_sections() {
    let summary = PlanSummary::from_value(&json!({
        "grocery_list": { "Cleaning Supplies": ["Soap"] }
    }));
    let lines = rendered(&summary);

    assert_eq!(lines[1], "🛒 Cleaning Supplies");
}

#[test]
fn it_renders_nothing_for_an_empty_summary() {
    let summary = PlanSummary::from_value(&json!({}));
    assert!(rendered(&summary).is_empty());
}
