use anyhow::Result;
use serde_json::json;
use serde_json::Value;
use test_utils::ai_response_fixture;
use test_utils::ai_response_loose_fixture;

use super::section_icon;
use super::GrocerySection;
use super::GroceryView;
use super::MealEntry;
use super::PlanSummary;
use super::DEFAULT_ICON;

#[test]
fn it_normalizes_a_structured_response() -> Result<()> {
    let ai: Value = serde_json::from_str(ai_response_fixture())?;
    let summary = PlanSummary::from_value(&ai);

    assert_eq!(summary.meals.len(), 2);
    assert_eq!(
        summary.meals[0],
        MealEntry::Structured {
            name: "Tomato Spinach Pasta".to_string(),
            ingredients: vec![
                "Pasta (200 g)".to_string(),
                "Tomatoes (4)".to_string(),
                "Spinach".to_string(),
                "Olive oil (2 tbsp)".to_string(),
            ],
            instructions:
                "Boil the pasta, blister the tomatoes, wilt the spinach, toss together."
                    .to_string(),
        }
    );

    let grocery = summary.grocery.unwrap();
    assert_eq!(
        grocery,
        GroceryView::Sections(vec![
            GrocerySection {
                name: "Produce".to_string(),
                items: vec!["Tomatoes".to_string(), "Spinach".to_string()],
            },
            GrocerySection {
                name: "Dairy".to_string(),
                items: vec!["Eggs (6)".to_string()],
            },
            GrocerySection {
                name: "Pantry".to_string(),
                items: vec![
                    "Pasta".to_string(),
                    "Olive oil".to_string(),
                    "Salt".to_string()
                ],
            },
        ])
    );

    return Ok(());
}

#[test]
fn it_wraps_a_bare_string_meal() -> Result<()> {
    let ai: Value = serde_json::from_str(ai_response_loose_fixture())?;
    let summary = PlanSummary::from_value(&ai);

    assert_eq!(
        summary.meals,
        vec![MealEntry::Text("Pasta night".to_string())]
    );
    assert_eq!(
        summary.grocery,
        Some(GroceryView::Flat(vec![
            "Pasta".to_string(),
            "Tomatoes".to_string(),
            "Spinach".to_string(),
        ]))
    );

    return Ok(());
}

#[test]
fn it_renders_nothing_when_fields_are_missing() {
    let summary = PlanSummary::from_value(&json!({}));
    assert!(summary.meals.is_empty());
    assert!(summary.grocery.is_none());

    // A response that is not even an object normalizes the same way.
    let summary = PlanSummary::from_value(&json!("the model said no"));
    assert!(summary.meals.is_empty());
    assert!(summary.grocery.is_none());
}

#[test]
fn it_labels_falsy_and_scalar_meals() {
    let summary = PlanSummary::from_value(&json!({ "meals": [null, "Soup", 42] }));

    assert_eq!(
        summary.meals,
        vec![
            MealEntry::Text("Meal 1".to_string()),
            MealEntry::Text("Soup".to_string()),
            MealEntry::Structured {
                name: "Meal 3".to_string(),
                ingredients: vec![],
                instructions: "".to_string(),
            },
        ]
    );
}

#[test]
fn it_defaults_missing_meal_fields() {
    let summary = PlanSummary::from_value(&json!({ "meals": [{}] }));

    assert_eq!(
        summary.meals,
        vec![MealEntry::Structured {
            name: "Meal 1".to_string(),
            ingredients: vec![],
            instructions: "".to_string(),
        }]
    );
}

#[test]
fn it_coerces_non_array_ingredients() {
    let summary = PlanSummary::from_value(&json!({
        "meals": { "name": "Toast", "ingredients": "Bread" }
    }));

    assert_eq!(
        summary.meals,
        vec![MealEntry::Structured {
            name: "Toast".to_string(),
            ingredients: vec!["Bread".to_string()],
            instructions: "".to_string(),
        }]
    );
}

#[test]
fn it_labels_ingredient_objects() {
    let summary = PlanSummary::from_value(&json!({
        "meals": [{
            "name": "Bread",
            "ingredients": [
                { "item": "Flour", "quantity": 2, "unit": "cups" },
                { "item": "Salt" },
                { "quantity": 1, "unit": "tsp" },
                null,
            ],
        }]
    }));

    match &summary.meals[0] {
        MealEntry::Structured { ingredients, .. } => {
            assert_eq!(
                ingredients,
                &vec![
                    "Flour (2 cups)".to_string(),
                    "Salt".to_string(),
                    "Unnamed ingredient (1 tsp)".to_string(),
                    "Unnamed ingredient".to_string(),
                ]
            );
        }
        entry => panic!("expected a structured meal, got {entry:?}"),
    }
}

#[test]
fn it_keeps_flat_grocery_lists_flat() {
    let summary = PlanSummary::from_value(&json!({ "grocery_list": ["Milk", "Eggs"] }));

    assert_eq!(
        summary.grocery,
        Some(GroceryView::Flat(vec![
            "Milk".to_string(),
            "Eggs".to_string()
        ]))
    );
}

#[test]
fn it_sections_keyed_grocery_lists_in_key_order() {
    let summary = PlanSummary::from_value(&json!({
        "grocery_list": { "Dairy": ["Milk"], "Produce": "Tomato" }
    }));

    assert_eq!(
        summary.grocery,
        Some(GroceryView::Sections(vec![
            GrocerySection {
                name: "Dairy".to_string(),
                items: vec!["Milk".to_string()],
            },
            GrocerySection {
                name: "Produce".to_string(),
                items: vec!["Tomato".to_string()],
            },
        ]))
    );
}

#[test]
fn it_labels_grocery_items() {
    let summary = PlanSummary::from_value(&json!({
        "grocery_list": [
            { "item": "Eggs", "quantity": "6" },
            { "item": "Salt" },
            { "quantity": 2 },
            null,
            3,
        ]
    }));

    assert_eq!(
        summary.grocery,
        Some(GroceryView::Flat(vec![
            "Eggs (6)".to_string(),
            "Salt".to_string(),
            "Unnamed item (2)".to_string(),
            "Unnamed item".to_string(),
            "3".to_string(),
        ]))
    );
}

#[test]
fn it_wraps_a_scalar_grocery_list() {
    let summary = PlanSummary::from_value(&json!({ "grocery_list": "Just milk" }));

    assert_eq!(
        summary.grocery,
        Some(GroceryView::Flat(vec!["Just milk".to_string()]))
    );
}

#[test]
fn it_resolves_section_icons() {
    assert_eq!(section_icon("Dairy"), "🥛");
    assert_eq!(section_icon("Produce"), "🍅");
    assert_eq!(section_icon("Cleaning Supplies"), DEFAULT_ICON);
}
