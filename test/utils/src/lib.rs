/// A model response exercising every shape the planner service has been
/// seen returning: structured meals with object ingredients, and a
/// grocery list keyed by section.
pub fn ai_response_fixture() -> &'static str {
    return r#"{
  "meals": [
    {
      "name": "Tomato Spinach Pasta",
      "ingredients": [
        { "item": "Pasta", "quantity": 200, "unit": "g" },
        { "item": "Tomatoes", "quantity": 4 },
        "Spinach",
        { "item": "Olive oil", "quantity": 2, "unit": "tbsp" }
      ],
      "instructions": "Boil the pasta, blister the tomatoes, wilt the spinach, toss together."
    },
    {
      "name": "Spinach Omelette",
      "ingredients": [
        { "item": "Eggs", "quantity": 3 },
        "Spinach",
        { "item": "Salt" }
      ],
      "instructions": "Whisk, pour, fold."
    }
  ],
  "grocery_list": {
    "Produce": ["Tomatoes", "Spinach"],
    "Dairy": [{ "item": "Eggs", "quantity": "6" }],
    "Pantry": ["Pasta", "Olive oil", "Salt"]
  }
}"#;
}

/// A response where the model ignored the requested format and returned
/// plain strings instead of structured objects.
pub fn ai_response_loose_fixture() -> &'static str {
    return r#"{
  "meals": "Pasta night",
  "grocery_list": ["Pasta", "Tomatoes", "Spinach"]
}"#;
}
