/// Reply shape embedded in the meal-plan prompt.
pub const MEAL_PLAN_REPLY_EXAMPLE: &str = r#"{
  "breakfast": "...",
  "lunch": "...",
  "dinner": "...",
  "totalCalories": 0,
  "nutrients": {
    "protein_g": 0,
    "carbs_g": 0,
    "fiber_g": 0
  }
}"#;
