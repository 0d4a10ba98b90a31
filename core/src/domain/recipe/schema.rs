/// Reply shape embedded in the ingredient-recipes prompt.
pub const RECIPES_REPLY_EXAMPLE: &str = r#"{
  "ingredient": "...",
  "recipes": [
    {
      "name": "...",
      "ingredients": ["...", "..."],
      "steps": ["...", "..."],
      "calories": 0,
      "nutrients": {
        "protein_g": 0,
        "carbs_g": 0,
        "fiber_g": 0
      }
    }
  ]
}"#;
