pub mod create_recipes_by_ingredient;
