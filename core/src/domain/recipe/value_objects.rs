use crate::domain::prompt::{
    entities::{PromptField, PromptMode},
    ports::PromptSubject,
};

pub const DEFAULT_SERVINGS: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRecipeInput {
    pub ingredient: String,
    pub goal: Option<String>,
    pub diet_type: Option<String>,
    pub allergy: Option<String>,
    pub servings: i64,
}

impl PromptSubject for IngredientRecipeInput {
    fn mode(&self) -> PromptMode {
        PromptMode::IngredientRecipes
    }

    fn prompt_fields(&self) -> Vec<PromptField> {
        vec![
            PromptField::new("ingredient", &self.ingredient),
            PromptField::optional("goal", self.goal.as_ref()),
            PromptField::optional("dietType", self.diet_type.as_ref()),
            PromptField::optional("allergy", self.allergy.as_ref()),
            PromptField::new("servings", self.servings),
        ]
    }
}
