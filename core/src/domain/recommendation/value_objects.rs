use crate::domain::prompt::{
    entities::{PromptField, PromptMode},
    ports::PromptSubject,
};

/// Bound meal-plan request. Optional profile fields stay `None` when the
/// caller did not supply them; zero is a real value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationInput {
    pub goal: String,
    pub diet_type: String,
    pub allergy: String,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub height: Option<i64>,
    pub weight: Option<i64>,
}

impl PromptSubject for RecommendationInput {
    fn mode(&self) -> PromptMode {
        PromptMode::MealPlan
    }

    fn prompt_fields(&self) -> Vec<PromptField> {
        vec![
            PromptField::new("goal", &self.goal),
            PromptField::new("dietType", &self.diet_type),
            PromptField::new("allergy", &self.allergy),
            PromptField::optional("age", self.age.as_ref()),
            PromptField::optional("gender", self.gender.as_ref()),
            PromptField::optional("height", self.height.as_ref()),
            PromptField::optional("weight", self.weight.as_ref()),
        ]
    }
}
