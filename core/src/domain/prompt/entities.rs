use crate::domain::{
    recipe::schema::RECIPES_REPLY_EXAMPLE, recommendation::schema::MEAL_PLAN_REPLY_EXAMPLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    MealPlan,
    IngredientRecipes,
}

impl PromptMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptMode::MealPlan => "meal_plan",
            PromptMode::IngredientRecipes => "ingredient_recipes",
        }
    }

    /// Opening line of the user instruction.
    pub fn task_instruction(&self) -> &'static str {
        match self {
            PromptMode::MealPlan => {
                "Create a 1-day meal plan with breakfast, lunch and dinner."
            }
            PromptMode::IngredientRecipes => {
                "Suggest exactly 3 recipe ideas built around the ingredient below. \
                 Each recipe needs a name, an ingredient list, ordered steps, \
                 calories per serving and nutrients per serving."
            }
        }
    }

    /// Literal reply shape, with placeholder values, that the model must match.
    pub fn reply_example(&self) -> &'static str {
        match self {
            PromptMode::MealPlan => MEAL_PLAN_REPLY_EXAMPLE,
            PromptMode::IngredientRecipes => RECIPES_REPLY_EXAMPLE,
        }
    }
}

/// One bound request field as restated to the model. `None` means the caller
/// supplied no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptField {
    pub name: &'static str,
    pub value: Option<String>,
}

impl PromptField {
    pub fn new(name: &'static str, value: impl ToString) -> Self {
        Self {
            name,
            value: Some(value.to_string()),
        }
    }

    pub fn optional<T: ToString>(name: &'static str, value: Option<&T>) -> Self {
        Self {
            name,
            value: value.map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub mode: PromptMode,
    pub system: String,
    pub user: String,
}
