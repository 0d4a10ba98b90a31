use nutriai_core::domain::recipe::value_objects::{DEFAULT_SERVINGS, IngredientRecipeInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /recipes-by-ingredient`. Only `ingredient` is required;
/// `servings` falls back to 1 when absent or null.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRecipeRequest {
    #[schema(example = "chickpeas")]
    pub ingredient: String,

    #[serde(default)]
    pub goal: Option<String>,

    #[serde(default)]
    pub diet_type: Option<String>,

    #[serde(default)]
    pub allergy: Option<String>,

    #[serde(default)]
    #[schema(default = 1)]
    pub servings: Option<i64>,
}

impl From<IngredientRecipeRequest> for IngredientRecipeInput {
    fn from(request: IngredientRecipeRequest) -> Self {
        IngredientRecipeInput {
            ingredient: request.ingredient,
            goal: request.goal,
            diet_type: request.diet_type,
            allergy: request.allergy,
            servings: request.servings.unwrap_or(DEFAULT_SERVINGS),
        }
    }
}
