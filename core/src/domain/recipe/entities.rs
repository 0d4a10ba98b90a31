use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::common::entities::Nutrients;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecipeItem {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[validate(range(min = 0, max = 3000))]
    #[serde(deserialize_with = "crate::domain::common::entities::whole_number::deserialize")]
    pub calories: i64,
    #[validate(nested)]
    pub nutrients: Nutrients,
}

/// Recipe ideas for one ingredient.
///
/// The prompt asks for three recipes but the count is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct IngredientRecipeResponse {
    pub ingredient: String,
    #[validate(nested)]
    pub recipes: Vec<RecipeItem>,
}
