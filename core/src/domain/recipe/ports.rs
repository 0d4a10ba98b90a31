use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::IngredientRecipeResponse, value_objects::IngredientRecipeInput},
};

pub trait RecipeService: Send + Sync {
    fn recipes_by_ingredient(
        &self,
        input: IngredientRecipeInput,
    ) -> impl Future<Output = Result<IngredientRecipeResponse, CoreError>> + Send;
}
