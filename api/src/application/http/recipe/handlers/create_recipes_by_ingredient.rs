use axum::extract::State;
use nutriai_core::domain::recipe::{entities::IngredientRecipeResponse, ports::RecipeService};

use crate::application::http::{
    recipe::validators::IngredientRecipeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Suggest recipes for an ingredient",
    description = "Asks the LLM for three recipe ideas built around one ingredient. The recipe count is requested in the prompt but not enforced on the reply.",
    responses(
        (status = 200, body = IngredientRecipeResponse),
        (status = 422, body = ErrorResponse, description = "Request body does not bind"),
        (status = 500, body = ErrorResponse, description = "Missing credential, upstream failure or invalid model output")
    ),
    request_body = IngredientRecipeRequest
)]
pub async fn create_recipes_by_ingredient(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<IngredientRecipeRequest>,
) -> Result<Response<IngredientRecipeResponse>, ApiError> {
    let recipes = state
        .service
        .recipes_by_ingredient(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recipes))
}
