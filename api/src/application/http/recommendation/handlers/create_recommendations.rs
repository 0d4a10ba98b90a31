use axum::extract::State;
use nutriai_core::domain::recommendation::{
    entities::RecommendationResponse, ports::RecommendationService,
};

use crate::application::http::{
    recommendation::validators::RecommendationRequest,
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
    tag = "recommendation",
    summary = "Recommend a one-day meal plan",
    description = "Builds a meal-plan prompt from the user's goal, diet and allergy, asks the LLM for a JSON reply and returns it once it matches the declared shape.",
    responses(
        (status = 200, body = RecommendationResponse),
        (status = 422, body = ErrorResponse, description = "Request body does not bind"),
        (status = 500, body = ErrorResponse, description = "Missing credential, upstream failure or invalid model output")
    ),
    request_body = RecommendationRequest
)]
pub async fn create_recommendations(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendationRequest>,
) -> Result<Response<RecommendationResponse>, ApiError> {
    let plan = state
        .service
        .recommend_meals(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}
