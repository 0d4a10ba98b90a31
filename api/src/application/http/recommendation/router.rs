use super::handlers::create_recommendations::{
    __path_create_recommendations, create_recommendations,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_recommendations))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/recommendations", state.args.server.root_path),
        post(create_recommendations),
    )
}
