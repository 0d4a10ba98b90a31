use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

pub const ENDPOINTS: [&str; 4] = [
    "/health",
    "/recommendations",
    "/recipes-by-ingredient",
    "/docs",
];

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub ok: bool,
    pub message: String,
    pub endpoints: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Service discovery",
    description = "Reports that the service is running and lists its endpoints.",
    responses(
        (status = 200, body = RootResponse)
    ),
)]
pub async fn get_root(State(state): State<AppState>) -> Json<RootResponse> {
    let root_path = &state.args.server.root_path;

    Json(RootResponse {
        ok: true,
        message: "Nutrition AI Backend is running".to_string(),
        endpoints: ENDPOINTS
            .iter()
            .map(|endpoint| format!("{root_path}{endpoint}"))
            .collect(),
    })
}
