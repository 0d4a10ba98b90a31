use axum::{Router, routing::get};

use super::handlers::{get_health::get_health, get_root::get_root};
use crate::application::http::server::app_state::AppState;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    let discovery_path = if root_path.is_empty() { "/" } else { root_path };

    Router::new()
        .route(discovery_path, get(get_root))
        .route(&format!("{}/health", root_path), get(get_health))
}
