use super::handlers::create_recipes_by_ingredient::{
    __path_create_recipes_by_ingredient, create_recipes_by_ingredient,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_recipes_by_ingredient))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/recipes-by-ingredient", state.args.server.root_path),
        post(create_recipes_by_ingredient),
    )
}
