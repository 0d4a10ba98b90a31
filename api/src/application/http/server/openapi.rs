use crate::application::http::{
    health::handlers::{get_health::__path_get_health, get_root::__path_get_root},
    recipe::router::RecipeApiDoc,
    recommendation::router::RecommendationApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutrition AI Backend"
    ),
    paths(get_root, get_health),
    nest(
        (path = "/recommendations", api = RecommendationApiDoc),
        (path = "/recipes-by-ingredient", api = RecipeApiDoc),
    )
)]
pub struct ApiDoc;
