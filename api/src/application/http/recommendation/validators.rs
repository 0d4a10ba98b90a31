use nutriai_core::domain::recommendation::value_objects::RecommendationInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /recommendations`. `goal`, `dietType` and `allergy` must be
/// present and non-null; profile fields may be absent or null.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[schema(example = "lose weight")]
    pub goal: String,
    #[schema(example = "vegan")]
    pub diet_type: String,
    #[schema(example = "peanuts")]
    pub allergy: String,

    #[serde(default)]
    pub age: Option<i64>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub height: Option<i64>,

    #[serde(default)]
    pub weight: Option<i64>,
}

impl From<RecommendationRequest> for RecommendationInput {
    fn from(request: RecommendationRequest) -> Self {
        RecommendationInput {
            goal: request.goal,
            diet_type: request.diet_type,
            allergy: request.allergy,
            age: request.age,
            gender: request.gender,
            height: request.height,
            weight: request.weight,
        }
    }
}
