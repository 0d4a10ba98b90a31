use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::common::entities::Nutrients;

/// A one-day meal plan as produced by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    #[validate(range(min = 0, max = 6000))]
    #[serde(deserialize_with = "crate::domain::common::entities::whole_number::deserialize")]
    pub total_calories: i64,
    #[validate(nested)]
    pub nutrients: Nutrients,
}
