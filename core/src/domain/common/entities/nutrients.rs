use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Macro-nutrient grams reported by the model.
///
/// Only the ranges are enforced here. The kcal-per-gram relationship stated in
/// the system instruction is guidance for the model and is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Nutrients {
    #[validate(range(min = 0, max = 500))]
    #[serde(deserialize_with = "crate::domain::common::entities::whole_number::deserialize")]
    pub protein_g: i64,
    #[validate(range(min = 0, max = 800))]
    #[serde(deserialize_with = "crate::domain::common::entities::whole_number::deserialize")]
    pub carbs_g: i64,
    #[validate(range(min = 0, max = 200))]
    #[serde(deserialize_with = "crate::domain::common::entities::whole_number::deserialize")]
    pub fiber_g: i64,
}
