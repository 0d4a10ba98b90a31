use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{entities::RecommendationResponse, value_objects::RecommendationInput},
};

pub trait RecommendationService: Send + Sync {
    fn recommend_meals(
        &self,
        input: RecommendationInput,
    ) -> impl Future<Output = Result<RecommendationResponse, CoreError>> + Send;
}
