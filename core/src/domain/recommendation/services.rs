use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    completion::ports::CompletionClient,
    prompt::services::compose_prompt,
    recommendation::{
        entities::RecommendationResponse, ports::RecommendationService,
        value_objects::RecommendationInput,
    },
};

impl<LLM> RecommendationService for Service<LLM>
where
    LLM: CompletionClient,
{
    async fn recommend_meals(
        &self,
        input: RecommendationInput,
    ) -> Result<RecommendationResponse, CoreError> {
        let credential = self.credential()?;
        let prompt = compose_prompt(&input);

        self.complete_as(credential, prompt).await
    }
}
