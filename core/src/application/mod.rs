use crate::{
    domain::common::{NutriAiConfig, services::Service},
    infrastructure::llm::OpenAiCompletionClient,
};

pub type NutriAiService = Service<OpenAiCompletionClient>;

/// Builds the request pipeline with its credential and completion boundary
/// injected once, at startup.
pub fn create_service(config: NutriAiConfig) -> NutriAiService {
    let llm_client = OpenAiCompletionClient::new(config.llm.base_url, config.llm.model);

    Service::new(llm_client, config.llm.api_key)
}
