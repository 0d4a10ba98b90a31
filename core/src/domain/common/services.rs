use serde::de::DeserializeOwned;
use tracing::{Instrument, debug, error, info_span};
use validator::Validate;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    completion::{
        entities::CompletionStage,
        ports::CompletionClient,
        services::{extract_payload, parse_json, validate_reply},
    },
    prompt::entities::ComposedPrompt,
};

/// Request pipeline shared by every prompt mode.
///
/// Holds no mutable state: the credential and the completion boundary are
/// fixed at construction and each call builds its prompt and reply fresh.
#[derive(Clone, Debug)]
pub struct Service<LLM>
where
    LLM: CompletionClient,
{
    pub(crate) llm_client: LLM,
    pub(crate) credential: Option<String>,
}

impl<LLM> Service<LLM>
where
    LLM: CompletionClient,
{
    pub fn new(llm_client: LLM, credential: Option<String>) -> Self {
        Self {
            llm_client,
            credential: credential.filter(|key| !key.trim().is_empty()),
        }
    }

    /// Returns the configured credential or fails before any outbound call.
    pub(crate) fn credential(&self) -> Result<String, CoreError> {
        self.credential.clone().ok_or_else(CoreError::missing_credential)
    }

    /// Sends `prompt` to the completion boundary once and validates the reply
    /// as `T`.
    pub(crate) async fn complete_as<T>(
        &self,
        credential: String,
        prompt: ComposedPrompt,
    ) -> Result<T, CoreError>
    where
        T: DeserializeOwned + Validate,
    {
        let span = info_span!(
            "completion",
            request_id = %generate_uuid_v7(),
            mode = prompt.mode.as_str()
        );

        async move {
            let mut stage = CompletionStage::Pending;
            debug!(?stage, "calling completion boundary");

            let result = async {
                let envelope = self.llm_client.complete(credential, prompt).await?;
                let payload = extract_payload(&envelope);

                stage = CompletionStage::ParsingJson;
                debug!(?stage, payload_len = payload.len(), "reply received");
                let value = parse_json(&payload)?;

                stage = CompletionStage::Validating;
                debug!(?stage, "reply parsed");
                validate_reply::<T>(value)
            }
            .await;

            match result {
                Ok(reply) => {
                    debug!(stage = ?CompletionStage::Done, "completion validated");
                    Ok(reply)
                }
                Err(e) => {
                    error!(?stage, error = %e, "completion pipeline failed");
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }
}
