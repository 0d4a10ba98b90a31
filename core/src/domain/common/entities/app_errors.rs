use thiserror::Error;

use crate::domain::common::CREDENTIAL_ENV_VAR;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required setting (the completion credential) is absent.
    #[error("{0} not set")]
    Configuration(String),

    /// The reply payload is not parseable JSON. Carries at most
    /// [`RAW_EXCERPT_LIMIT`](crate::domain::completion::services::RAW_EXCERPT_LIMIT)
    /// characters of the raw payload.
    #[error("AI did not return valid JSON. Raw: {excerpt}")]
    MalformedModelOutput { excerpt: String },

    #[error("AI response did not match the expected shape: {0}")]
    SchemaViolation(String),

    #[error("{0}")]
    UpstreamFailure(String),
}

impl CoreError {
    pub fn missing_credential() -> Self {
        CoreError::Configuration(CREDENTIAL_ENV_VAR.to_string())
    }
}
