use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

/// Environment variable holding the completion boundary credential.
pub const CREDENTIAL_ENV_VAR: &str = "OPENAI_API_KEY";

#[derive(Clone, Debug)]
pub struct NutriAiConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// `None` is accepted at startup; every pipeline invocation then fails
    /// with a configuration error before reaching the network.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
