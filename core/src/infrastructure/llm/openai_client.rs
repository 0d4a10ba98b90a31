use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    completion::{
        entities::{ReplyEnvelope, ReplySegment},
        ports::CompletionClient,
    },
    prompt::entities::ComposedPrompt,
};

/// Completion boundary backed by the OpenAI Responses API.
///
/// Uses reqwest's default timeouts and never retries.
#[derive(Debug, Clone)]
pub struct OpenAiCompletionClient {
    base_url: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest {
    model: String,
    input: Vec<InputMessage>,
    text: TextConfig,
}

#[derive(Debug, Serialize)]
struct InputMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct TextConfig {
    format: TextFormat,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TextFormat {
    JsonObject,
}

#[derive(Debug, Deserialize)]
struct ResponsesReply {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

/// Both top-level output items and the content parts of a `message` item.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutputItem {
    OutputText {
        text: String,
    },
    Message {
        #[serde(default)]
        content: Vec<OutputItem>,
    },
    #[serde(other)]
    Other,
}

impl OutputItem {
    fn collect_segments(self, segments: &mut Vec<ReplySegment>) {
        match self {
            OutputItem::OutputText { text } => segments.push(ReplySegment::output_text(text)),
            OutputItem::Message { content } => {
                for part in content {
                    part.collect_segments(segments);
                }
            }
            OutputItem::Other => segments.push(ReplySegment::other()),
        }
    }
}

impl From<ResponsesReply> for ReplyEnvelope {
    fn from(reply: ResponsesReply) -> Self {
        let mut segments = Vec::new();
        for item in reply.output {
            item.collect_segments(&mut segments);
        }

        ReplyEnvelope::from_parts(reply.output_text, segments)
    }
}

impl OpenAiCompletionClient {
    pub fn new(base_url: String, model_name: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name,
            client: Client::new(),
        }
    }

    fn build_request(&self, prompt: ComposedPrompt) -> ResponsesRequest {
        ResponsesRequest {
            model: self.model_name.clone(),
            input: vec![
                InputMessage {
                    role: "system",
                    content: prompt.system,
                },
                InputMessage {
                    role: "user",
                    content: prompt.user,
                },
            ],
            text: TextConfig {
                format: TextFormat::JsonObject,
            },
        }
    }

    async fn call_responses_api(
        &self,
        credential: &str,
        request: ResponsesRequest,
    ) -> Result<ReplyEnvelope, CoreError> {
        let url = format!("{}/responses", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(credential)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::UpstreamFailure(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamFailure(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let reply: ResponsesReply = response.json().await.map_err(|e| {
            tracing::error!("Failed to decode OpenAI response: {}", e);
            CoreError::UpstreamFailure(format!("Failed to decode LLM response: {}", e))
        })?;

        Ok(reply.into())
    }
}

impl CompletionClient for OpenAiCompletionClient {
    async fn complete(
        &self,
        credential: String,
        prompt: ComposedPrompt,
    ) -> Result<ReplyEnvelope, CoreError> {
        let request = self.build_request(prompt);
        self.call_responses_api(&credential, request).await
    }
}
