use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, completion::entities::ReplyEnvelope,
    prompt::entities::ComposedPrompt,
};

/// The external completion boundary.
///
/// Implementations make exactly one outbound call per invocation and ask the
/// provider to format its reply as a single JSON object.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionClient: Send + Sync {
    fn complete(
        &self,
        credential: String,
        prompt: ComposedPrompt,
    ) -> impl Future<Output = Result<ReplyEnvelope, CoreError>> + Send;
}
