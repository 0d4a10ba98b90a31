use crate::domain::prompt::entities::{PromptField, PromptMode};

/// A bound request that can be rendered into a prompt.
pub trait PromptSubject {
    fn mode(&self) -> PromptMode;

    /// Every field of the request, in display order, including absent ones.
    fn prompt_fields(&self) -> Vec<PromptField>;
}
