use crate::domain::prompt::{
    entities::{ComposedPrompt, PromptField},
    ports::PromptSubject,
};

pub const SYSTEM_INSTRUCTION: &str = "You are a nutrition assistant. \
Always respect the user's diet type and never use the allergen they name. \
Provide practical, balanced meals. Do not provide medical diagnosis. \
Keep nutrient grams numerically consistent with the calories you report: \
protein is about 4 kcal per gram, carbs about 4 kcal per gram and fiber about 2 kcal per gram.";

/// Rendered in place of a field the caller did not supply.
pub const UNKNOWN_MARKER: &str = "unknown (not provided)";

const REPLY_INSTRUCTION: &str =
    "Return ONLY a JSON object EXACTLY in this format (no extra text, no markdown):";

/// Renders the system and user instructions for `subject`.
///
/// Pure: the same subject always yields byte-identical text.
pub fn compose_prompt<S>(subject: &S) -> ComposedPrompt
where
    S: PromptSubject + ?Sized,
{
    let mode = subject.mode();

    let fields = subject
        .prompt_fields()
        .iter()
        .map(render_field)
        .collect::<Vec<_>>()
        .join("\n");

    let user = format!(
        "{task}\n\nUser:\n{fields}\n\n{REPLY_INSTRUCTION}\n\n{example}\n",
        task = mode.task_instruction(),
        example = mode.reply_example(),
    );

    ComposedPrompt {
        mode,
        system: SYSTEM_INSTRUCTION.to_string(),
        user,
    }
}

fn render_field(field: &PromptField) -> String {
    format!(
        "- {}: {}",
        field.name,
        field.value.as_deref().unwrap_or(UNKNOWN_MARKER)
    )
}
