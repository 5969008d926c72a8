use musli::Encode;

use crate::llm::prompts;

/// Wire payload for `/api/generate`, encoded with musli's JSON codec.
///
/// Built fresh per call and immutable once built. `stream` and `format` are
/// pinned so every call is a single non-streaming structured-JSON response.
#[derive(Debug, Encode)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub format: String,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            format: "json".to_string(),
        }
    }
}

/// Prompt asking for a commit message for one file's diff.
///
/// The diff is embedded verbatim inside a ```diff fence; a diff that itself
/// contains the fence delimiter will corrupt the framing.
pub fn diff_prompt(diff: &str) -> String {
    format!(
        "{} Your response must be in JSON format, following this schema: {}\n\n\
         {}\n\nActual diff:\n```diff\n{}\n```",
        prompts::DIFF_INSTRUCTIONS,
        prompts::RESPONSE_SCHEMA,
        prompts::DIFF_EXAMPLE,
        diff
    )
}

/// Prompt asking for one cohesive message synthesized from per-file messages,
/// each rendered as a bulleted line.
pub fn merge_prompt(messages: &[String]) -> String {
    let bullets = messages
        .iter()
        .map(|msg| format!("- {msg}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{} Your response must be in JSON format, following this schema: {}\n\n\
         Individual commit messages:\n{}",
        prompts::MERGE_INSTRUCTIONS,
        prompts::RESPONSE_SCHEMA,
        bullets
    )
}
