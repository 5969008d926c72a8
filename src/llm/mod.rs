pub mod ollama;

mod extract;
mod prompt_builder;
mod prompts;

use crate::error::LlmError;

/// Trait for talking to an LLM (real or dummy).
///
/// Both methods return an already-extracted commit message; failures carry a
/// tagged reason so the orchestrator decides skip-vs-continue explicitly.
pub trait LlmClient {
    /// Generate a commit message for one file's diff.
    fn message_for_diff(&self, diff: &str) -> Result<String, LlmError>;

    /// Merge the per-file messages into one cohesive commit message.
    fn merge_messages(&self, messages: &[String]) -> Result<String, LlmError>;
}
