/// Instruction head for a single file's diff.
pub const DIFF_INSTRUCTIONS: &str = "You are a helpful coding assistant. \
Based on the following git diff, write a concise and informative git commit message \
that clearly explains the changes made.";

/// Instruction head for merging the per-file messages into one.
pub const MERGE_INSTRUCTIONS: &str = "You are a helpful assistant. \
Based on the following individual commit messages, combine them into one concise \
and cohesive commit message that clearly explains the overall changes made.";

/// Response schema both prompt variants ask the model to honor.
pub const RESPONSE_SCHEMA: &str =
    r#"{"commit_message": "your commit message", "explanation": "your explanation"}"#;

/// One-shot example shown before the actual diff.
pub const DIFF_EXAMPLE: &str = "Example diff:\n```diff\n- old_algo()\n+ new_algo()\n```\n\
Example commit message: \"Updated function to use new algorithm for better performance.\"";

/// Fallback when the model's reply has no usable `commit_message` field.
pub const NO_MESSAGE_FALLBACK: &str = "No commit message found";
