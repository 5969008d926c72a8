//! Extraction of the commit message from a generate envelope.
//!
//! The endpoint's reply double-encodes the interesting part: the outer
//! envelope is the transport response, and its `response` field is a string
//! that itself holds the model's JSON output.

use serde_json::Value;

use super::ollama::GenerateResponse;
use super::prompts;

/// Pull the commit message out of a generate envelope.
///
/// Reads the inner `response` text (treating an absent field as an empty
/// object), parses it as JSON and returns its `commit_message` string. Every
/// failure mode substitutes the fixed fallback, so this never fails outward.
pub fn commit_message(resp: &GenerateResponse) -> String {
    let inner = resp.response.as_deref().unwrap_or("{}");

    match serde_json::from_str::<Value>(inner) {
        Ok(fields) => fields
            .get("commit_message")
            .and_then(Value::as_str)
            .unwrap_or(prompts::NO_MESSAGE_FALLBACK)
            .to_string(),
        Err(err) => {
            log::error!("Error decoding JSON response: {err}");
            prompts::NO_MESSAGE_FALLBACK.to_string()
        }
    }
}
