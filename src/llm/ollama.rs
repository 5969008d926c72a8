use musli::json;
use musli::Decode;
use reqwest::blocking::Client;

use crate::config::Config;
use crate::error::LlmError;

use super::prompt_builder::GenerateRequest;
use super::{extract, prompt_builder, LlmClient};

/// Envelope returned by `/api/generate`. Every field except `response` is
/// ignored; `response` is itself JSON text produced by the model.
#[derive(Debug, Decode)]
pub struct GenerateResponse {
    #[musli(default)]
    pub response: Option<String>,
}

/// Synchronous Ollama client using /api/generate.
pub struct OllamaClient {
    http: Client,
    api_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(cfg: &Config) -> Self {
        // No explicit timeout; the transport default applies.
        Self {
            http: Client::new(),
            api_url: cfg.api_url.clone(),
            model: cfg.model.clone(),
        }
    }

    /// One blocking POST per call. No retry, no backoff; a failed call is
    /// logged here exactly once and returned as a tagged error.
    fn generate(&self, prompt: String) -> Result<String, LlmError> {
        match self.request(prompt) {
            Ok(envelope) => Ok(extract::commit_message(&envelope)),
            Err(err) => {
                log::error!("Error making request: {err}");
                Err(err)
            }
        }
    }

    fn request(&self, prompt: String) -> Result<GenerateResponse, LlmError> {
        let req = GenerateRequest::new(self.model.clone(), prompt);
        let body = json::to_string(&req).map_err(|e| LlmError::Encode {
            reason: e.to_string(),
        })?;

        log::trace!("Ollama request body: {body}");

        let resp = self
            .http
            .post(&self.api_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| LlmError::Transport {
                url: self.api_url.clone(),
                source: e,
            })?
            .error_for_status()
            .map_err(|e| LlmError::Transport {
                url: self.api_url.clone(),
                source: e,
            })?;

        let text = resp.text().map_err(|e| LlmError::Transport {
            url: self.api_url.clone(),
            source: e,
        })?;

        log::trace!("Ollama raw JSON response: {text}");

        let envelope: GenerateResponse =
            json::from_str(&text).map_err(|e| LlmError::BadResponse {
                url: self.api_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(envelope)
    }
}

impl LlmClient for OllamaClient {
    fn message_for_diff(&self, diff: &str) -> Result<String, LlmError> {
        self.generate(prompt_builder::diff_prompt(diff))
    }

    fn merge_messages(&self, messages: &[String]) -> Result<String, LlmError> {
        self.generate(prompt_builder::merge_prompt(messages))
    }
}

/// No-op / dummy model client for --no-model or model=none runs.
pub struct NoopClient;

impl LlmClient for NoopClient {
    fn message_for_diff(&self, diff: &str) -> Result<String, LlmError> {
        Ok(format!(
            "[DUMMY] Commit message for a {}-line diff",
            diff.lines().count()
        ))
    }

    fn merge_messages(&self, messages: &[String]) -> Result<String, LlmError> {
        Ok(format!(
            "[DUMMY] Merged commit message covering {} change(s)",
            messages.len()
        ))
    }
}
