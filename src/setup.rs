use log::debug;

use crate::cli_args::Cli;
use crate::config::Config;
use crate::llm::ollama::{NoopClient, OllamaClient};
use crate::llm::LlmClient;

/// Build the LLM client based on CLI + config.
pub fn build_llm_client(cli: &Cli, cfg: &Config) -> Box<dyn LlmClient> {
    if cli.no_model || cfg.model.to_lowercase() == "none" {
        debug!("Using NoopClient (no model calls)");
        return Box::new(NoopClient);
    }

    debug!("Using OllamaClient at {} with model: {}", cfg.api_url, cfg.model);

    Box::new(OllamaClient::new(cfg))
}
