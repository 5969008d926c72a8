use crate::cli_args::Cli;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default inference endpoint: a locally hosted Ollama instance.
pub const DEFAULT_API_URL: &str = "http://localhost:11434/api/generate";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "qwen2:72b-instruct";

/// Final resolved configuration for diffsum.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub model: String,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--api-url`)
    ///   2. Env vars `DIFFSUM_MODEL` / `DIFFSUM_API_URL`
    ///   3. TOML `~/.config/diffsum.toml`
    ///   4. Hardcoded defaults (local Ollama, "qwen2:72b-instruct")
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();

        let model_cli = cli.model.clone();
        let model_env = env::var("DIFFSUM_MODEL").ok();

        let model = model_cli
            .or(model_env)
            .or(file_cfg.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        // clap resolves DIFFSUM_API_URL into cli.api_url already.
        let api_url = cli
            .api_url
            .clone()
            .or(file_cfg.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Config { api_url, model }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    pub api_url: Option<String>,
}

/// Return `~/.config/diffsum.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("diffsum.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    toml::from_str::<FileConfig>(&data).ok()
}
