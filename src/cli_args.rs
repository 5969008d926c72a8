use clap::{ArgAction, ArgGroup, Parser};

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "diffsum",
    version,
    about = "Summarize staged and unstaged git diffs into one commit message with a local LLM"
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
pub struct Cli {
    /// Model name to use (e.g. qwen2:72b-instruct). If 'none', acts like --no-model.
    #[arg(long)]
    pub model: Option<String>,

    /// Disable model calls; produce placeholder messages instead
    #[arg(long)]
    pub no_model: bool,

    /// Inference endpoint URL (otherwise uses DIFFSUM_API_URL env var)
    #[arg(long, env = "DIFFSUM_API_URL")]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
