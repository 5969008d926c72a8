use thiserror::Error;

/// Failures from invoking git.
///
/// A failed command is distinct from a command that succeeds with empty
/// output; callers decide what to do with each.
#[derive(Debug, Error)]
pub enum GitError {
    /// git could not be spawned at all (not installed or not executable).
    #[error("failed to run git {args}: {source}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },

    /// git ran but exited with a non-zero status.
    #[error("git {args} exited with status {status:?}")]
    NonZero { args: String, status: Option<i32> },
}

/// Failures from the inference endpoint.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The request payload could not be encoded as JSON.
    #[error("failed to encode request: {reason}")]
    Encode { reason: String },

    /// The request never produced a usable HTTP response
    /// (connection refused, timeout, non-2xx status).
    #[error("error calling {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read or decoded as the expected
    /// JSON envelope.
    #[error("bad response from {url}: {reason}")]
    BadResponse { url: String, reason: String },
}
