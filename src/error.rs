//! Error types for gitmsg modules using thiserror.

use thiserror::Error;

/// Errors from running external commands.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("{0} not found on PATH. Install it or make sure it is reachable.")]
    NotInstalled(String),

    #[error("Failed to spawn `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write input to `{command}`: {source}")]
    StdinFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` timed out after {elapsed:?}")]
    Timeout {
        command: String,
        elapsed: std::time::Duration,
    },

    #[error("`{command}` exited with code {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },
}

/// Errors from the completion service.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("No API key configured. Set OPENAI_API_KEY to use the completion service.")]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Completion request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    #[error("Completion service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Completion service returned an unreadable response: {0}")]
    InvalidResponse(String),
}

/// Errors that end a dispatched run.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// The service answered, but with nothing usable.
    #[error("No {expected} returned by the completion service")]
    NoUsableCompletion { expected: &'static str },
}
