//! gitmsg - A CLI tool that writes commit messages and PR descriptions from your git diff.
//!
//! # Overview
//!
//! gitmsg reads the staged diff (or the diff against a branch for `--pr`),
//! sends it to a chat-completion service together with an instruction prompt,
//! and either commits with the returned message or prints the returned PR
//! description. `--amend` and `--undo` wrap the two git commands used to fix
//! up a generated commit.

pub mod cli;
pub mod completion;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod git;
pub mod process;

// Re-export commonly used types
pub use cli::Cli;
pub use completion::{CompletionClient, OpenAiClient};
pub use config::Config;
pub use dispatch::{Completed, Dispatcher, FAILURE_EXIT_CODE, Invocation, Outcome, PrTarget};
pub use error::{CompletionError, DispatchError, ProcessError};
pub use process::{CommandLine, ProcessRunner, ShellRunner};
