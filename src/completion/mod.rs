//! Chat-completion requests built from a diff and an instruction.

pub mod client;
pub mod request;

pub use client::{CompletionClient, OpenAiClient};
pub use request::{ChatMessage, CompletionRequest, MODEL, build_request};
