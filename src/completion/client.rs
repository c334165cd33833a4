//! HTTP client for an OpenAI-compatible chat-completion endpoint.

use async_trait::async_trait;
use tracing::debug;

use crate::config::Config;
use crate::error::CompletionError;

use super::request::{CompletionResponse, build_request};

/// Trait for requesting a completion for a diff.
///
/// This abstraction allows mocking the completion service in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `diff` followed by `instruction` and return the first choice's text.
    ///
    /// `Ok(None)` means the service answered without any content.
    async fn complete(&self, diff: &str, instruction: &str)
    -> Result<Option<String>, CompletionError>;
}

/// Client for `POST {api_base}/chat/completions`.
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    /// Build a client from configuration.
    ///
    /// A missing API key is only reported when a completion is requested, so
    /// modes that never call the service work without one.
    pub fn new(config: Config) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .timeout(config.completion_timeout)
            .build()
            .map_err(CompletionError::ClientBuild)?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.api_base),
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        diff: &str,
        instruction: &str,
    ) -> Result<Option<String>, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        let request = build_request(diff, instruction);
        debug!(
            "Requesting completion from {} (diff {} chars, instruction {} chars)",
            self.endpoint,
            diff.len(),
            instruction.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(CompletionError::RequestFailed)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(CompletionError::RequestFailed)?;

        if !status.is_success() {
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = serde_json::from_str(&body).map_err(|e| {
            debug!("Raw response: {}", body);
            CompletionError::InvalidResponse(e.to_string())
        })?;

        Ok(parsed.into_first_content())
    }
}
