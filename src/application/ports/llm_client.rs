use async_trait::async_trait;

use crate::domain::CompletionRequest;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Runs one chat completion and returns the first choice, trimmed.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError>;

    /// Whether a usable credential was injected at construction.
    fn is_configured(&self) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
