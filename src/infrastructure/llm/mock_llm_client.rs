use std::sync::Mutex;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::CompletionRequest;

/// Records every request it receives. Answers with a fixed response, or fails
/// from a given call onwards.
pub struct MockLlmClient {
    response: String,
    configured: bool,
    fail_from_call: Option<usize>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            response: "Mock answer".to_string(),
            configured: true,
            fail_from_call: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    /// Fails the call with this zero-based index and every call after it.
    pub fn failing_from(mut self, call_index: usize) -> Self {
        self.fail_from_call = Some(call_index);
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn calls(&self) -> usize {
        self.requests().len()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        let call_index = {
            let mut requests = self
                .requests
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            requests.push(request.clone());
            requests.len() - 1
        };

        match self.fail_from_call {
            Some(from) if call_index >= from => Err(LlmClientError::ApiRequestFailed(
                "mock provider failure".to_string(),
            )),
            _ => Ok(self.response.clone()),
        }
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
