use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{ApiKey, CompletionRequest, MessageRole};
use crate::presentation::config::LlmSettings;

/// Non-streaming client for OpenAI-compatible chat completion APIs
/// (Groq, OpenAI, LM Studio).
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: ApiKey,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: MessageRole,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(api_key: ApiKey, base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_key, base_url)
    }

    pub fn with_client(client: Client, api_key: ApiKey, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn build_messages(request: &CompletionRequest) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: MessageRole::System,
                content: request.system_message.clone(),
            },
            ChatMessage {
                role: MessageRole::User,
                content: request.user_prompt.clone(),
            },
        ]
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(skip(self, request), fields(model = %request.model, max_tokens = request.max_tokens))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model: &request.model,
            messages: Self::build_messages(request),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose()),
            )
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::Unauthorized(body));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        let content = completion_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))?
            .message
            .content
            .ok_or_else(|| LlmClientError::InvalidResponse("choice has no content".to_string()))?;

        tracing::debug!(chars = content.len(), "Completion received");

        Ok(content.trim().to_string())
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_configured()
    }
}

pub fn create_openai_client(settings: &LlmSettings) -> Result<OpenAiClient, LlmClientError> {
    let mut builder = Client::builder();
    if let Some(secs) = settings.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    let client = builder
        .build()
        .map_err(|e| LlmClientError::ApiRequestFailed(format!("failed to build client: {e}")))?;

    Ok(OpenAiClient::with_client(
        client,
        ApiKey::new(settings.api_key.clone()),
        settings.base_url.clone(),
    ))
}
