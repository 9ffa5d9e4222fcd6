/// A single non-streaming chat completion: one system and one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_message: String,
    pub user_prompt: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}
