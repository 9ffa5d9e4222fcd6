use serde::Deserialize;

use crate::domain::TargetWordCount;

/// How the combined endpoint issues its two provider calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombinedDispatch {
    #[default]
    Sequential,
    Concurrent,
}

/// Sampling parameters shared by every completion the service issues.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f32,
    pub summary_max_tokens: u32,
    pub notes_max_tokens: u32,
    pub default_word_count: TargetWordCount,
    pub combined_dispatch: CombinedDispatch,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "llama-3.1-70b-versatile".to_string(),
            temperature: 0.3,
            summary_max_tokens: 2000,
            notes_max_tokens: 3000,
            default_word_count: TargetWordCount::default(),
            combined_dispatch: CombinedDispatch::Sequential,
        }
    }
}
