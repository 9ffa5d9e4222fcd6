use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{CombinedDispatch, GenerationConfig};
use crate::domain::{API_KEY_PLACEHOLDER, TargetWordCount};

use super::Environment;

/// Read after the layered sources so a plain provider key in the environment
/// always wins.
pub const API_KEY_ENV_OVERRIDE: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub generation: GenerationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_size_mb: usize,
}

#[derive(Clone, Deserialize)]
pub struct LlmSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub summary_max_tokens: u32,
    pub notes_max_tokens: u32,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub default_word_count: u32,
    pub combined_dispatch: CombinedDispatch,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl Settings {
    /// Defaults, then `appsettings.<env>.*` if present, then `APP_*`
    /// variables (`APP_LLM__MODEL`), then `GROQ_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5002_i64)?
            .set_default("server.max_upload_size_mb", 25_i64)?
            .set_default("llm.base_url", "https://api.groq.com/openai/v1")?
            .set_default("llm.api_key", API_KEY_PLACEHOLDER)?
            .set_default("llm.model", "llama-3.1-70b-versatile")?
            .set_default("llm.temperature", 0.3_f64)?
            .set_default("llm.summary_max_tokens", 2000_i64)?
            .set_default("llm.notes_max_tokens", 3000_i64)?
            .set_default("generation.default_word_count", 300_i64)?
            .set_default("generation.combined_dispatch", "sequential")?
            .set_default("logging.level", "info,scriba=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            );

        if let Ok(key) = std::env::var(API_KEY_ENV_OVERRIDE) {
            if !key.trim().is_empty() {
                builder = builder.set_override("llm.api_key", key)?;
            }
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.generation.default_word_count == 0 {
            return Err(SettingsError::Invalid {
                key: "generation.default_word_count",
                reason: "must be positive".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(SettingsError::Invalid {
                key: "llm.temperature",
                reason: format!("{} is outside 0.0..=2.0", self.llm.temperature),
            });
        }
        if self.llm.summary_max_tokens == 0 || self.llm.notes_max_tokens == 0 {
            return Err(SettingsError::Invalid {
                key: "llm.*_max_tokens",
                reason: "must be positive".to_string(),
            });
        }
        if self.server.max_upload_size_mb == 0 {
            return Err(SettingsError::Invalid {
                key: "server.max_upload_size_mb",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            model: self.llm.model.clone(),
            temperature: self.llm.temperature,
            summary_max_tokens: self.llm.summary_max_tokens,
            notes_max_tokens: self.llm.notes_max_tokens,
            default_word_count: TargetWordCount::new(self.generation.default_word_count)
                .unwrap_or_default(),
            combined_dispatch: self.generation.combined_dispatch,
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.server.max_upload_size_mb.saturating_mul(1024 * 1024)
    }
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &crate::domain::ApiKey::new(self.api_key.clone()))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("summary_max_tokens", &self.summary_max_tokens)
            .field("notes_max_tokens", &self.notes_max_tokens)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
