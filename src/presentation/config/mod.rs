mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    API_KEY_ENV_OVERRIDE, GenerationSettings, LlmSettings, LoggingSettings, ServerSettings,
    Settings, SettingsError,
};
