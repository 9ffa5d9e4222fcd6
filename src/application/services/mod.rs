mod generation_config;
mod prompt_builder;
mod study_service;
mod word_counter;

pub use generation_config::{CombinedDispatch, GenerationConfig};
pub use prompt_builder::{PromptStyle, notes_prompt, summary_prompt};
pub use study_service::{StudyError, StudyService};
pub use word_counter::count_words;
