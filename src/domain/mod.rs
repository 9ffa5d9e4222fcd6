mod api_key;
mod chapter;
mod completion_request;
mod document;
mod document_id;
mod document_input;
mod message_role;
mod study_material;
mod target_word_count;

pub use api_key::{API_KEY_PLACEHOLDER, ApiKey};
pub use chapter::{Chapter, FULL_DOCUMENT_LABEL};
pub use completion_request::CompletionRequest;
pub use document::{ContentType, Document};
pub use document_id::DocumentId;
pub use document_input::DocumentInput;
pub use message_role::MessageRole;
pub use study_material::{Notes, StudyPack, Summary};
pub use target_word_count::{DEFAULT_TARGET_WORD_COUNT, InvalidWordCount, TargetWordCount};
