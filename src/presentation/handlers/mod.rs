mod create_notes;
mod error;
mod health;
mod study_form;
mod summarize;
mod summarize_and_notes;

pub use create_notes::{CreateNotesResponse, create_notes_handler};
pub use error::{ApiError, ErrorResponse};
pub use health::{HealthResponse, health_handler};
pub use study_form::{StudyForm, UploadedFile};
pub use summarize::{SummarizeResponse, summarize_handler};
pub use summarize_and_notes::{SummarizeAndNotesResponse, summarize_and_notes_handler};
