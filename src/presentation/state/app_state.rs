use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::StudyService;

pub const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 25 * 1024 * 1024;

pub struct AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub study_service: Arc<StudyService<F, L>>,
    pub upload_limit_bytes: usize,
}

impl<F, L> AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(study_service: Arc<StudyService<F, L>>) -> Self {
        Self {
            study_service,
            upload_limit_bytes: DEFAULT_UPLOAD_LIMIT_BYTES,
        }
    }

    pub fn with_upload_limit(mut self, bytes: usize) -> Self {
        self.upload_limit_bytes = bytes;
        self
    }
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            study_service: Arc::clone(&self.study_service),
            upload_limit_bytes: self.upload_limit_bytes,
        }
    }
}
