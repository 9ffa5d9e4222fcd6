use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

/// Treats every upload as UTF-8 regardless of its content type and counts
/// how often extraction was attempted.
#[derive(Default)]
pub struct MockFileLoader {
    calls: AtomicUsize,
}

impl MockFileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(&self, data: &[u8], _doc: &Document) -> Result<String, FileLoaderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        String::from_utf8(data.to_vec()).map_err(|e| FileLoaderError::DecodeFailed(e.to_string()))
    }
}
