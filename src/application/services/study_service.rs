use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use crate::domain::{
    Chapter, CompletionRequest, ContentType, Document, DocumentInput, InvalidWordCount, Notes,
    StudyPack, Summary, TargetWordCount,
};
use crate::infrastructure::observability::sanitize_prompt;

use super::generation_config::{CombinedDispatch, GenerationConfig};
use super::prompt_builder::{PromptStyle, notes_prompt, summary_prompt};
use super::word_counter::count_words;

/// Per-request pipeline: resolve the document text, build prompts, call the
/// completion provider. Holds no mutable state.
pub struct StudyService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    file_loader: Arc<F>,
    llm_client: Arc<L>,
    config: GenerationConfig,
}

impl<F, L> StudyService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(file_loader: Arc<F>, llm_client: Arc<L>, config: GenerationConfig) -> Self {
        Self {
            file_loader,
            llm_client,
            config,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn ensure_configured(&self) -> Result<(), StudyError> {
        if self.llm_client.is_configured() {
            Ok(())
        } else {
            Err(StudyError::NotConfigured)
        }
    }

    /// Turns the request input into non-blank text. Files are dispatched by
    /// suffix before any bytes are parsed; inline text is used verbatim.
    pub async fn resolve_text(&self, input: DocumentInput) -> Result<String, StudyError> {
        let text = match input {
            DocumentInput::File { filename, data } => {
                let content_type = ContentType::from_filename(&filename)
                    .ok_or_else(|| StudyError::UnsupportedFormat(filename.clone()))?;
                let document = Document::new(filename, content_type, data.len() as u64);

                tracing::info!(
                    document_id = %document.id.as_uuid(),
                    filename = %document.filename,
                    content_type = %content_type,
                    bytes = document.size_bytes,
                    "Extracting text from upload"
                );

                self.file_loader.extract_text(&data, &document).await?
            }
            DocumentInput::Text(text) => text,
        };

        if text.trim().is_empty() {
            return Err(StudyError::EmptyContent);
        }

        Ok(text)
    }

    #[tracing::instrument(skip(self, text, chapter), fields(chapter = %chapter, text_chars = text.len()))]
    pub async fn summarize(
        &self,
        text: &str,
        chapter: &Chapter,
        word_count: TargetWordCount,
    ) -> Result<Summary, StudyError> {
        self.generate_summary(text, chapter, word_count, PromptStyle::Detailed)
            .await
    }

    #[tracing::instrument(skip(self, text, chapter), fields(chapter = %chapter, text_chars = text.len()))]
    pub async fn create_notes(&self, text: &str, chapter: &Chapter) -> Result<Notes, StudyError> {
        self.generate_notes(text, chapter, PromptStyle::Detailed)
            .await
    }

    /// Both artifacts or an error; a failed half discards the other.
    #[tracing::instrument(skip(self, text, chapter), fields(chapter = %chapter, text_chars = text.len()))]
    pub async fn summarize_and_notes(
        &self,
        text: &str,
        chapter: &Chapter,
        word_count: TargetWordCount,
    ) -> Result<StudyPack, StudyError> {
        let (summary, notes) = match self.config.combined_dispatch {
            CombinedDispatch::Sequential => {
                let summary = self
                    .generate_summary(text, chapter, word_count, PromptStyle::Condensed)
                    .await?;
                let notes = self
                    .generate_notes(text, chapter, PromptStyle::Condensed)
                    .await?;
                (summary, notes)
            }
            CombinedDispatch::Concurrent => futures::try_join!(
                self.generate_summary(text, chapter, word_count, PromptStyle::Condensed),
                self.generate_notes(text, chapter, PromptStyle::Condensed),
            )?,
        };

        Ok(StudyPack { summary, notes })
    }

    async fn generate_summary(
        &self,
        text: &str,
        chapter: &Chapter,
        word_count: TargetWordCount,
        style: PromptStyle,
    ) -> Result<Summary, StudyError> {
        tracing::info!(requested_words = word_count.get(), ?style, "Generating summary");

        let request = CompletionRequest {
            system_message: style.summary_system_message().to_string(),
            user_prompt: summary_prompt(text, chapter, word_count, style),
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            max_tokens: self.config.summary_max_tokens,
        };

        let text = self.complete(&request).await?;
        let word_count = count_words(&text);
        tracing::info!(word_count, "Summary generated");

        Ok(Summary { text, word_count })
    }

    async fn generate_notes(
        &self,
        text: &str,
        chapter: &Chapter,
        style: PromptStyle,
    ) -> Result<Notes, StudyError> {
        tracing::info!(?style, "Creating topic-wise notes");

        let request = CompletionRequest {
            system_message: style.notes_system_message().to_string(),
            user_prompt: notes_prompt(text, chapter, style),
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            max_tokens: self.config.notes_max_tokens,
        };

        let text = self.complete(&request).await?;
        tracing::info!(chars = text.len(), "Notes created");

        Ok(Notes::new(text))
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, StudyError> {
        tracing::debug!(
            model = %request.model,
            max_tokens = request.max_tokens,
            prompt = %sanitize_prompt(&request.user_prompt),
            "Dispatching completion"
        );

        Ok(self.llm_client.complete(request).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StudyError {
    #[error("completion provider credential is not configured")]
    NotConfigured,
    #[error("neither a file nor text was provided")]
    MissingInput,
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("document has no text content")]
    EmptyContent,
    #[error(transparent)]
    InvalidWordCount(#[from] InvalidWordCount),
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
}
