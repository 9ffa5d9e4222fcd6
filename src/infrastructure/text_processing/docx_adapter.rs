use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads the paragraphs of a WordprocessingML package. Table cells, headers
/// and footers are not part of the output.
pub struct DocxAdapter;

impl DocxAdapter {
    fn read_document_part(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to open DOCX archive: {e}"))
        })?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("{DOCUMENT_PART} not found: {e}"))
        })?;

        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read {DOCUMENT_PART}: {e}"))
        })?;

        Ok(xml)
    }

    fn paragraphs(xml: &str) -> Result<Vec<String>, FileLoaderError> {
        let mut reader = Reader::from_str(xml);
        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut paragraph_depth = 0usize;
        let mut table_depth = 0usize;
        let mut in_run = false;
        let mut in_text = false;

        loop {
            let event = reader.read_event().map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "malformed XML at byte {}: {e}",
                    reader.buffer_position()
                ))
            })?;

            match event {
                Event::Start(e) => match e.name().as_ref() {
                    b"w:tbl" => table_depth += 1,
                    b"w:p" => paragraph_depth += 1,
                    b"w:r" => in_run = true,
                    b"w:t" => in_text = true,
                    _ => {}
                },
                Event::Empty(e) if table_depth == 0 => match e.name().as_ref() {
                    b"w:p" if paragraph_depth == 0 => paragraphs.push(String::new()),
                    b"w:tab" if in_run => current.push('\t'),
                    b"w:br" | b"w:cr" if in_run => current.push('\n'),
                    _ => {}
                },
                Event::Text(t) if in_text && table_depth == 0 && paragraph_depth > 0 => {
                    let text = t
                        .unescape()
                        .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;
                    current.push_str(&text);
                }
                Event::End(e) => match e.name().as_ref() {
                    b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                    b"w:r" => in_run = false,
                    b"w:t" => in_text = false,
                    b"w:p" => {
                        paragraph_depth = paragraph_depth.saturating_sub(1);
                        if paragraph_depth == 0 && table_depth == 0 {
                            paragraphs.push(std::mem::take(&mut current));
                        }
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(paragraphs)
    }

    fn extract(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        let xml = Self::read_document_part(data)?;
        Self::paragraphs(&xml)
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Docx {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let owned = data.to_vec();
        let paragraphs = tokio::task::spawn_blocking(move || Self::extract(&owned))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(
            paragraph_count = paragraphs.len(),
            "DOCX text extraction complete"
        );

        let mut text = String::new();
        for paragraph in &paragraphs {
            text.push_str(paragraph);
            text.push('\n');
        }

        Ok(text)
    }
}
