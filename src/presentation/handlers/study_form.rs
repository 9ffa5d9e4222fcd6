use std::collections::HashMap;

use axum::Form;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;

use crate::application::services::StudyError;
use crate::domain::{Chapter, DocumentInput, TargetWordCount};

use super::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Fields shared by the study endpoints, read from a multipart or urlencoded
/// body. Values are kept raw and handlers take the extractor as a `Result`,
/// so the credential check runs before any body or field error surfaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyForm {
    pub file: Option<UploadedFile>,
    pub text: Option<String>,
    pub chapter: Option<String>,
    pub word_count: Option<String>,
}

impl StudyForm {
    pub fn chapter(&self) -> Chapter {
        Chapter::new(self.chapter.clone())
    }

    pub fn target_word_count(
        &self,
        default: TargetWordCount,
    ) -> Result<TargetWordCount, StudyError> {
        match self.word_count.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Ok(TargetWordCount::parse(raw)?),
            _ => Ok(default),
        }
    }

    pub fn into_input(self) -> Result<DocumentInput, StudyError> {
        let file = self.file.map(|f| (f.filename, f.data));
        DocumentInput::select(file, self.text).ok_or(StudyError::MissingInput)
    }

    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "text" => self.text = Some(value),
            "chapter" => self.chapter = Some(value),
            "word_count" => self.word_count = Some(value),
            other => tracing::debug!(field = %other, "Ignoring unknown form field"),
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            ApiError::MalformedForm {
                status: e.status(),
                message: e.body_text(),
            }
        })? {
            let name = field.name().unwrap_or_default().to_string();

            if name == "file" {
                let Some(filename) = field.file_name().map(str::to_string) else {
                    tracing::debug!("Ignoring file field without a filename");
                    continue;
                };

                let data = field.bytes().await.map_err(|e| ApiError::MalformedForm {
                    status: e.status(),
                    message: e.body_text(),
                })?;

                tracing::debug!(filename = %filename, bytes = data.len(), "File field received");
                form.file = Some(UploadedFile {
                    filename,
                    data: data.to_vec(),
                });
            } else {
                let value = field.text().await.map_err(|e| ApiError::MalformedForm {
                    status: e.status(),
                    message: e.body_text(),
                })?;
                form.set_field(&name, value);
            }
        }

        Ok(form)
    }

    fn from_fields(fields: HashMap<String, String>) -> Self {
        let mut form = Self::default();
        for (name, value) in fields {
            form.set_field(&name, value);
        }
        form
    }
}

impl<S> FromRequest<S> for StudyForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state).await.map_err(|e| {
                ApiError::MalformedForm {
                    status: e.status(),
                    message: e.body_text(),
                }
            })?;
            Self::from_multipart(multipart).await
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::MalformedForm {
                    status: e.status(),
                    message: e.body_text(),
                })?;
            Ok(Self::from_fields(fields))
        } else {
            Ok(Self::default())
        }
    }
}
