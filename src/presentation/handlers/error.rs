use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::StudyError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    fn client(error: &str, message: impl Into<String>) -> Self {
        Self {
            success: None,
            error: error.to_string(),
            message: Some(message.into()),
        }
    }

    fn fault(error: &str) -> Self {
        Self {
            success: Some(false),
            error: error.to_string(),
            message: None,
        }
    }
}

/// Boundary error. Each variant maps to one status code; provider and
/// extraction detail stays in the logs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Study(#[from] StudyError),
    #[error("malformed form body: {message}")]
    MalformedForm { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Study(StudyError::NotConfigured) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Study(
                StudyError::MissingInput
                | StudyError::UnsupportedFormat(_)
                | StudyError::EmptyContent
                | StudyError::InvalidWordCount(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::Study(StudyError::Extraction(_) | StudyError::Completion(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::MalformedForm { status, .. } => *status,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Study(StudyError::NotConfigured) => ErrorResponse {
                success: None,
                error: "API key not configured".to_string(),
                message: None,
            },
            ApiError::Study(StudyError::MissingInput) => {
                ErrorResponse::client("No input provided", "Please provide either file or text")
            }
            ApiError::Study(StudyError::UnsupportedFormat(_)) => ErrorResponse::client(
                "Unsupported file format",
                "Please upload PDF, DOCX, or TXT file",
            ),
            ApiError::Study(StudyError::EmptyContent) => {
                ErrorResponse::client("Empty content", "The file or text is empty")
            }
            ApiError::Study(StudyError::InvalidWordCount(e)) => {
                ErrorResponse::client("Invalid word count", e.to_string())
            }
            ApiError::Study(StudyError::Extraction(_)) => {
                ErrorResponse::fault("Text extraction failed")
            }
            ApiError::Study(StudyError::Completion(_)) => {
                ErrorResponse::fault("Completion request failed")
            }
            ApiError::MalformedForm { message, .. } => {
                ErrorResponse::client("Invalid form data", message.clone())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, detail = ?self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(self.body())).into_response()
    }
}
