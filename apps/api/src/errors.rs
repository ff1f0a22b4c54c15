use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The three upload checks map to 400 with fixed messages. Every other variant
/// is a processing failure and maps to 500 carrying its own display string.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file part provided in the request.")]
    MissingFilePart,

    #[error("No file selected.")]
    NoFileSelected,

    #[error("Invalid file type. Only .txt files are accepted.")]
    InvalidFileType,

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Decode(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFilePart | AppError::NoFileSelected | AppError::InvalidFileType => {
                StatusCode::BAD_REQUEST
            }
            AppError::Multipart(_) | AppError::Decode(_) | AppError::Llm(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Unexpected error: {message}");
            tracing::debug!("Exception details: {self:?}");
        } else {
            tracing::error!("{message}");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
