//! Axum route handler for the CV labeling endpoint.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::cv::prompts::build_cv_request;
use crate::cv::upload::extract_cv_upload;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProcessCvResponse {
    pub status: &'static str,
    pub message: &'static str,
    /// The model's reply, passed through unparsed.
    pub data: String,
}

/// POST /process_cv
///
/// Accepts a multipart upload with a `.txt` CV in the `file` field, forwards it
/// to the completion provider inside the labeling prompt, and returns the raw reply.
pub async fn handle_process_cv(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcessCvResponse>, AppError> {
    let request_id = Uuid::new_v4();
    process_cv(state, multipart)
        .instrument(info_span!("process_cv", %request_id))
        .await
}

async fn process_cv(
    state: AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcessCvResponse>, AppError> {
    info!("Received request to process CV");

    // A body that isn't multipart has no file part at all.
    let mut multipart = multipart.map_err(|rejection| {
        warn!("Request body is not multipart: {rejection}");
        AppError::MissingFilePart
    })?;

    let upload = extract_cv_upload(&mut multipart).await?;
    debug!("Decoding '{}' as UTF-8", upload.filename);
    let cv_text = upload.into_text()?;
    info!("Successfully read CV text, length: {}", cv_text.chars().count());

    let request = build_cv_request(&cv_text);

    info!("Sending request to completion provider");
    let reply = state.llm.complete(&request).await?;
    info!("Received response from completion provider");
    info!("Assistant message length: {}", reply.chars().count());
    debug!("Assistant message content: {reply}");

    Ok(Json(ProcessCvResponse {
        status: "success",
        message: "Raw OpenAI response",
        data: reply,
    }))
}
