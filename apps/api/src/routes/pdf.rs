use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::export::pdf::{generate_pdf, sanitize_filename};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PdfRequest {
    pub text: String,
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct PdfResponse {
    pub filepath: String,
    pub message: String,
}

/// POST /pdf/create
///
/// Writes the text to a PDF in the configured output directory.
pub async fn handle_create(
    State(state): State<AppState>,
    Json(request): Json<PdfRequest>,
) -> Result<Json<PdfResponse>, AppError> {
    let filename = sanitize_filename(&request.filename).ok_or_else(|| {
        AppError::Validation(format!("'{}' is not a usable filename", request.filename))
    })?;
    let output_dir = state.config.pdf_output_dir.clone();

    let path = tokio::task::spawn_blocking(move || {
        generate_pdf(&request.text, &filename, &output_dir)
    })
    .await
    .map_err(anyhow::Error::from)??;

    Ok(Json(PdfResponse {
        filepath: path.display().to_string(),
        message: "PDF created successfully".to_string(),
    }))
}
