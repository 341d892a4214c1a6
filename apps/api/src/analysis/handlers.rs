//! Axum route handlers for the Analysis API.

use std::io::Write;

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::info;

use crate::analysis::analyze_resume;
use crate::analysis::recovery::AnalysisResult;
use crate::errors::AppError;
use crate::extract::{self, ExtractError, MediaType};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
}

/// POST /api/v1/analyze
///
/// Multipart form: `job_description` (text) + `resume` (file, PDF/DOCX/TXT).
/// One upload plus one job description triggers one synchronous pipeline run.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut job_description: Option<String> = None;
    let mut resume: Option<(MediaType, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid job description: {e}")))?;
                job_description = Some(text);
            }
            "resume" => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let media = MediaType::from_content_type(&content_type).ok_or_else(|| {
                    AppError::Validation(format!("Unsupported file type: '{content_type}'"))
                })?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid resume upload: {e}")))?;
                resume = Some((media, data.to_vec()));
            }
            _ => {}
        }
    }

    // Input gaps are surfaced before any processing begins.
    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| {
            AppError::Validation("Please provide a job description for the analysis".to_string())
        })?;
    let (media, data) = resume.ok_or_else(|| {
        AppError::Validation("Please upload a resume for the analysis".to_string())
    })?;

    let resume_text = extract_uploaded_text(media, data).await?;
    info!(
        "Extracted {} chars of resume text ({media:?})",
        resume_text.len()
    );

    let analysis = analyze_resume(&state.llm, &resume_text, &job_description).await?;

    Ok(Json(AnalyzeResponse { analysis }))
}

/// Spills the upload into a run-scoped temp file and extracts its text.
/// The temp file is removed when the handle drops, failure paths included.
async fn extract_uploaded_text(media: MediaType, data: Vec<u8>) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || -> Result<String, ExtractError> {
        let mut file = NamedTempFile::new()?;
        file.write_all(&data)?;
        file.flush()?;
        extract::resume_text(media, file.path())
    })
    .await
    .map_err(anyhow::Error::new)??;

    Ok(text)
}
