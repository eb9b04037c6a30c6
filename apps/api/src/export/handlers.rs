//! Axum route handlers for the export API.

use axum::{
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use bytes::Bytes;
use chrono::Local;
use serde::Deserialize;

use crate::curriculum::params::CourseType;
use crate::errors::AppError;
use crate::export::{download_filename, package_document, DOCX_MIME};

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub course_type: CourseType,
    pub topic: String,
    pub curriculum_text: String,
}

/// POST /api/v1/curricula/export
///
/// Packages previously generated text as a downloadable Word document.
/// Stateless — the document is built fresh per call and nothing is stored.
pub async fn handle_export(
    Json(request): Json<ExportRequest>,
) -> Result<(HeaderMap, Bytes), AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }
    if request.curriculum_text.trim().is_empty() {
        return Err(AppError::Validation(
            "curriculum_text cannot be empty".to_string(),
        ));
    }

    let now = Local::now();
    let title = format!("{}: {}", request.course_type, request.topic);

    let bytes = package_document(&title, now, &request.curriculum_text)
        .map_err(|e| AppError::Export(e.to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(DOCX_MIME));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!(
            "attachment; filename=\"{}\"",
            download_filename(&request.topic, now)
        ))
        .map_err(|e| AppError::Export(format!("invalid filename header: {e}")))?,
    );

    Ok((headers, bytes))
}
