//! Axum route handlers for the résumé parsing API.

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extract::{self, DocumentKind};
use crate::models::resume::ResumeRecord;
use crate::parser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

/// POST /api/v1/resumes/parse
///
/// Accepts either a JSON body `{ "text": "..." }` or a multipart upload
/// with a `file` part and an optional `file_type` part (`pdf`, `docx`,
/// anything else is read as plain text). Returns the structured record.
pub async fn handle_parse(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<ResumeRecord>, AppError> {
    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    let text = if is_multipart {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| AppError::MalformedInput(format!("Invalid multipart body: {e}")))?;
        read_uploaded_document(multipart).await?
    } else {
        let Json(body) = Json::<ParseTextRequest>::from_request(request, &state)
            .await
            .map_err(|e| AppError::MalformedInput(format!("Invalid JSON body: {e}")))?;
        if body.text.trim().is_empty() {
            return Err(AppError::MalformedInput("text cannot be empty".to_string()));
        }
        body.text
    };

    Ok(Json(parser::parse_text(&text)))
}

/// Pulls the `file` part (and optional `file_type`) out of a multipart
/// upload and extracts its text in memory.
async fn read_uploaded_document(mut multipart: Multipart) -> Result<String, AppError> {
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut declared_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MalformedInput(format!("Invalid multipart field: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                // Fall back to the filename extension when no file_type
                // part was sent.
                if declared_type.is_none() {
                    declared_type = field
                        .file_name()
                        .and_then(|n| n.rsplit('.').next())
                        .map(str::to_string);
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::MalformedInput(format!("Failed to read upload: {e}")))?;
                file_bytes = Some(bytes.to_vec());
            }
            Some("file_type") => {
                let value = field.text().await.map_err(|e| {
                    AppError::MalformedInput(format!("Failed to read file_type: {e}"))
                })?;
                declared_type = Some(value);
            }
            _ => {}
        }
    }

    let bytes = file_bytes
        .ok_or_else(|| AppError::MalformedInput("multipart body must include a 'file' part".to_string()))?;
    let kind = DocumentKind::from_label(declared_type.as_deref().unwrap_or(""));
    extract::extract_text_from_bytes(&bytes, kind)
}
