//! GET/POST /api/urls

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

use crate::error::AppError;
use crate::session::RequireAuth;
use crate::types::{SaveUrlsResponse, UrlsResponse};

/// Return the tracked URL list. Unlike accounts, reads require a session.
pub async fn list(
    State(state): State<Arc<crate::AppState>>,
    _auth: RequireAuth,
) -> Result<Json<UrlsResponse>, AppError> {
    let urls = state
        .urls
        .load()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read URLs: {e}")))?;
    Ok(Json(UrlsResponse { urls }))
}

/// Replace the tracked URL list, reporting how many were saved.
pub async fn save(
    State(state): State<Arc<crate::AppState>>,
    _auth: RequireAuth,
    body: Bytes,
) -> Result<Json<SaveUrlsResponse>, AppError> {
    let body: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(format!("Failed to parse request body: {e}")))?;

    let urls = body
        .get("urls")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::BadRequest("urls must be a list".into()))?;

    state
        .urls
        .save(urls)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to save URLs: {e}")))?;

    tracing::info!(count = urls.len(), "urls saved");
    Ok(Json(SaveUrlsResponse {
        success: true,
        message: "URLs saved successfully".into(),
        urls: urls.len(),
    }))
}
