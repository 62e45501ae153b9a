//! GET/POST /api/accounts

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

use crate::error::AppError;
use crate::session::RequireAuth;
use crate::types::{AccountsResponse, SuccessResponse};

/// Return the tracked account list. Intentionally public — the dashboard
/// reads it before login.
pub async fn list(
    State(state): State<Arc<crate::AppState>>,
) -> Result<Json<AccountsResponse>, AppError> {
    let accounts = state
        .accounts
        .load()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read accounts: {e}")))?;
    Ok(Json(AccountsResponse { accounts }))
}

/// Replace the tracked account list.
pub async fn save(
    State(state): State<Arc<crate::AppState>>,
    _auth: RequireAuth,
    body: Bytes,
) -> Result<Json<SuccessResponse>, AppError> {
    let body: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(format!("Failed to parse request body: {e}")))?;

    let accounts = body
        .get("accounts")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::BadRequest("accounts must be a list".into()))?;

    state
        .accounts
        .save(accounts)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to save accounts: {e}")))?;

    tracing::info!(count = accounts.len(), "accounts saved");
    Ok(Json(SuccessResponse {
        success: true,
        message: "Accounts saved successfully".into(),
    }))
}
