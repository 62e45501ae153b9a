//! POST /api/auth/login

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use std::sync::Arc;

use crate::error::AppError;
use crate::session;
use crate::types::{LoginRequest, SuccessResponse};

/// Check credentials against the configured pair and issue the auth cookie.
///
/// The body is parsed by hand: an unparseable body is an internal error,
/// while missing fields fall through to the credential mismatch path.
pub async fn login(
    State(state): State<Arc<crate::AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body: LoginRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(format!("Failed to parse login request: {e}")))?;

    if body.username != state.config.admin_username
        || body.password != state.config.admin_password
    {
        tracing::warn!(username = %body.username, "login rejected");
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!(username = %body.username, "login accepted");
    let cookie = session::auth_cookie(state.config.cookie_secure);
    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(SuccessResponse {
            success: true,
            message: "Login successful".into(),
        }),
    ))
}
