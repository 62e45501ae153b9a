//! POST /api/auth/logout

use axum::extract::State;
use axum::http::header;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use std::sync::Arc;

use crate::session;
use crate::types::SuccessResponse;

/// Expire the auth cookie. Succeeds whether or not a session existed.
pub async fn logout(State(state): State<Arc<crate::AppState>>) -> impl IntoResponse {
    let cookie = session::clear_cookie(state.config.cookie_secure);
    (
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(SuccessResponse {
            success: true,
            message: "Logout successful".into(),
        }),
    )
}
