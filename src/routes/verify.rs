//! GET /api/auth/verify

use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use crate::session;
use crate::types::VerifyResponse;

/// Report whether the request carries a valid session cookie.
///
/// The negative case answers 401 with `{"authenticated": false}` rather
/// than the error payload.
pub async fn verify(headers: HeaderMap) -> (StatusCode, Json<VerifyResponse>) {
    if session::has_valid_marker(&headers) {
        (StatusCode::OK, Json(VerifyResponse { authenticated: true }))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(VerifyResponse {
                authenticated: false,
            }),
        )
    }
}
