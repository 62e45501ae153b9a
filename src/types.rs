//! Shared request/response DTOs.
//!
//! List entries (accounts, URLs, history profiles) are opaque to the server
//! and pass through as raw `serde_json::Value`s.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST /api/auth/login request body.
///
/// Missing fields deserialize to empty strings so they fail the credential
/// comparison instead of failing the parse.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Generic success payload for login/logout/save operations.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/auth/verify response.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub authenticated: bool,
}

/// GET /api/accounts response.
#[derive(Debug, Serialize)]
pub struct AccountsResponse {
    pub accounts: Vec<Value>,
}

/// GET /api/urls response.
#[derive(Debug, Serialize)]
pub struct UrlsResponse {
    pub urls: Vec<Value>,
}

/// POST /api/urls response — also reports how many URLs were saved.
#[derive(Debug, Serialize)]
pub struct SaveUrlsResponse {
    pub success: bool,
    pub message: String,
    pub urls: usize,
}

/// One entry of GET /api/history/list.
#[derive(Debug, Serialize)]
pub struct HistoryFileEntry {
    pub filename: String,
    pub date: String,
    #[serde(rename = "fullPath")]
    pub full_path: String,
}

/// GET /api/history/list response.
#[derive(Debug, Serialize)]
pub struct HistoryListResponse {
    pub files: Vec<HistoryFileEntry>,
}

/// GET /api/history/load response.
#[derive(Debug, Serialize)]
pub struct HistoryLoadResponse {
    pub filename: String,
    pub date: String,
    pub profiles: Vec<Value>,
    #[serde(rename = "totalFollowers")]
    pub total_followers: u64,
    #[serde(rename = "totalLikes")]
    pub total_likes: u64,
}

/// GET /health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
