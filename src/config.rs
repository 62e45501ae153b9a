//! Application configuration via environment variables.
//!
//! Everything is read once at startup into an explicit `Config` that gets
//! passed to the components that need it — handlers never touch the
//! environment at request time.

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub admin_username: String,
    pub admin_password: String,
    pub session_secret: String,
    pub accounts_file: PathBuf,
    pub urls_file: PathBuf,
    pub history_dir: PathBuf,
    pub frontend_url: String,
    pub port: u16,
    pub cookie_secure: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every field has a fallback, so loading never fails. The credential
    /// defaults exist for local development only; deployments are expected
    /// to set `ADMIN_USERNAME` / `ADMIN_PASSWORD`.
    pub fn from_env() -> Self {
        Self {
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "changeme123".into()),
            session_secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| "change-me-in-production".into()),
            accounts_file: env::var("ACCOUNTS_FILE")
                .unwrap_or_else(|_| "data/accounts-data.json".into())
                .into(),
            urls_file: env::var("URLS_FILE")
                .unwrap_or_else(|_| "data/saved-urls.json".into())
                .into(),
            history_dir: env::var("HISTORY_DIR")
                .unwrap_or_else(|_| "data/history".into())
                .into(),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            cookie_secure: env::var("COOKIE_SECURE")
                .map(|v| v == "true" || v == "1" || v == "True")
                .unwrap_or(false),
        }
    }
}

/// Configuration for testing — all fields settable directly.
impl Config {
    pub fn test_default() -> Self {
        Self {
            admin_username: "admin".into(),
            admin_password: "test-password".into(),
            session_secret: "test-secret-key".into(),
            accounts_file: "data/accounts-data.json".into(),
            urls_file: "data/saved-urls.json".into(),
            history_dir: "data/history".into(),
            frontend_url: "http://localhost:3000".into(),
            port: 3001,
            cookie_secure: false,
        }
    }
}
