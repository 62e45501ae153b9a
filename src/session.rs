//! Cookie-marker session verification.
//!
//! There is no server-side session table: a browser is authenticated iff it
//! presents the auth cookie with the literal marker value. Login sets the
//! marker, logout expires it, and `RequireAuth` gates the write-capable
//! endpoints.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};

use crate::error::AppError;

pub const AUTH_COOKIE: &str = "auth_session";
pub const AUTH_MARKER: &str = "authenticated";
const MAX_AGE_SECS: u64 = 7 * 24 * 3600; // 7 days

/// Extractor that rejects unauthenticated requests.
///
/// Missing or non-matching marker → 401 `{"error": "Not authenticated"}`.
/// A `Cookie` header that cannot be read as a string → 500.
pub struct RequireAuth;

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(header::COOKIE) {
            Some(value) => value
                .to_str()
                .map_err(|e| AppError::Internal(format!("Failed to read cookies: {e}")))?,
            None => "",
        };

        if parse_cookie(header, AUTH_COOKIE) == Some(AUTH_MARKER) {
            Ok(RequireAuth)
        } else {
            Err(AppError::NotAuthenticated)
        }
    }
}

/// Whether the request headers carry a valid auth marker.
///
/// Used by the verify endpoint, which has no 500 path: an unreadable cookie
/// header counts as unauthenticated.
pub fn has_valid_marker(headers: &HeaderMap) -> bool {
    let header = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    parse_cookie(header, AUTH_COOKIE) == Some(AUTH_MARKER)
}

/// Set-Cookie value issued on successful login.
pub fn auth_cookie(secure: bool) -> String {
    let mut parts = vec![
        format!("{}={}", AUTH_COOKIE, AUTH_MARKER),
        format!("Max-Age={}", MAX_AGE_SECS),
        "Path=/".into(),
        "HttpOnly".into(),
        "SameSite=Lax".into(),
    ];
    if secure {
        parts.push("Secure".into());
    }
    parts.join("; ")
}

/// Set-Cookie value that expires the auth cookie.
pub fn clear_cookie(secure: bool) -> String {
    let mut parts = vec![
        format!("{}=", AUTH_COOKIE),
        "Max-Age=0".into(),
        "Path=/".into(),
        "HttpOnly".into(),
        "SameSite=Lax".into(),
    ];
    if secure {
        parts.push("Secure".into());
    }
    parts.join("; ")
}

/// Parse a specific cookie from a Cookie header value.
fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    for part in header.split(';') {
        let trimmed = part.trim();
        if let Some(value) = trimmed.strip_prefix(name)
            && let Some(value) = value.strip_prefix('=')
        {
            return Some(value);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_parse_cookie_found() {
        let header = "auth_session=authenticated; other=xyz";
        assert_eq!(parse_cookie(header, "auth_session"), Some("authenticated"));
    }

    #[test]
    fn test_parse_cookie_not_found() {
        assert_eq!(parse_cookie("other=xyz", "auth_session"), None);
    }

    #[test]
    fn test_parse_cookie_empty_header() {
        assert_eq!(parse_cookie("", "auth_session"), None);
    }

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_marker_exact_match_required() {
        assert!(has_valid_marker(&headers_with_cookie(
            "auth_session=authenticated"
        )));
        assert!(!has_valid_marker(&headers_with_cookie(
            "auth_session=Authenticated"
        )));
        assert!(!has_valid_marker(&headers_with_cookie(
            "auth_session=authenticated-extra"
        )));
        assert!(!has_valid_marker(&headers_with_cookie("auth_session=")));
    }

    #[test]
    fn test_marker_absent_cookie_header() {
        assert!(!has_valid_marker(&HeaderMap::new()));
    }

    #[test]
    fn test_marker_among_other_cookies() {
        assert!(has_valid_marker(&headers_with_cookie(
            "theme=dark; auth_session=authenticated; lang=pt"
        )));
    }

    #[test]
    fn test_auth_cookie_format() {
        let cookie = auth_cookie(false);
        assert!(cookie.starts_with("auth_session=authenticated"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_auth_cookie_secure() {
        assert!(auth_cookie(true).contains("Secure"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_cookie(false);
        assert!(cookie.starts_with("auth_session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
