//! HMAC-SHA256 signed token generation and verification.
//!
//! Token format: `base64url(subject:issued_at).base64url(hmac_signature)`,
//! valid for 7 days from issuance.
//!
//! This helper is not part of the cookie flow — the live session check is
//! the literal marker in [`crate::session`]. It is kept as library API fed
//! by the configured `session_secret`.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_TTL_SECS: i64 = 7 * 24 * 3600;

/// Signs and verifies expiring tokens with a shared secret.
pub struct TokenSigner {
    secret: Vec<u8>,
}

impl TokenSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
        }
    }

    /// Generate a signed token for `subject`, valid for 7 days.
    pub fn generate(&self, subject: &str) -> String {
        self.generate_at(subject, chrono::Utc::now().timestamp())
    }

    fn generate_at(&self, subject: &str, issued_at: i64) -> String {
        let payload = format!("{subject}:{issued_at}");

        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC key length is always valid");
        mac.update(payload.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(payload.as_bytes()),
            URL_SAFE_NO_PAD.encode(signature)
        )
    }

    /// Verify a token's signature and validity window, returning the subject.
    ///
    /// Returns `None` for malformed, tampered, or expired tokens.
    pub fn verify(&self, token: &str) -> Option<String> {
        let (payload_part, sig_part) = token.split_once('.')?;

        let payload_bytes = URL_SAFE_NO_PAD.decode(payload_part).ok()?;
        let payload = String::from_utf8(payload_bytes).ok()?;
        let signature = URL_SAFE_NO_PAD.decode(sig_part).ok()?;

        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC key length is always valid");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).ok()?;

        let (subject, issued_at) = payload.rsplit_once(':')?;
        let issued_at: i64 = issued_at.parse().ok()?;
        let age = chrono::Utc::now().timestamp() - issued_at;
        if !(0..=TOKEN_TTL_SECS).contains(&age) {
            return None;
        }

        Some(subject.to_string())
    }
}
