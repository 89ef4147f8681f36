//! Session token codec.
//!
//! A session token is the base64 encoding of `username:password:issuedAtMillis`.
//! It is not signed: anyone who knows the credentials can mint one, and a
//! token stays valid until the admin credentials change. The issue time is
//! carried but never checked.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use tracing::debug;

use notebin_entity::admin::AdminConfig;

use crate::credentials::secure_eq;

/// Issues and verifies opaque admin session tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionToken;

impl SessionToken {
    /// Encode a token for the given credentials issued at `issued_at`.
    pub fn issue(username: &str, password: &str, issued_at: DateTime<Utc>) -> String {
        let raw = format!("{username}:{password}:{}", issued_at.timestamp_millis());
        STANDARD.encode(raw.as_bytes())
    }

    /// Whether `presented` was issued for the credentials in `config`.
    ///
    /// Malformed tokens (bad base64, non-UTF-8, missing separators) are
    /// simply not authenticated.
    pub fn verify(presented: &str, config: &AdminConfig) -> bool {
        let Ok(decoded) = STANDARD.decode(presented.trim()) else {
            debug!("Session token is not valid base64");
            return false;
        };
        let Ok(decoded) = String::from_utf8(decoded) else {
            debug!("Session token is not valid UTF-8");
            return false;
        };
        let Some((credentials, issued_at)) = decoded.rsplit_once(':') else {
            return false;
        };
        if issued_at.parse::<i64>().is_err() {
            return false;
        }
        let expected = format!("{}:{}", config.username, config.password);
        secure_eq(credentials, &expected)
    }
}
