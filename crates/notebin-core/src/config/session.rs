//! Admin session configuration.

use serde::{Deserialize, Serialize};

/// Admin session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Cookie lifetime in seconds (default 7 days).
    #[serde(default = "default_max_age")]
    pub max_age_seconds: i64,
    /// Request header consulted when no session cookie is present.
    #[serde(default = "default_header_name")]
    pub header_name: String,
    /// Whether the session cookie carries the `Secure` attribute.
    #[serde(default = "default_true")]
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            max_age_seconds: default_max_age(),
            header_name: default_header_name(),
            secure_cookie: true,
        }
    }
}

fn default_cookie_name() -> String {
    "np_sess".to_string()
}

fn default_max_age() -> i64 {
    604_800
}

fn default_header_name() -> String {
    "X-Access-Token".to_string()
}

fn default_true() -> bool {
    true
}
