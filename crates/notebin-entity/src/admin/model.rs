//! Admin config model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single administrator credential record.
///
/// Written once by setup and never modified afterwards. The password is
/// stored as supplied; the session token embeds it as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminConfig {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
    /// When setup was completed.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl AdminConfig {
    /// Create a new admin config stamped with `now`.
    pub fn new(username: impl Into<String>, password: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            created_at: now,
        }
    }
}
