//! Share descriptor model.

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use notebin_core::error::AppError;

/// A share descriptor granting token-based access to one content blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    /// Random, unguessable share token (UUID v4 text).
    pub token: String,
    /// Key of the referenced content blob.
    pub file_id: String,
    /// Plaintext shared secret. Empty means no password.
    #[serde(default)]
    pub password: String,
    /// Absolute expiry time. `None` never expires.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub expire: Option<DateTime<Utc>>,
    /// Cap on successful views. `0` is unlimited.
    #[serde(default)]
    pub max_visits: u32,
    /// Number of successful views so far.
    #[serde(default)]
    pub views: u32,
    /// When the share was created.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created: DateTime<Utc>,
}

impl Share {
    /// Create a fresh descriptor with `views = 0` and `created = now`.
    ///
    /// Timestamps are truncated to milliseconds, the precision they are
    /// persisted with.
    pub fn new(
        token: impl Into<String>,
        file_id: impl Into<String>,
        password: impl Into<String>,
        expire: Option<DateTime<Utc>>,
        max_visits: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            token: token.into(),
            file_id: file_id.into(),
            password: password.into(),
            expire: expire.map(|at| at.trunc_subsecs(3)),
            max_visits,
            views: 0,
            created: now.trunc_subsecs(3),
        }
    }

    /// Expired means an expiry is set and `now` is strictly past it.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expire, Some(expire) if now > expire)
    }

    /// Whether the visit cap has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.max_visits > 0 && self.views >= self.max_visits
    }

    /// Whether the share can still serve content at `now`.
    pub fn is_reachable_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_expired_at(now) && !self.is_exhausted()
    }

    /// Whether a password must be supplied.
    pub fn requires_password(&self) -> bool {
        !self.password.is_empty()
    }
}

/// Compute the absolute expiry `seconds` after `now`. Zero means never.
pub fn expiry_after(now: DateTime<Utc>, seconds: u64) -> Result<Option<DateTime<Utc>>, AppError> {
    if seconds == 0 {
        return Ok(None);
    }
    i64::try_from(seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|delta| now.checked_add_signed(delta))
        .map(Some)
        .ok_or_else(|| AppError::validation(format!("Expiry of {seconds} seconds is out of range")))
}
