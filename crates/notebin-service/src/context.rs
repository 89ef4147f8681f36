//! Request context carrying the authenticated admin and request metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Context for the current authenticated request.
///
/// Built by the API layer once the admin session has been verified and
/// passed into service methods so that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated admin username.
    pub username: String,
    /// IP address of the request origin.
    pub ip_address: String,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context stamped with the current time.
    pub fn new(username: String, ip_address: String, user_agent: Option<String>) -> Self {
        Self {
            username,
            ip_address,
            user_agent,
            request_time: Utc::now(),
        }
    }

    /// Context for background or test use.
    pub fn system() -> Self {
        Self::new("system".to_string(), "127.0.0.1".to_string(), None)
    }
}
