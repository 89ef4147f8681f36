//! Public origin of the service, used to build share URLs.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::state::AppState;

/// `scheme://host[:port]` as seen by clients.
///
/// Taken from `server.public_origin` when configured, otherwise from the
/// `Host` header (and `X-Forwarded-Proto`, defaulting to `http`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin(pub String);

impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(origin) = state
            .config
            .server
            .public_origin
            .as_deref()
            .filter(|o| !o.is_empty())
        {
            return Ok(RequestOrigin(origin.trim_end_matches('/').to_string()));
        }

        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| parts.uri.authority().map(|a| a.as_str()))
            .unwrap_or("localhost");
        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("http");

        Ok(RequestOrigin(format!("{scheme}://{host}")))
    }
}
