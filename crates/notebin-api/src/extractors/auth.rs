//! Admin session extractors: read the session token from the cookie (or the
//! access-token header), verify it, and build a `RequestContext`.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use notebin_auth::session::presented_token;
use notebin_core::error::AppError;
use notebin_service::context::RequestContext;

use crate::state::AppState;

/// An authenticated admin. Rejects with 401 when no valid session is presented.
#[derive(Debug, Clone)]
pub struct AdminSession(pub RequestContext);

impl std::ops::Deref for AdminSession {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// An admin session if one is presented. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeAdmin(pub Option<RequestContext>);

async fn authenticate(parts: &Parts, state: &AppState) -> Result<Option<RequestContext>, AppError> {
    let session = &state.config.session;
    let jar = CookieJar::from_headers(&parts.headers);
    let cookie = jar.get(&session.cookie_name).map(|c| c.value().to_string());
    let header = parts
        .headers
        .get(session.header_name.as_str())
        .and_then(|v| v.to_str().ok());

    let Some(username) = state
        .admin_service
        .authenticate(presented_token(cookie.as_deref(), header))
        .await?
    else {
        return Ok(None);
    };

    let ip_address = parts
        .headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let user_agent = parts
        .headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    Ok(Some(RequestContext::new(username, ip_address, user_agent)))
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(parts, state)
            .await?
            .map(AdminSession)
            .ok_or_else(|| AppError::unauthorized("Admin session required"))
    }
}

impl FromRequestParts<AppState> for MaybeAdmin {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match authenticate(parts, state).await {
            Ok(ctx) => Ok(MaybeAdmin(ctx)),
            Err(e) => {
                warn!(error = %e, "Session check failed; treating request as anonymous");
                Ok(MaybeAdmin(None))
            }
        }
    }
}
