//! Setup, login and logout handlers.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use notebin_auth::session::cookie::{clear_session_cookie, session_cookie};
use notebin_core::error::AppError;

use crate::dto::request::CredentialsRequest;
use crate::state::AppState;

/// POST /api/setup
pub async fn setup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid setup request: {e}")))?;

    state
        .admin_service
        .setup(&req.username, &req.password)
        .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}

/// GET /api/setup/status
pub async fn setup_status(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let initialized = state.admin_service.is_initialized().await?;
    Ok(Json(
        serde_json::json!({ "success": true, "initialized": initialized }),
    ))
}

/// POST /api/login
///
/// Sets the session cookie and also returns the token for clients that
/// send it in the access-token header.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<CredentialsRequest>,
) -> Result<(CookieJar, Json<serde_json::Value>), AppError> {
    let token = state
        .admin_service
        .login(&req.username, &req.password)
        .await?;

    let jar = jar.add(session_cookie(&state.config.session, token.clone()));
    Ok((
        jar,
        Json(serde_json::json!({ "success": true, "token": token })),
    ))
}

/// GET|POST /api/logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(clear_session_cookie(&state.config.session));
    (StatusCode::FOUND, jar, [(header::LOCATION, "/")])
}
