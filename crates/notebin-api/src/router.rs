//! Route definitions for the Notebin HTTP API.
//!
//! The public share page lives at `/share`; everything else is mounted
//! under `/api`.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the router with all routes. Middleware is added by
/// [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(share_routes())
        .merge(content_routes());

    Router::new()
        .route(
            "/share",
            get(handlers::public::share_page).post(handlers::public::share_page_unlock),
        )
        .nest("/api", api_routes)
        .with_state(state)
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Setup, login, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/setup", post(handlers::auth::setup))
        .route("/setup/status", get(handlers::auth::setup_status))
        .route("/login", post(handlers::auth::login))
        .route(
            "/logout",
            get(handlers::auth::logout).post(handlers::auth::logout),
        )
}

/// Share link management (admin)
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/share/create", post(handlers::share::create_share))
        .route("/share/list", get(handlers::share::list_shares))
        .route("/share/delete", delete(handlers::share::delete_share))
        .route("/share/batch_delete", post(handlers::share::batch_delete))
}

/// Content store (admin)
fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/save", post(handlers::content::save))
        .route("/get", get(handlers::content::get))
        .route("/delete", delete(handlers::content::delete))
        .route("/list", get(handlers::content::list))
}
