//! Public `/share` page: share-link access and admin preview.

use axum::Form;
use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use notebin_core::error::{AppError, ErrorKind};
use notebin_service::share::ShareAccess;

use crate::dto::request::{SharePageQuery, UnlockForm};
use crate::error::{log_if_server_error, status_for};
use crate::extractors::MaybeAdmin;
use crate::pages;
use crate::state::AppState;

const HTML: &str = "text/html; charset=UTF-8";
const PLAIN: &str = "text/plain; charset=UTF-8";

/// GET /share?k=&raw=&id=
pub async fn share_page(
    State(state): State<AppState>,
    admin: MaybeAdmin,
    Query(query): Query<SharePageQuery>,
) -> Response {
    render(&state, admin, query, None).await
}

/// POST /share?k=&raw= with a `password` form field.
pub async fn share_page_unlock(
    State(state): State<AppState>,
    admin: MaybeAdmin,
    Query(query): Query<SharePageQuery>,
    form: Result<Form<UnlockForm>, FormRejection>,
) -> Response {
    let password = form.ok().and_then(|Form(form)| form.password);
    render(&state, admin, query, password).await
}

async fn render(
    state: &AppState,
    MaybeAdmin(admin): MaybeAdmin,
    query: SharePageQuery,
    password: Option<String>,
) -> Response {
    if let Some(file_id) = query.id.as_deref().filter(|id| !id.is_empty()) {
        return match admin {
            Some(_) => preview(state, file_id).await,
            None => failure(&AppError::forbidden("Admin session required for preview"), false),
        };
    }

    let raw = query.is_raw();
    let outcome = state
        .access_service
        .resolve(query.k.as_deref(), password.as_deref())
        .await;

    match outcome {
        Ok(ShareAccess::NeedsPassword { token, rejected }) => html(
            StatusCode::OK,
            pages::password_page(&token, raw, rejected),
        ),
        Ok(ShareAccess::Granted(content)) => {
            let response = if raw {
                plain(StatusCode::OK, content.text())
            } else {
                html(
                    StatusCode::OK,
                    pages::content_page(&content.file_id, &content.text(), Some(&content.token)),
                )
            };
            // Counted after the response is built; the client never waits on it.
            let _ = state.access_service.record_view_detached(content.token);
            response
        }
        Err(e) => failure(&e, raw),
    }
}

async fn preview(state: &AppState, file_id: &str) -> Response {
    match state.access_service.preview(file_id).await {
        Ok(body) => html(
            StatusCode::OK,
            pages::content_page(file_id, &String::from_utf8_lossy(&body), None),
        ),
        Err(e) => failure(&e, false),
    }
}

fn failure(err: &AppError, raw: bool) -> Response {
    log_if_server_error(err);
    let status = status_for(err.kind);
    let (title, message) = describe(err.kind);

    if raw {
        plain(status, format!("{title}: {message}"))
    } else {
        html(status, pages::error_page(title, message))
    }
}

fn describe(kind: ErrorKind) -> (&'static str, &'static str) {
    match kind {
        ErrorKind::InvalidLink => ("Invalid link", "The link is missing its access key."),
        ErrorKind::LinkNotFound => ("Link not found", "This share link does not exist or was deleted."),
        ErrorKind::LinkExpired => ("Link expired", "This share link has passed its expiry time."),
        ErrorKind::LinkExhausted => ("Link used up", "This share link has reached its view limit."),
        ErrorKind::SourceMissing => ("Content missing", "The shared content has been deleted."),
        ErrorKind::NotFound => ("Content not found", "No content exists with this id."),
        ErrorKind::Forbidden => ("Access denied", "Sign in as admin to preview content."),
        ErrorKind::Validation => ("Bad request", "The request could not be understood."),
        _ => ("Server error", "Something went wrong while loading this page."),
    }
}

fn html(status: StatusCode, body: String) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, HTML),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    )
        .into_response()
}

fn plain(status: StatusCode, body: String) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, PLAIN),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    )
        .into_response()
}
