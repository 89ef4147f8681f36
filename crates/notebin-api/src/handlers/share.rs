//! Share link management handlers (admin).

use axum::Json;
use axum::extract::{Query, State};

use notebin_core::error::AppError;
use notebin_entity::share::ShareLink;
use notebin_service::share::CreateShareRequest as CreateShare;

use crate::dto::request::{BatchDeleteRequest, CreateShareRequest, TokenQuery};
use crate::dto::response::{CreateShareResponse, ShareListResponse, ShareSummary};
use crate::extractors::{AdminSession, RequestOrigin};
use crate::state::AppState;

/// POST /api/share/create
pub async fn create_share(
    State(state): State<AppState>,
    auth: AdminSession,
    RequestOrigin(origin): RequestOrigin,
    Json(req): Json<CreateShareRequest>,
) -> Result<Json<CreateShareResponse>, AppError> {
    let share = state
        .share_service
        .create_share(
            &auth,
            CreateShare {
                file_id: req.file_id,
                password: req.password,
                expire_seconds: req.expire,
                max_visits: req.max_visits,
            },
        )
        .await?;

    Ok(Json(CreateShareResponse {
        success: true,
        link: ShareLink {
            url: ShareLink::url_for(&origin, &share.token),
            is_password_protected: share.requires_password(),
            expires_at: share.expire,
            token: share.token,
        },
    }))
}

/// GET /api/share/list
pub async fn list_shares(
    State(state): State<AppState>,
    auth: AdminSession,
) -> Result<Json<ShareListResponse>, AppError> {
    let shares = state.share_service.list_shares(&auth).await?;
    Ok(Json(ShareListResponse {
        success: true,
        shares: shares.into_iter().map(ShareSummary::from).collect(),
    }))
}

/// DELETE /api/share/delete?token=
pub async fn delete_share(
    State(state): State<AppState>,
    auth: AdminSession,
    Query(query): Query<TokenQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let token = query
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::validation("Missing token"))?;

    let removed = state.share_service.delete_share(&auth, &token).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "removed": removed }),
    ))
}

/// POST /api/share/batch_delete
pub async fn batch_delete(
    State(state): State<AppState>,
    auth: AdminSession,
    Json(req): Json<BatchDeleteRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tokens = req
        .tokens
        .ok_or_else(|| AppError::validation("tokens must be an array"))?;

    let removed = state.share_service.batch_delete(&auth, &tokens).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "removed": removed }),
    ))
}
