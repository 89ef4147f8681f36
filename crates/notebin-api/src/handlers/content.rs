//! Content store handlers (admin).

use axum::Json;
use axum::extract::{Query, State};

use notebin_core::error::AppError;

use crate::dto::request::{IdQuery, SaveContentRequest};
use crate::dto::response::{ContentEntry, ContentListResponse};
use crate::extractors::AdminSession;
use crate::state::AppState;

fn required_id(query: IdQuery) -> Result<String, AppError> {
    query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::validation("Missing id"))
}

/// POST /api/save
pub async fn save(
    State(state): State<AppState>,
    auth: AdminSession,
    Json(req): Json<SaveContentRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = state
        .content_service
        .save(&auth, req.id.as_deref(), &req.code)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "id": id })))
}

/// GET /api/get?id=
pub async fn get(
    State(state): State<AppState>,
    auth: AdminSession,
    Query(query): Query<IdQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = required_id(query)?;
    let code = state.content_service.get(&auth, &id).await?;
    Ok(Json(serde_json::json!({ "success": true, "code": code })))
}

/// DELETE /api/delete?id=
pub async fn delete(
    State(state): State<AppState>,
    auth: AdminSession,
    Query(query): Query<IdQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = required_id(query)?;
    let removed_shares = state.content_service.delete(&auth, &id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "removedShares": removed_shares }),
    ))
}

/// GET /api/list
pub async fn list(
    State(state): State<AppState>,
    auth: AdminSession,
) -> Result<Json<ContentListResponse>, AppError> {
    let files = state.content_service.list(&auth).await?;
    Ok(Json(ContentListResponse {
        success: true,
        files: files.into_iter().map(ContentEntry::from).collect(),
    }))
}
