use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use colloquy_persist::ChatThread;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoadThreadsQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    fn ok() -> Self {
        Self { success: true }
    }
}

/// Load all threads belonging to a user
pub async fn load_threads(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LoadThreadsQuery>,
) -> ApiResult<Json<Vec<ChatThread>>> {
    // 1. Validate the required query parameter
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::BadRequest("Missing userId query parameter".to_string()))?;

    // 2. Read the collection
    let threads = state.store.load_by_user(&user_id).await?;

    Ok(Json(threads))
}

/// Save (insert or replace) a full thread document
pub async fn save_thread(
    State(state): State<Arc<AppState>>,
    Json(thread): Json<ChatThread>,
) -> ApiResult<Json<SuccessResponse>> {
    state.store.upsert(thread).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Delete a thread by id
///
/// Succeeds even if no thread with that id exists.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    state.store.delete_by_id(&thread_id).await?;
    Ok(Json(SuccessResponse::ok()))
}
