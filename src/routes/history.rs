//! GET /api/history/list and /api/history/load

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::AppError;
use crate::history::{self, HistoryError};
use crate::session::RequireAuth;
use crate::types::{HistoryListResponse, HistoryLoadResponse};

#[derive(Debug, Deserialize)]
pub struct LoadQuery {
    pub filename: Option<String>,
}

/// List available snapshot files, newest first.
pub async fn list(
    State(state): State<Arc<crate::AppState>>,
) -> Result<Json<HistoryListResponse>, AppError> {
    let files = history::list_snapshots(&state.config.history_dir)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to list history: {e}")))?;
    Ok(Json(HistoryListResponse { files }))
}

/// Load one snapshot with aggregate follower/like totals.
pub async fn load(
    State(state): State<Arc<crate::AppState>>,
    _auth: RequireAuth,
    Query(query): Query<LoadQuery>,
) -> Result<Json<HistoryLoadResponse>, AppError> {
    let filename = query
        .filename
        .filter(|f| !f.is_empty())
        .ok_or_else(|| AppError::BadRequest("filename parameter is required".into()))?;

    let snapshot = history::load_snapshot(&state.config.history_dir, &filename)
        .await
        .map_err(|e| match e {
            HistoryError::InvalidFilename(_) => AppError::BadRequest(e.to_string()),
            HistoryError::NotFound(_) => AppError::NotFound(e.to_string()),
            other => AppError::Internal(format!("Failed to load history: {other}")),
        })?;

    Ok(Json(snapshot))
}
