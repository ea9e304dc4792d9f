//! API request handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use super::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    if !state.db.is_healthy().await {
        return Err(ApiError::internal("database unavailable"));
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Query parameters for the history endpoint.
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    #[serde(default)]
    pub username: String,
}

/// One history record returned to the client.
#[derive(Debug, Serialize)]
pub struct HistoryMessage {
    pub username: String,
    pub content: String,
}

/// Message history for one user, in insertion order.
///
/// GET /history?username=alice
///
/// Returns an empty array for a user with no messages. A missing or empty
/// username is rejected before any query runs. Storage keeps raw frame
/// bytes; JSON cannot carry them, so non-UTF-8 content is replaced here at
/// the serialization boundary only.
pub async fn history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> ApiResult<Json<Vec<HistoryMessage>>> {
    if params.username.is_empty() {
        return Err(ApiError::bad_request("username required"));
    }

    let messages = state.messages.list_by_user(&params.username).await?;

    let body = messages
        .into_iter()
        .map(|m| HistoryMessage {
            username: m.username,
            content: String::from_utf8_lossy(&m.content).into_owned(),
        })
        .collect();

    Ok(Json(body))
}
