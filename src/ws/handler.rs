//! WebSocket handler for ingestion sessions.

use axum::{
    extract::{
        Query, State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::api::{ApiError, AppState};

/// Query parameters for the ingestion endpoint.
#[derive(Debug, Deserialize)]
pub struct WsParams {
    #[serde(default)]
    pub username: String,
}

/// WebSocket upgrade handler.
///
/// GET /ws?username=alice
///
/// The username is required before the upgrade; a connection without one is
/// rejected with a 400 and never reaches the streaming loop.
pub async fn ws_handler(
    State(state): State<AppState>,
    Query(params): Query<WsParams>,
    ws: WebSocketUpgrade,
) -> Result<Response, ApiError> {
    if params.username.is_empty() {
        return Err(ApiError::bad_request("username required"));
    }

    let username = params.username;
    Ok(ws.on_upgrade(move |socket| handle_session(socket, state, username)))
}

/// Run one ingestion session until the client disconnects.
///
/// Every received frame, text or binary, is persisted byte-for-byte with
/// the session's username. A failed persist is logged and the loop keeps
/// reading; only a close frame or a read error ends the session. The socket
/// is owned here, so it is released on every exit path.
async fn handle_session(mut socket: WebSocket, state: AppState, username: String) {
    info!(%username, "client connected");

    while let Some(msg) = socket.recv().await {
        match msg {
            Ok(Message::Text(text)) => {
                persist(&state, &username, text.as_bytes()).await;
            }
            Ok(Message::Binary(data)) => {
                persist(&state, &username, &data).await;
            }
            Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {
                debug!(%username, "keepalive frame");
            }
            Ok(Message::Close(_)) => {
                break;
            }
            Err(e) => {
                warn!(%username, error = %e, "read failed");
                break;
            }
        }
    }

    info!(%username, "client disconnected");
}

/// Persist one frame; failures are logged, never escalated.
async fn persist(state: &AppState, username: &str, content: &[u8]) {
    if let Err(e) = state.messages.add(username, content).await {
        warn!(%username, error = %e, "failed to persist message");
    }
}
