//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::Database;
use crate::message::MessageRepository;

/// Application state shared across all handlers.
///
/// Initialized once at startup and cloned into every handler; the
/// repository is the only mutable boundary between sessions.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide store handle.
    pub db: Database,
    /// Message repository used by ingestion sessions and history requests.
    pub messages: Arc<MessageRepository>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database) -> Self {
        let messages = Arc::new(MessageRepository::new(db.pool().clone()));
        Self { db, messages }
    }
}
