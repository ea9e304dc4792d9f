//! HTTP API module.
//!
//! History and health endpoints, shared state, and the router wiring.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
