//! WebSocket ingestion endpoint.
//!
//! One session per accepted connection: frames flow client to storage,
//! nothing is ever written back.

mod handler;

pub use handler::ws_handler;
