//! chatsink - minimal real-time message ingestion server.
//!
//! Clients connect over a WebSocket (`/ws?username=...`) and every frame
//! they send is persisted to SQLite. `/history?username=...` returns a
//! user's own messages in insertion order. Messages flow one way, from
//! client to storage; nothing is broadcast and nothing is acknowledged.

pub mod api;
pub mod db;
pub mod message;
pub mod ws;
