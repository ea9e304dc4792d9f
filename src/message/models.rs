//! Message row types.

/// One persisted message.
///
/// `id` is assigned by the store on insert and carries insertion order;
/// `created_at` is the server clock at persist time and is informational
/// only, never used as an ordering key. `content` is the raw bytes of one
/// received frame, stored without any encoding transform.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub username: String,
    pub content: Vec<u8>,
    pub created_at: String,
}
