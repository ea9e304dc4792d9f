//! Repository for message persistence and history queries.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::SqlitePool;

use super::models::Message;

/// Repository for the messages table.
///
/// Rows are write-once: there is no update or delete. All SQL is
/// parameterized; user input never reaches the query text.
#[derive(Debug, Clone)]
pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    /// Create a new repository instance.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist one message and return its store-assigned id.
    ///
    /// The timestamp is taken from the server clock at insert time. Content
    /// is bound as raw bytes so frames survive byte-for-byte, UTF-8 or not.
    pub async fn add(&self, username: &str, content: &[u8]) -> Result<i64> {
        let created_at = Utc::now().to_rfc3339();

        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO messages (username, content, created_at)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(content)
        .bind(&created_at)
        .fetch_one(&self.pool)
        .await
        .context("inserting message")
    }

    /// All messages for one user, in insertion order.
    ///
    /// Matching is exact and case-sensitive. An unknown user yields an
    /// empty vec, not an error.
    pub async fn list_by_user(&self, username: &str) -> Result<Vec<Message>> {
        sqlx::query_as::<_, Message>(
            r#"
            SELECT id, username, content, created_at
            FROM messages
            WHERE username = ?
            ORDER BY id ASC
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .context("listing messages by user")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn setup() -> (Database, MessageRepository) {
        let db = Database::in_memory().await.unwrap();
        let repo = MessageRepository::new(db.pool().clone());
        (db, repo)
    }

    #[tokio::test]
    async fn test_messages_come_back_in_insertion_order() {
        let (_db, repo) = setup().await;

        let first = repo.add("alice", b"hi").await.unwrap();
        let second = repo.add("alice", b"bye").await.unwrap();
        assert!(second > first);

        let messages = repo.list_by_user("alice").await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, b"hi");
        assert_eq!(messages[1].content, b"bye");
        assert!(messages[0].id < messages[1].id);
    }

    #[tokio::test]
    async fn test_users_never_see_each_others_messages() {
        let (_db, repo) = setup().await;

        repo.add("alice", b"for alice").await.unwrap();
        repo.add("bob", b"for bob").await.unwrap();
        repo.add("alice", b"also for alice").await.unwrap();

        let alice = repo.list_by_user("alice").await.unwrap();
        assert_eq!(alice.len(), 2);
        assert!(alice.iter().all(|m| m.username == "alice"));

        let bob = repo.list_by_user("bob").await.unwrap();
        assert_eq!(bob.len(), 1);
        assert_eq!(bob[0].content, b"for bob");
    }

    #[tokio::test]
    async fn test_username_match_is_exact() {
        let (_db, repo) = setup().await;

        repo.add("alice", b"hi").await.unwrap();

        // No normalization: case and whitespace both matter.
        assert!(repo.list_by_user("Alice").await.unwrap().is_empty());
        assert!(repo.list_by_user("alice ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_yields_empty_list() {
        let (_db, repo) = setup().await;

        let messages = repo.list_by_user("nobody").await.unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn test_content_is_stored_verbatim() {
        let (_db, repo) = setup().await;

        let content = "  '; DROP TABLE messages; --  ";
        repo.add("mallory", content.as_bytes()).await.unwrap();

        let messages = repo.list_by_user("mallory").await.unwrap();
        assert_eq!(messages[0].content, content.as_bytes());
    }

    #[tokio::test]
    async fn test_non_utf8_content_round_trips_untouched() {
        let (_db, repo) = setup().await;

        let raw: &[u8] = &[0xff, 0xfe, 0x00, 0x41];
        repo.add("carol", raw).await.unwrap();

        let messages = repo.list_by_user("carol").await.unwrap();
        assert_eq!(messages[0].content, raw);
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_increasing_across_tasks() {
        let (_db, repo) = setup().await;

        let mut handles = Vec::new();
        for i in 0..4 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                let mut ids = Vec::new();
                for j in 0..5 {
                    let id = repo
                        .add(&format!("user{i}"), format!("msg{j}").as_bytes())
                        .await
                        .unwrap();
                    ids.push(id);
                }
                ids
            }));
        }

        let mut all = Vec::new();
        for handle in handles {
            let ids = handle.await.unwrap();
            // Each session's ids grow in its own commit order.
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
            all.extend(ids);
        }

        let mut deduped = all.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), all.len());
    }
}
