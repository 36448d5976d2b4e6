//! Chat message repository for `SQLite` persistence.

use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::message::ChatMessage;
use crate::{AppError, Result};

/// Repository wrapper around `SQLite` for chat message records.
#[derive(Clone)]
pub struct MessageRepo {
    db: Arc<SqlitePool>,
}

/// Internal row struct for `SQLite` deserialization.
#[derive(sqlx::FromRow)]
struct MessageRow {
    id: String,
    team_id: String,
    sender_id: String,
    body: String,
    created_at: String,
}

impl MessageRow {
    /// Convert a database row into the domain model.
    fn into_message(self) -> Result<ChatMessage> {
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| AppError::Db(format!("invalid created_at: {e}")))?
            .with_timezone(&Utc);

        Ok(ChatMessage {
            id: self.id,
            team_id: self.team_id,
            sender_id: self.sender_id,
            body: self.body,
            created_at,
        })
    }
}

impl MessageRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }

    /// Insert a new message record.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the database insert fails.
    pub async fn create(&self, message: &ChatMessage) -> Result<ChatMessage> {
        sqlx::query(
            "INSERT INTO message (id, team_id, sender_id, body, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&message.id)
        .bind(&message.team_id)
        .bind(&message.sender_id)
        .bind(&message.body)
        .bind(message.created_at.to_rfc3339())
        .execute(self.db.as_ref())
        .await?;

        Ok(message.clone())
    }

    /// List the most recent messages in a team, newest first.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list_by_team(&self, team_id: &str, limit: u32) -> Result<Vec<ChatMessage>> {
        let rows: Vec<MessageRow> = sqlx::query_as(
            "SELECT * FROM message WHERE team_id = ?1 ORDER BY created_at DESC LIMIT ?2",
        )
        .bind(team_id)
        .bind(limit)
        .fetch_all(self.db.as_ref())
        .await?;

        rows.into_iter().map(MessageRow::into_message).collect()
    }
}
