//! Chat message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chat message posted to a team's stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ChatMessage {
    /// Unique record identifier.
    pub id: String,
    /// Owning team identifier.
    pub team_id: String,
    /// Authoring user identifier.
    pub sender_id: String,
    /// Message body.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Construct a new message with a generated identifier.
    #[must_use]
    pub fn new(team_id: String, sender_id: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            team_id,
            sender_id,
            body,
            created_at: Utc::now(),
        }
    }
}
