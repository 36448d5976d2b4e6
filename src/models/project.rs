//! Project model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project grouping tasks under a team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Project {
    /// Unique record identifier.
    pub id: String,
    /// Owning team identifier.
    pub team_id: String,
    /// Project display name.
    pub name: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Construct a new project with a generated identifier.
    #[must_use]
    pub fn new(team_id: String, name: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            team_id,
            name,
            description,
            created_at: Utc::now(),
        }
    }
}
