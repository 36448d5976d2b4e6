//! Task model and status enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow status for a task.
///
/// The closed vocabulary the assistant accepts; free-text synonyms are
/// normalized by the parser, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started.
    Todo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// Stable string form used in persistence and messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Parse the stable string form back into a status.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(Self::Todo),
            "in-progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

/// A unit of work inside a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Task {
    /// Unique record identifier.
    pub id: String,
    /// Owning project identifier.
    pub project_id: String,
    /// Short human-readable title; the resolver matches fragments against it.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Current workflow status.
    pub status: TaskStatus,
    /// Assigned user, if any.
    pub assignee_id: Option<String>,
    /// User who created the task.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Construct a new task with defaults and a generated identifier.
    #[must_use]
    pub fn new(
        project_id: String,
        title: String,
        description: Option<String>,
        status: TaskStatus,
        assignee_id: Option<String>,
        created_by: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            project_id,
            title,
            description,
            status,
            assignee_id,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}
