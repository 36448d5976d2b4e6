//! Natural-language task assistant.
//!
//! Converts free-text commands into task mutations:
//! raw text → parser → resolver → authorization gate → executor → envelope.

pub mod authz;
pub mod executor;
pub mod parser;
pub mod resolver;

use serde::Serialize;

use crate::models::task::Task;
use crate::models::user::User;

pub use executor::CommandExecutor;
pub use parser::{IntentKind, ParsedIntent, TaskReference};

/// A command issued by an authenticated user, immutable once built.
#[derive(Debug, Clone)]
pub struct Command {
    /// Raw command text as typed.
    pub text: String,
    /// Issuing user, including role and team membership.
    pub actor: User,
    /// Project the command is scoped to, when supplied.
    pub project_id: Option<String>,
}

/// Uniform response produced for every executed command.
///
/// At most one of `task` and `tasks` is populated; intents that mutate
/// nothing visible (delete, help, unknown) populate neither.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ResultEnvelope {
    /// Human-readable outcome message.
    pub message: String,
    /// Snapshot of the single affected task, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    /// Snapshot of the listed tasks, for list commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}

impl ResultEnvelope {
    /// Envelope carrying only a message.
    #[must_use]
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            task: None,
            tasks: None,
        }
    }

    /// Envelope carrying a message and a single task snapshot.
    #[must_use]
    pub fn with_task(message: impl Into<String>, task: Task) -> Self {
        Self {
            message: message.into(),
            task: Some(task),
            tasks: None,
        }
    }

    /// Envelope carrying a message and a task list snapshot.
    #[must_use]
    pub fn with_tasks(message: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            message: message.into(),
            task: None,
            tasks: Some(tasks),
        }
    }
}
