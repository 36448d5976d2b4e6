//! Task repository for `SQLite` persistence.

use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::task::{Task, TaskStatus};
use crate::{AppError, Result};

/// Repository wrapper around `SQLite` for task records.
#[derive(Clone)]
pub struct TaskRepo {
    db: Arc<SqlitePool>,
}

/// Internal row struct for `SQLite` deserialization.
#[derive(sqlx::FromRow)]
struct TaskRow {
    id: String,
    project_id: String,
    title: String,
    description: Option<String>,
    status: String,
    assignee_id: Option<String>,
    created_by: String,
    created_at: String,
    updated_at: String,
}

impl TaskRow {
    /// Convert a database row into the domain model.
    fn into_task(self) -> Result<Task> {
        let status = TaskStatus::parse(&self.status)
            .ok_or_else(|| AppError::Db(format!("invalid task status: {}", self.status)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| AppError::Db(format!("invalid created_at: {e}")))?
            .with_timezone(&Utc);
        let updated_at = chrono::DateTime::parse_from_rfc3339(&self.updated_at)
            .map_err(|e| AppError::Db(format!("invalid updated_at: {e}")))?
            .with_timezone(&Utc);

        Ok(Task {
            id: self.id,
            project_id: self.project_id,
            title: self.title,
            description: self.description,
            status,
            assignee_id: self.assignee_id,
            created_by: self.created_by,
            created_at,
            updated_at,
        })
    }
}

impl TaskRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }

    /// Insert a new task record.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the database insert fails.
    pub async fn create(&self, task: &Task) -> Result<Task> {
        sqlx::query(
            "INSERT INTO task (id, project_id, title, description, status, assignee_id,
             created_by, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(&task.id)
        .bind(&task.project_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(&task.assignee_id)
        .bind(&task.created_by)
        .bind(task.created_at.to_rfc3339())
        .bind(task.updated_at.to_rfc3339())
        .execute(self.db.as_ref())
        .await?;

        Ok(task.clone())
    }

    /// Retrieve a task by identifier.
    ///
    /// Returns `Ok(None)` if the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Task>> {
        let row: Option<TaskRow> = sqlx::query_as("SELECT * FROM task WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.db.as_ref())
            .await?;

        row.map(TaskRow::into_task).transpose()
    }

    /// List all tasks belonging to a project, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list_by_project(&self, project_id: &str) -> Result<Vec<Task>> {
        let rows: Vec<TaskRow> =
            sqlx::query_as("SELECT * FROM task WHERE project_id = ?1 ORDER BY created_at ASC")
                .bind(project_id)
                .fetch_all(self.db.as_ref())
                .await?;

        rows.into_iter().map(TaskRow::into_task).collect()
    }

    /// Persist the full state of an existing task, refreshing `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no row matches the task identifier.
    /// Returns `AppError::Db` if the update fails.
    pub async fn save(&self, task: &Task) -> Result<Task> {
        let mut updated = task.clone();
        updated.updated_at = Utc::now();

        let result = sqlx::query(
            "UPDATE task SET project_id = ?1, title = ?2, description = ?3, status = ?4,
             assignee_id = ?5, updated_at = ?6 WHERE id = ?7",
        )
        .bind(&updated.project_id)
        .bind(&updated.title)
        .bind(&updated.description)
        .bind(updated.status.as_str())
        .bind(&updated.assignee_id)
        .bind(updated.updated_at.to_rfc3339())
        .bind(&updated.id)
        .execute(self.db.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("task {} not found", task.id)));
        }

        Ok(updated)
    }

    /// Delete a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no row matches the identifier.
    /// Returns `AppError::Db` if the delete fails.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM task WHERE id = ?1")
            .bind(id)
            .execute(self.db.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("task {id} not found")));
        }

        Ok(())
    }
}
