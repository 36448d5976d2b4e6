//! Project repository for `SQLite` persistence.

use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::project::Project;
use crate::{AppError, Result};

/// Repository wrapper around `SQLite` for project records.
#[derive(Clone)]
pub struct ProjectRepo {
    db: Arc<SqlitePool>,
}

/// Internal row struct for `SQLite` deserialization.
#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: String,
    team_id: String,
    name: String,
    description: Option<String>,
    created_at: String,
}

impl ProjectRow {
    /// Convert a database row into the domain model.
    fn into_project(self) -> Result<Project> {
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| AppError::Db(format!("invalid created_at: {e}")))?
            .with_timezone(&Utc);

        Ok(Project {
            id: self.id,
            team_id: self.team_id,
            name: self.name,
            description: self.description,
            created_at,
        })
    }
}

impl ProjectRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }

    /// Insert a new project record.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the database insert fails.
    pub async fn create(&self, project: &Project) -> Result<Project> {
        sqlx::query(
            "INSERT INTO project (id, team_id, name, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&project.id)
        .bind(&project.team_id)
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.created_at.to_rfc3339())
        .execute(self.db.as_ref())
        .await?;

        Ok(project.clone())
    }

    /// Retrieve a project by identifier.
    ///
    /// Returns `Ok(None)` if the project does not exist.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Project>> {
        let row: Option<ProjectRow> = sqlx::query_as("SELECT * FROM project WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.db.as_ref())
            .await?;

        row.map(ProjectRow::into_project).transpose()
    }

    /// List all projects in a team, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list_by_team(&self, team_id: &str) -> Result<Vec<Project>> {
        let rows: Vec<ProjectRow> =
            sqlx::query_as("SELECT * FROM project WHERE team_id = ?1 ORDER BY created_at ASC")
                .bind(team_id)
                .fetch_all(self.db.as_ref())
                .await?;

        rows.into_iter().map(ProjectRow::into_project).collect()
    }
}
