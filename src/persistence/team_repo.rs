//! Team repository for `SQLite` persistence.

use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::team::Team;
use crate::{AppError, Result};

/// Repository wrapper around `SQLite` for team records.
#[derive(Clone)]
pub struct TeamRepo {
    db: Arc<SqlitePool>,
}

/// Internal row struct for `SQLite` deserialization.
#[derive(sqlx::FromRow)]
struct TeamRow {
    id: String,
    name: String,
    created_at: String,
}

impl TeamRow {
    /// Convert a database row into the domain model.
    fn into_team(self) -> Result<Team> {
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| AppError::Db(format!("invalid created_at: {e}")))?
            .with_timezone(&Utc);

        Ok(Team {
            id: self.id,
            name: self.name,
            created_at,
        })
    }
}

impl TeamRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }

    /// Insert a new team record.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the database insert fails.
    pub async fn create(&self, team: &Team) -> Result<Team> {
        sqlx::query("INSERT INTO team (id, name, created_at) VALUES (?1, ?2, ?3)")
            .bind(&team.id)
            .bind(&team.name)
            .bind(team.created_at.to_rfc3339())
            .execute(self.db.as_ref())
            .await?;

        Ok(team.clone())
    }

    /// Retrieve a team by identifier.
    ///
    /// Returns `Ok(None)` if the team does not exist.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Team>> {
        let row: Option<TeamRow> = sqlx::query_as("SELECT * FROM team WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.db.as_ref())
            .await?;

        row.map(TeamRow::into_team).transpose()
    }
}
