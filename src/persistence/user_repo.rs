//! User repository for `SQLite` persistence.

use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::user::{Role, User};
use crate::{AppError, Result};

/// Repository wrapper around `SQLite` for user records.
#[derive(Clone)]
pub struct UserRepo {
    db: Arc<SqlitePool>,
}

/// Internal row struct for `SQLite` deserialization.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: String,
    team_id: String,
    created_at: String,
}

impl UserRow {
    /// Convert a database row into the domain model.
    fn into_user(self) -> Result<User> {
        let role = Role::parse(&self.role)
            .ok_or_else(|| AppError::Db(format!("invalid role: {}", self.role)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| AppError::Db(format!("invalid created_at: {e}")))?
            .with_timezone(&Utc);

        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            role,
            team_id: self.team_id,
            created_at,
        })
    }
}

impl UserRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }

    /// Insert a new user record.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the database insert fails.
    pub async fn create(&self, user: &User) -> Result<User> {
        sqlx::query(
            "INSERT INTO user (id, name, email, role, team_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(&user.team_id)
        .bind(user.created_at.to_rfc3339())
        .execute(self.db.as_ref())
        .await?;

        Ok(user.clone())
    }

    /// Retrieve a user by identifier.
    ///
    /// Returns `Ok(None)` if the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM user WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.db.as_ref())
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// List all users in a team, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list_by_team(&self, team_id: &str) -> Result<Vec<User>> {
        let rows: Vec<UserRow> =
            sqlx::query_as("SELECT * FROM user WHERE team_id = ?1 ORDER BY created_at ASC")
                .bind(team_id)
                .fetch_all(self.db.as_ref())
                .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    /// List users in a team holding a specific role, oldest first.
    ///
    /// The assistant draws assignee candidates from this query with
    /// `Role::Member`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list_by_team_and_role(&self, team_id: &str, role: Role) -> Result<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT * FROM user WHERE team_id = ?1 AND role = ?2 ORDER BY created_at ASC",
        )
        .bind(team_id)
        .bind(role.as_str())
        .fetch_all(self.db.as_ref())
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }
}
