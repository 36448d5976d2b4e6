//! User handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::http::auth::AuthedUser;
use crate::http::AppState;
use crate::models::user::{Role, User};
use crate::persistence::team_repo::TeamRepo;
use crate::persistence::user_repo::UserRepo;
use crate::{AppError, Result};

use super::ensure_own_team;

/// Request body for user creation.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Contact handle.
    pub email: String,
    /// Team role.
    pub role: Role,
    /// Owning team.
    pub team_id: String,
}

/// Create a user in an existing team.
///
/// # Errors
///
/// Returns `BadRequest` for empty fields, `NotFound` for an unknown team,
/// or `Db` on persistence failure.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>)> {
    if body.name.trim().is_empty() || body.email.trim().is_empty() {
        return Err(AppError::BadRequest(
            "name and email must not be empty".into(),
        ));
    }

    TeamRepo::new(Arc::clone(&state.db))
        .get_by_id(&body.team_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("team {} not found", body.team_id)))?;

    let user = UserRepo::new(Arc::clone(&state.db))
        .create(&User::new(body.name, body.email, body.role, body.team_id))
        .await?;

    info!(user = %user.id, role = user.role.as_str(), "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// List the users of the caller's team.
///
/// # Errors
///
/// Returns `Forbidden` for another team or `Db` on failure.
pub async fn list_by_team(
    State(state): State<Arc<AppState>>,
    AuthedUser(actor): AuthedUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<User>>> {
    ensure_own_team(&actor, &id)?;

    let users = UserRepo::new(Arc::clone(&state.db))
        .list_by_team(&id)
        .await?;

    Ok(Json(users))
}
