//! Team handlers.
//!
//! Team and user creation form the provisioning surface that the upstream
//! registration flow drives; they require no prior identity.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::http::auth::AuthedUser;
use crate::http::AppState;
use crate::models::team::Team;
use crate::persistence::team_repo::TeamRepo;
use crate::{AppError, Result};

use super::ensure_own_team;

/// Request body for team creation.
#[derive(Debug, Deserialize)]
pub struct CreateTeam {
    /// Team display name.
    pub name: String,
}

/// Create a team.
///
/// # Errors
///
/// Returns `BadRequest` for an empty name or `Db` on persistence failure.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTeam>,
) -> Result<(StatusCode, Json<Team>)> {
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }

    let team = TeamRepo::new(Arc::clone(&state.db))
        .create(&Team::new(body.name))
        .await?;

    info!(team = %team.id, "team created");
    Ok((StatusCode::CREATED, Json(team)))
}

/// Fetch the caller's own team.
///
/// # Errors
///
/// Returns `Forbidden` for another team or `NotFound` if the record is gone.
pub async fn get(
    State(state): State<Arc<AppState>>,
    AuthedUser(actor): AuthedUser,
    Path(id): Path<String>,
) -> Result<Json<Team>> {
    ensure_own_team(&actor, &id)?;

    let team = TeamRepo::new(Arc::clone(&state.db))
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("team {id} not found")))?;

    Ok(Json(team))
}
