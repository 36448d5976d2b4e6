//! Project handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::http::auth::AuthedUser;
use crate::http::AppState;
use crate::models::project::Project;
use crate::models::user::Role;
use crate::persistence::project_repo::ProjectRepo;
use crate::{AppError, Result};

use super::ensure_own_team;

/// Request body for project creation.
#[derive(Debug, Deserialize)]
pub struct CreateProject {
    /// Project display name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Create a project in the caller's team; managers and admins only.
///
/// # Errors
///
/// Returns `Forbidden` for members, `BadRequest` for an empty name, or
/// `Db` on persistence failure.
pub async fn create(
    State(state): State<Arc<AppState>>,
    AuthedUser(actor): AuthedUser,
    Json(body): Json<CreateProject>,
) -> Result<(StatusCode, Json<Project>)> {
    if actor.role == Role::Member {
        return Err(AppError::Forbidden(
            "members are not allowed to create projects".into(),
        ));
    }

    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }

    let project = ProjectRepo::new(Arc::clone(&state.db))
        .create(&Project::new(
            actor.team_id.clone(),
            body.name,
            body.description,
        ))
        .await?;

    info!(project = %project.id, team = %project.team_id, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// List the projects of the caller's team.
///
/// # Errors
///
/// Returns `Forbidden` for another team or `Db` on failure.
pub async fn list_by_team(
    State(state): State<Arc<AppState>>,
    AuthedUser(actor): AuthedUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Project>>> {
    ensure_own_team(&actor, &id)?;

    let projects = ProjectRepo::new(Arc::clone(&state.db))
        .list_by_team(&id)
        .await?;

    Ok(Json(projects))
}
