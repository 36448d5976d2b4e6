//! Request handlers, one module per resource.

pub mod assistant;
pub mod events;
pub mod messages;
pub mod projects;
pub mod tasks;
pub mod teams;
pub mod users;

use std::sync::Arc;

use crate::models::project::Project;
use crate::models::user::User;
use crate::persistence::project_repo::ProjectRepo;
use crate::{AppError, Result};

use super::AppState;

/// Load a project and verify it belongs to the caller's team.
///
/// # Errors
///
/// Returns `AppError::NotFound` when the project does not exist and
/// `AppError::Forbidden` when it belongs to another team.
pub(crate) async fn scoped_project(
    state: &Arc<AppState>,
    project_id: &str,
    actor: &User,
) -> Result<Project> {
    let project = ProjectRepo::new(Arc::clone(&state.db))
        .get_by_id(project_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("project {project_id} not found")))?;

    if project.team_id != actor.team_id {
        return Err(AppError::Forbidden("project belongs to another team".into()));
    }

    Ok(project)
}

/// Verify the caller is operating on their own team.
///
/// # Errors
///
/// Returns `AppError::Forbidden` when the team is not the caller's.
pub(crate) fn ensure_own_team(actor: &User, team_id: &str) -> Result<()> {
    if actor.team_id == team_id {
        Ok(())
    } else {
        Err(AppError::Forbidden("not a member of this team".into()))
    }
}
