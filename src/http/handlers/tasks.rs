//! Task CRUD handlers.
//!
//! The same role table as the assistant applies: create is manager/admin,
//! delete is admin, members may only touch their own tasks and only the
//! status field.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::assistant::authz;
use crate::assistant::IntentKind;
use crate::http::auth::AuthedUser;
use crate::http::AppState;
use crate::models::task::{Task, TaskStatus};
use crate::models::user::Role;
use crate::notify::{EventKind, NotificationHub};
use crate::persistence::task_repo::TaskRepo;
use crate::{AppError, Result};

use super::scoped_project;

/// Request body for task creation.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    /// Owning project.
    pub project_id: String,
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Initial status; defaults to todo.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Optional assignee; honored for managers only.
    #[serde(default)]
    pub assignee_id: Option<String>,
}

/// Request body for task updates; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Replacement assignee.
    #[serde(default)]
    pub assignee_id: Option<String>,
}

/// Create a task in a project of the caller's team.
///
/// # Errors
///
/// Returns `Forbidden` for non-managers, `NotFound` for an unknown project,
/// or `Db` on persistence failure.
pub async fn create(
    State(state): State<Arc<AppState>>,
    AuthedUser(actor): AuthedUser,
    Json(body): Json<CreateTask>,
) -> Result<(StatusCode, Json<Task>)> {
    authz::authorize_intent(IntentKind::Create, &actor)?;
    let project = scoped_project(&state, &body.project_id, &actor).await?;

    if body.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }

    let assignee_id = if actor.role == Role::Manager {
        body.assignee_id
    } else {
        None
    };

    let task = Task::new(
        project.id.clone(),
        body.title,
        body.description,
        body.status.unwrap_or(TaskStatus::Todo),
        assignee_id,
        actor.id.clone(),
    );
    let task = TaskRepo::new(Arc::clone(&state.db)).create(&task).await?;

    info!(task = %task.id, "task created via api");
    state.hub.publish(
        NotificationHub::team_topic(&project.team_id),
        EventKind::TaskUpdated,
        serde_json::json!({ "task": task }),
    );

    Ok((StatusCode::CREATED, Json(task)))
}

/// Fetch a single task visible to the caller.
///
/// # Errors
///
/// Returns `NotFound` for an unknown task or `Forbidden` outside the
/// caller's team.
pub async fn get(
    State(state): State<Arc<AppState>>,
    AuthedUser(actor): AuthedUser,
    Path(id): Path<String>,
) -> Result<Json<Task>> {
    let task = load_task(&state, &id).await?;
    scoped_project(&state, &task.project_id, &actor).await?;
    Ok(Json(task))
}

/// List tasks in a project; members see only their own or unassigned.
///
/// # Errors
///
/// Returns `NotFound` for an unknown project or `Forbidden` outside the
/// caller's team.
pub async fn list_by_project(
    State(state): State<Arc<AppState>>,
    AuthedUser(actor): AuthedUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Task>>> {
    let project = scoped_project(&state, &id, &actor).await?;
    let mut tasks = TaskRepo::new(Arc::clone(&state.db))
        .list_by_project(&project.id)
        .await?;

    if actor.role == Role::Member {
        tasks.retain(|task| {
            task.assignee_id.is_none() || task.assignee_id.as_deref() == Some(actor.id.as_str())
        });
    }

    Ok(Json(tasks))
}

/// Apply a partial update to a task.
///
/// # Errors
///
/// Returns `Forbidden` when the member ownership or field rules are
/// violated, `NotFound` for an unknown task, or `Db` on failure.
pub async fn update(
    State(state): State<Arc<AppState>>,
    AuthedUser(actor): AuthedUser,
    Path(id): Path<String>,
    Json(body): Json<UpdateTask>,
) -> Result<Json<Task>> {
    authz::authorize_intent(IntentKind::Update, &actor)?;
    let mut task = load_task(&state, &id).await?;
    let project = scoped_project(&state, &task.project_id, &actor).await?;
    authz::ensure_member_owns(&actor, &task)?;

    let body = if actor.role == Role::Member {
        UpdateTask {
            title: None,
            description: None,
            status: body.status,
            assignee_id: None,
        }
    } else {
        body
    };

    if let Some(title) = body.title {
        task.title = title;
    }
    if let Some(description) = body.description {
        task.description = Some(description);
    }
    if let Some(status) = body.status {
        task.status = status;
    }
    if let Some(assignee_id) = body.assignee_id {
        task.assignee_id = Some(assignee_id);
    }

    let task = TaskRepo::new(Arc::clone(&state.db)).save(&task).await?;

    info!(task = %task.id, "task updated via api");
    state.hub.publish(
        NotificationHub::team_topic(&project.team_id),
        EventKind::TaskUpdated,
        serde_json::json!({ "task": task }),
    );

    Ok(Json(task))
}

/// Delete a task; admin only.
///
/// # Errors
///
/// Returns `Forbidden` for non-admins, `NotFound` for an unknown task, or
/// `Db` on failure.
pub async fn remove(
    State(state): State<Arc<AppState>>,
    AuthedUser(actor): AuthedUser,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    authz::authorize_intent(IntentKind::Delete, &actor)?;
    let task = load_task(&state, &id).await?;
    let project = scoped_project(&state, &task.project_id, &actor).await?;

    TaskRepo::new(Arc::clone(&state.db)).delete(&task.id).await?;

    info!(task = %task.id, "task deleted via api");
    state.hub.publish(
        NotificationHub::team_topic(&project.team_id),
        EventKind::TaskDeleted,
        serde_json::json!({ "task_id": task.id }),
    );

    Ok(StatusCode::NO_CONTENT)
}

async fn load_task(state: &Arc<AppState>, id: &str) -> Result<Task> {
    TaskRepo::new(Arc::clone(&state.db))
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("task {id} not found")))
}
