//! Intent execution: persistence orchestration and notification triggers.

use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::{info, info_span, Instrument};

use crate::models::project::Project;
use crate::models::task::{Task, TaskStatus};
use crate::models::user::Role;
use crate::notify::{EventKind, NotificationHub};
use crate::persistence::project_repo::ProjectRepo;
use crate::persistence::task_repo::TaskRepo;
use crate::persistence::user_repo::UserRepo;
use crate::{AppError, Result};

use super::parser::{self, IntentKind, ParsedIntent, TaskReference};
use super::{authz, resolver, Command, ResultEnvelope};

/// Static guidance returned for the help intent.
const HELP_TEXT: &str = "Here's what I can do:\n\
     • create a task to <title> — add a task (managers)\n\
     • update task '<title>' with status, title: or description: — edit a task\n\
     • move task '<title>' to todo / in-progress / done\n\
     • assign task '<title>' to <name> — hand it to a team member (managers)\n\
     • delete task '<title>' — remove it (admins)\n\
     • list tasks — show the tasks in the current project";

/// Executes parsed intents against persistence and the notification hub.
///
/// One instance per process; all state lives in the repositories and the
/// optional hub. Each `execute` call is a single request-response pass with
/// no retained state.
#[derive(Clone)]
pub struct CommandExecutor {
    tasks: TaskRepo,
    users: UserRepo,
    projects: ProjectRepo,
    hub: Option<NotificationHub>,
}

impl CommandExecutor {
    /// Create an executor over the shared pool, with an optional hub.
    #[must_use]
    pub fn new(db: Arc<SqlitePool>, hub: Option<NotificationHub>) -> Self {
        Self {
            tasks: TaskRepo::new(Arc::clone(&db)),
            users: UserRepo::new(Arc::clone(&db)),
            projects: ProjectRepo::new(db),
            hub,
        }
    }

    /// Parse and execute a command, producing the result envelope.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for incomplete commands,
    /// `AppError::NotFound` for unresolved references,
    /// `AppError::Forbidden` for gate rejections, and `AppError::Db` when
    /// persistence fails.
    pub async fn execute(&self, command: &Command) -> Result<ResultEnvelope> {
        let intent = parser::parse(&command.text);
        let span = info_span!(
            "assistant_command",
            actor = %command.actor.id,
            role = command.actor.role.as_str(),
        );
        self.dispatch(command, intent).instrument(span).await
    }

    async fn dispatch(&self, command: &Command, intent: ParsedIntent) -> Result<ResultEnvelope> {
        match intent {
            ParsedIntent::Create {
                title,
                description,
                status,
                assignee_hint,
            } => {
                self.execute_create(command, title, description, status, assignee_hint)
                    .await
            }
            ParsedIntent::Update {
                task,
                title,
                description,
                status,
            } => {
                self.execute_update(command, task, title, description, status)
                    .await
            }
            ParsedIntent::Move { task, status } => self.execute_move(command, task, status).await,
            ParsedIntent::Assign {
                task,
                assignee_hint,
            } => self.execute_assign(command, task, assignee_hint).await,
            ParsedIntent::Delete { task } => self.execute_delete(command, task).await,
            ParsedIntent::List => self.execute_list(command).await,
            ParsedIntent::Help => Ok(ResultEnvelope::message_only(HELP_TEXT)),
            ParsedIntent::Unknown { message } => Ok(ResultEnvelope::message_only(message)),
            ParsedIntent::Error { message } => Err(AppError::BadRequest(message)),
        }
    }

    async fn execute_create(
        &self,
        command: &Command,
        title: String,
        description: Option<String>,
        status: Option<TaskStatus>,
        assignee_hint: Option<String>,
    ) -> Result<ResultEnvelope> {
        authz::authorize_intent(IntentKind::Create, &command.actor)?;
        let project = self.load_scope(command).await?;

        // The assignment sub-field is honored for managers only.
        let assignee_id = match assignee_hint {
            Some(hint) if authz::may_assign_on_create(&command.actor) => {
                Some(self.resolve_assignee(&command.actor.team_id, &hint).await?)
            }
            _ => None,
        };

        let task = Task::new(
            project.id.clone(),
            title,
            description,
            status.unwrap_or(TaskStatus::Todo),
            assignee_id,
            command.actor.id.clone(),
        );
        let task = self.tasks.create(&task).await?;

        info!(task = %task.id, project = %project.id, "task created");
        self.notify_task(&project.team_id, EventKind::TaskUpdated, &task);

        let message = format!("Task \"{}\" created successfully!", task.title);
        Ok(ResultEnvelope::with_task(message, task))
    }

    async fn execute_update(
        &self,
        command: &Command,
        reference: Option<TaskReference>,
        title: Option<String>,
        description: Option<String>,
        status: Option<TaskStatus>,
    ) -> Result<ResultEnvelope> {
        authz::authorize_intent(IntentKind::Update, &command.actor)?;
        let project = self.load_scope(command).await?;
        let mut task = self.resolve_scoped_task(&project, reference).await?;
        authz::ensure_member_owns(&command.actor, &task)?;

        // Members mutate only the status field; other captures are dropped.
        let (title, description) = if command.actor.role == Role::Member {
            (None, None)
        } else {
            (title, description)
        };

        if title.is_none() && description.is_none() && status.is_none() {
            return Err(AppError::BadRequest(
                "nothing to update: provide a status, title: or description:".into(),
            ));
        }

        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = description {
            task.description = Some(description);
        }
        if let Some(status) = status {
            task.status = status;
        }

        let task = self.tasks.save(&task).await?;

        info!(task = %task.id, "task updated");
        self.notify_task(&project.team_id, EventKind::TaskUpdated, &task);

        let message = format!("Task \"{}\" updated successfully!", task.title);
        Ok(ResultEnvelope::with_task(message, task))
    }

    async fn execute_move(
        &self,
        command: &Command,
        reference: Option<TaskReference>,
        status: Option<TaskStatus>,
    ) -> Result<ResultEnvelope> {
        authz::authorize_intent(IntentKind::Move, &command.actor)?;

        let Some(status) = status else {
            return Err(AppError::BadRequest(
                "a target status is required: todo, in-progress, or done".into(),
            ));
        };

        let project = self.load_scope(command).await?;
        let mut task = self.resolve_scoped_task(&project, reference).await?;
        authz::ensure_member_owns(&command.actor, &task)?;

        task.status = status;
        let task = self.tasks.save(&task).await?;

        info!(task = %task.id, status = status.as_str(), "task moved");
        self.notify_task(&project.team_id, EventKind::TaskUpdated, &task);

        let message = format!(
            "Task \"{}\" moved to {} successfully!",
            task.title,
            status.as_str(),
        );
        Ok(ResultEnvelope::with_task(message, task))
    }

    async fn execute_assign(
        &self,
        command: &Command,
        reference: Option<TaskReference>,
        assignee_hint: Option<String>,
    ) -> Result<ResultEnvelope> {
        authz::authorize_intent(IntentKind::Assign, &command.actor)?;

        let Some(hint) = assignee_hint else {
            return Err(AppError::BadRequest(
                "an assignee is required: assign task '...' to <name>".into(),
            ));
        };

        let project = self.load_scope(command).await?;
        let mut task = self.resolve_scoped_task(&project, reference).await?;

        let assignee_id = self.resolve_assignee(&command.actor.team_id, &hint).await?;
        task.assignee_id = Some(assignee_id.clone());
        let task = self.tasks.save(&task).await?;

        info!(task = %task.id, assignee = %assignee_id, "task assigned");
        self.notify_task(&project.team_id, EventKind::TaskUpdated, &task);

        let message = format!("Task \"{}\" assigned to {} successfully!", task.title, hint);
        Ok(ResultEnvelope::with_task(message, task))
    }

    async fn execute_delete(
        &self,
        command: &Command,
        reference: Option<TaskReference>,
    ) -> Result<ResultEnvelope> {
        authz::authorize_intent(IntentKind::Delete, &command.actor)?;
        let project = self.load_scope(command).await?;
        let task = self.resolve_scoped_task(&project, reference).await?;

        self.tasks.delete(&task.id).await?;

        info!(task = %task.id, "task deleted");
        if let Some(hub) = &self.hub {
            hub.publish(
                NotificationHub::team_topic(&project.team_id),
                EventKind::TaskDeleted,
                serde_json::json!({ "task_id": task.id }),
            );
        }

        let message = format!("Task \"{}\" deleted successfully!", task.title);
        Ok(ResultEnvelope::message_only(message))
    }

    async fn execute_list(&self, command: &Command) -> Result<ResultEnvelope> {
        authz::authorize_intent(IntentKind::List, &command.actor)?;
        let project = self.load_scope(command).await?;
        let mut tasks = self.tasks.list_by_project(&project.id).await?;

        // Members see only their own or unassigned tasks.
        if command.actor.role == Role::Member {
            tasks.retain(|task| {
                task.assignee_id.is_none()
                    || task.assignee_id.as_deref() == Some(command.actor.id.as_str())
            });
        }

        let message = format!("Found {} task(s).", tasks.len());
        Ok(ResultEnvelope::with_tasks(message, tasks))
    }

    /// Load and authorize the project scope for a task-touching intent.
    async fn load_scope(&self, command: &Command) -> Result<Project> {
        let Some(project_id) = command.project_id.as_deref() else {
            return Err(AppError::BadRequest(
                "this command needs a project scope".into(),
            ));
        };

        let project = self
            .projects
            .get_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("project {project_id} not found")))?;

        if project.team_id != command.actor.team_id {
            return Err(AppError::Forbidden(
                "project belongs to another team".into(),
            ));
        }

        Ok(project)
    }

    /// Read the point-in-time task snapshot and resolve a reference in it.
    async fn resolve_scoped_task(
        &self,
        project: &Project,
        reference: Option<TaskReference>,
    ) -> Result<Task> {
        let Some(reference) = reference else {
            return Err(AppError::BadRequest(
                "which task? name it in quotes or by id".into(),
            ));
        };

        let snapshot = self.tasks.list_by_project(&project.id).await?;
        resolver::resolve_task(&reference, &snapshot)
            .cloned()
            .ok_or_else(|| AppError::NotFound("no matching task in this project".into()))
    }

    /// Resolve an assignee fragment against the team's member pool.
    ///
    /// Assignees are always drawn from member-role users; managers and
    /// admins are never assignable.
    async fn resolve_assignee(&self, team_id: &str, hint: &str) -> Result<String> {
        let members = self
            .users
            .list_by_team_and_role(team_id, Role::Member)
            .await?;
        resolver::resolve_user(hint, &members)
            .map(|user| user.id.clone())
            .ok_or_else(|| AppError::NotFound(format!("no team member matching \"{hint}\"")))
    }

    /// Fire-and-forget task event; absent hub is a silent no-op.
    fn notify_task(&self, team_id: &str, event: EventKind, task: &Task) {
        if let Some(hub) = &self.hub {
            hub.publish(
                NotificationHub::team_topic(team_id),
                event,
                serde_json::json!({ "task": task }),
            );
        }
    }
}
