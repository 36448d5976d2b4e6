//! Role-based authorization gate for assistant intents.
//!
//! All role rules live in one table; executors never re-derive permissions
//! per operation. A violation is always a `Forbidden` failure, never a
//! partial success.

use crate::models::task::Task;
use crate::models::user::{Role, User};
use crate::{AppError, Result};

use super::parser::IntentKind;

/// Roles permitted per intent. List order mirrors the intent priority order.
const INTENT_ROLES: &[(IntentKind, &[Role])] = &[
    (IntentKind::Create, &[Role::Manager, Role::Admin]),
    (
        IntentKind::Update,
        &[Role::Manager, Role::Admin, Role::Member],
    ),
    (IntentKind::Move, &[Role::Manager, Role::Admin, Role::Member]),
    (IntentKind::Assign, &[Role::Manager]),
    (IntentKind::Delete, &[Role::Admin]),
    (IntentKind::List, &[Role::Manager, Role::Admin, Role::Member]),
];

/// Check the role table for an intent.
///
/// Intents absent from the table (help, unknown) are open to any
/// authenticated caller.
///
/// # Errors
///
/// Returns `AppError::Forbidden` with a role-specific message when the
/// caller's role is not in the intent's allowed set.
pub fn authorize_intent(kind: IntentKind, actor: &User) -> Result<()> {
    let Some((_, allowed)) = INTENT_ROLES.iter().find(|(k, _)| *k == kind) else {
        return Ok(());
    };

    if allowed.contains(&actor.role) {
        return Ok(());
    }

    Err(AppError::Forbidden(format!(
        "{role}s are not allowed to {verb} tasks",
        role = actor.role.as_str(),
        verb = intent_verb(kind),
    )))
}

/// Enforce the member ownership constraint for update/move.
///
/// Members may only act on tasks currently assigned to them; managers and
/// admins pass unconditionally.
///
/// # Errors
///
/// Returns `AppError::Forbidden` when a member targets a task assigned to
/// someone else or to nobody.
pub fn ensure_member_owns(actor: &User, task: &Task) -> Result<()> {
    if actor.role != Role::Member {
        return Ok(());
    }

    if task.assignee_id.as_deref() == Some(actor.id.as_str()) {
        return Ok(());
    }

    Err(AppError::Forbidden(
        "members may only act on tasks assigned to them".into(),
    ))
}

/// Whether the caller's role honors an assignment sub-field on create.
#[must_use]
pub fn may_assign_on_create(actor: &User) -> bool {
    actor.role == Role::Manager
}

fn intent_verb(kind: IntentKind) -> &'static str {
    match kind {
        IntentKind::Create => "create",
        IntentKind::Update => "update",
        IntentKind::Move => "move",
        IntentKind::Assign => "assign",
        IntentKind::Delete => "delete",
        IntentKind::List => "list",
        IntentKind::Help | IntentKind::Unknown => "use",
    }
}
