//! Integration tests for the fire-and-forget notification side-channel.
//!
//! Validates that task mutations publish `task-updated` / `task-deleted`
//! events on the owning team's topic, and that a missing or idle hub
//! never affects the request outcome.

use std::sync::Arc;

use crewdeck::assistant::CommandExecutor;
use crewdeck::notify::{EventKind, NotificationHub};

use super::test_helpers::Fixture;

#[tokio::test]
async fn create_publishes_task_updated_on_the_team_topic() {
    let fx = Fixture::new().await;
    let mut rx = fx.hub.subscribe();

    let command = fx.command(&fx.seed.manager, "create a task to fix the login bug");
    fx.executor.execute(&command).await.expect("execute");

    let notification = rx.recv().await.expect("notification");
    assert_eq!(
        notification.topic,
        NotificationHub::team_topic(&fx.seed.team.id)
    );
    assert_eq!(notification.event, EventKind::TaskUpdated);
    assert_eq!(notification.payload["task"]["title"], "fix the login bug");
}

#[tokio::test]
async fn move_publishes_the_updated_snapshot() {
    let fx = Fixture::new().await;
    fx.seed_task("Fix login", None).await;
    let mut rx = fx.hub.subscribe();

    let command = fx.command(&fx.seed.manager, "move task 'Fix login' to done");
    fx.executor.execute(&command).await.expect("execute");

    let notification = rx.recv().await.expect("notification");
    assert_eq!(notification.event, EventKind::TaskUpdated);
    assert_eq!(notification.payload["task"]["status"], "done");
}

#[tokio::test]
async fn delete_publishes_task_deleted_with_the_identifier() {
    let fx = Fixture::new().await;
    let seeded = fx.seed_task("Old chore", None).await;
    let mut rx = fx.hub.subscribe();

    let command = fx.command(&fx.seed.admin, "delete task 'Old chore'");
    fx.executor.execute(&command).await.expect("execute");

    let notification = rx.recv().await.expect("notification");
    assert_eq!(notification.event, EventKind::TaskDeleted);
    assert_eq!(notification.payload["task_id"], seeded.id.as_str());
}

#[tokio::test]
async fn rejected_commands_publish_nothing() {
    let fx = Fixture::new().await;
    fx.seed_task("Fix login", None).await;
    let mut rx = fx.hub.subscribe();

    let command = fx.command(&fx.seed.member, "delete task 'Fix login'");
    fx.executor.execute(&command).await.expect_err("forbidden");

    assert!(matches!(
        rx.try_recv(),
        Err(tokio::sync::broadcast::error::TryRecvError::Empty)
    ));
}

#[tokio::test]
async fn executor_without_a_hub_still_mutates() {
    let fx = Fixture::new().await;
    let detached = CommandExecutor::new(Arc::clone(&fx.db), None);

    let command = fx.command(&fx.seed.manager, "create a task to fix the login bug");
    let envelope = detached.execute(&command).await.expect("execute");

    assert!(envelope.message.contains("created successfully"));
    assert_eq!(fx.project_tasks().await.len(), 1);
}
