//! End-to-end assistant tests for the move intent.

use crewdeck::models::task::TaskStatus;
use crewdeck::AppError;

use super::test_helpers::Fixture;

#[tokio::test]
async fn assigned_member_moves_their_task_to_done() {
    let fx = Fixture::new().await;
    let seeded = fx
        .seed_task("Fix login", Some(fx.seed.member.id.as_str()))
        .await;

    let command = fx.command(&fx.seed.member, "move task 'Fix login' to done");
    let envelope = fx.executor.execute(&command).await.expect("execute");

    assert!(envelope.message.contains("moved to done"));
    let task = envelope.task.expect("task snapshot");
    assert_eq!(task.status, TaskStatus::Done);

    // No other field changed.
    let persisted = fx.task(&seeded.id).await;
    assert_eq!(persisted.status, TaskStatus::Done);
    assert_eq!(persisted.title, seeded.title);
    assert_eq!(persisted.description, seeded.description);
    assert_eq!(persisted.assignee_id, seeded.assignee_id);
    assert_eq!(persisted.created_by, seeded.created_by);
}

#[tokio::test]
async fn unassigned_member_cannot_move_the_task() {
    let fx = Fixture::new().await;
    let seeded = fx.seed_task("Fix login", None).await;

    let command = fx.command(&fx.seed.member, "move task 'Fix login' to done");
    let err = fx.executor.execute(&command).await.expect_err("must fail");

    assert!(matches!(err, AppError::Forbidden(_)));
    assert_eq!(fx.task(&seeded.id).await.status, TaskStatus::Todo);
}

#[tokio::test]
async fn move_without_a_target_status_is_bad_request() {
    let fx = Fixture::new().await;
    let seeded = fx.seed_task("Fix login", None).await;

    let command = fx.command(&fx.seed.manager, "move task 'Fix login'");
    let err = fx.executor.execute(&command).await.expect_err("must fail");

    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(fx.task(&seeded.id).await.status, TaskStatus::Todo);
}

#[tokio::test]
async fn manager_moves_any_task_with_a_status_synonym() {
    let fx = Fixture::new().await;
    let seeded = fx
        .seed_task("Fix login", Some(fx.seed.member.id.as_str()))
        .await;

    let command = fx.command(&fx.seed.manager, "mark task 'Fix login' as completed");
    let envelope = fx.executor.execute(&command).await.expect("execute");

    assert_eq!(envelope.task.expect("task").status, TaskStatus::Done);
    assert_eq!(fx.task(&seeded.id).await.status, TaskStatus::Done);
}

#[tokio::test]
async fn move_resolves_a_direct_identifier() {
    let fx = Fixture::new().await;
    let seeded = fx.seed_task("Fix login", None).await;

    let text = format!("move task {} to in progress", seeded.id);
    let command = fx.command(&fx.seed.manager, &text);
    let envelope = fx.executor.execute(&command).await.expect("execute");

    assert_eq!(
        envelope.task.expect("task").status,
        TaskStatus::InProgress
    );
}

#[tokio::test]
async fn move_of_unresolved_task_is_not_found() {
    let fx = Fixture::new().await;
    fx.seed_task("Fix login", None).await;

    let command = fx.command(&fx.seed.manager, "move task 'ship the blog' to done");
    let err = fx.executor.execute(&command).await.expect_err("must fail");

    assert!(matches!(err, AppError::NotFound(_)));
}
