//! End-to-end assistant tests for the help and unknown terminal intents.

use crewdeck::assistant::parser::UNKNOWN_GUIDANCE;

use super::test_helpers::Fixture;

#[tokio::test]
async fn help_returns_static_guidance_for_every_role() {
    let fx = Fixture::new().await;

    for actor in [&fx.seed.admin, &fx.seed.manager, &fx.seed.member] {
        let command = fx.command(actor, "help");
        let envelope = fx.executor.execute(&command).await.expect("execute");

        assert!(envelope.message.contains("create a task"));
        assert!(envelope.task.is_none());
        assert!(envelope.tasks.is_none());
    }
}

#[tokio::test]
async fn help_needs_no_project_scope() {
    let fx = Fixture::new().await;

    let command = fx.unscoped_command(&fx.seed.member, "help");
    let envelope = fx.executor.execute(&command).await.expect("execute");

    assert!(!envelope.message.is_empty());
}

#[tokio::test]
async fn unrecognized_command_is_a_normal_response_with_guidance() {
    let fx = Fixture::new().await;

    let command = fx.unscoped_command(&fx.seed.member, "sing me a song");
    let envelope = fx.executor.execute(&command).await.expect("execute");

    assert_eq!(envelope.message, UNKNOWN_GUIDANCE);
    assert!(envelope.task.is_none());
    assert!(envelope.tasks.is_none());
}
