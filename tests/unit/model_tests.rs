//! Unit tests for domain model construction and wire forms.

use crewdeck::models::message::ChatMessage;
use crewdeck::models::task::{Task, TaskStatus};
use crewdeck::models::user::{Role, User};

// ─── Enum string forms ────────────────────────────────────────────────

#[test]
fn role_round_trips_through_its_string_form() {
    for role in [Role::Admin, Role::Manager, Role::Member] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert!(Role::parse("superuser").is_none());
}

#[test]
fn task_status_round_trips_through_its_string_form() {
    for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
        assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
    }
    assert!(TaskStatus::parse("in progress").is_none());
}

#[test]
fn task_status_serializes_kebab_case() {
    let value = serde_json::to_value(TaskStatus::InProgress).expect("serialize");
    assert_eq!(value, serde_json::json!("in-progress"));
}

#[test]
fn role_serializes_snake_case() {
    let value = serde_json::to_value(Role::Manager).expect("serialize");
    assert_eq!(value, serde_json::json!("manager"));
}

// ─── Constructors ─────────────────────────────────────────────────────

#[test]
fn new_task_gets_identifier_and_matching_timestamps() {
    let task = Task::new(
        "proj-1".to_owned(),
        "Fix login".to_owned(),
        Some("details".to_owned()),
        TaskStatus::Todo,
        None,
        "creator".to_owned(),
    );

    assert!(!task.id.is_empty());
    assert_eq!(task.created_at, task.updated_at);
    assert_eq!(task.status, TaskStatus::Todo);
    assert!(task.assignee_id.is_none());
}

#[test]
fn new_entities_get_distinct_identifiers() {
    let a = User::new(
        "A".to_owned(),
        "a@corp.test".to_owned(),
        Role::Member,
        "team-1".to_owned(),
    );
    let b = User::new(
        "B".to_owned(),
        "b@corp.test".to_owned(),
        Role::Member,
        "team-1".to_owned(),
    );
    assert_ne!(a.id, b.id);
}

#[test]
fn chat_message_serializes_snake_case_fields() {
    let message = ChatMessage::new(
        "team-1".to_owned(),
        "user-1".to_owned(),
        "hello".to_owned(),
    );
    let value = serde_json::to_value(&message).expect("serialize");
    assert_eq!(value["team_id"], "team-1");
    assert_eq!(value["sender_id"], "user-1");
    assert_eq!(value["body"], "hello");
}
