//! Unit tests for the intent parser.
//!
//! Validates:
//! - Rule-table classification order, including the Update-before-Move
//!   tie-break on overlapping keywords
//! - Per-intent field extraction (references, titles, descriptions,
//!   status vocabulary, assignee fragments)
//! - Terminal variants: Help, Unknown with guidance, Error on a
//!   title-less create

use crewdeck::assistant::parser::{self, ParsedIntent, TaskReference, UNKNOWN_GUIDANCE};
use crewdeck::models::task::TaskStatus;

// ─── Classification order ─────────────────────────────────────────────

#[test]
fn update_wins_over_move_on_overlapping_keywords() {
    // Satisfies Update (update + task) and Move (set/status) keyword sets.
    // Update is earlier in the rule table and must win.
    let intent = parser::parse("update task status to done");
    let ParsedIntent::Update {
        task,
        title,
        description,
        status,
    } = intent
    else {
        panic!("expected update intent, got {intent:?}");
    };
    assert!(task.is_none(), "bare 'status' is not a task fragment");
    assert!(title.is_none());
    assert!(description.is_none());
    assert_eq!(status, Some(TaskStatus::Done));
}

#[test]
fn create_is_checked_before_everything_else() {
    // "add" + "task" also contains "to done"; Create still wins.
    let intent = parser::parse("add a task to revisit the done column");
    assert!(matches!(intent, ParsedIntent::Create { .. }));
}

#[test]
fn classification_is_case_and_whitespace_insensitive() {
    let intent = parser::parse("  LIST TASKS  ");
    assert_eq!(intent, ParsedIntent::List);
}

// ─── Create ───────────────────────────────────────────────────────────

#[test]
fn create_extracts_inferred_title() {
    let intent = parser::parse("create a task to fix the login bug");
    let ParsedIntent::Create {
        title,
        description,
        status,
        assignee_hint,
    } = intent
    else {
        panic!("expected create intent, got {intent:?}");
    };
    assert_eq!(title, "fix the login bug");
    assert!(description.is_none());
    assert!(status.is_none());
    assert!(assignee_hint.is_none());
}

#[test]
fn create_prefers_quoted_title() {
    let intent = parser::parse("create task 'Ship the release notes'");
    let ParsedIntent::Create { title, .. } = intent else {
        panic!("expected create intent, got {intent:?}");
    };
    assert_eq!(title, "ship the release notes");
}

#[test]
fn create_splits_description_label() {
    let intent = parser::parse("create task 'wire auth' description: needs the new token flow");
    let ParsedIntent::Create {
        title, description, ..
    } = intent
    else {
        panic!("expected create intent, got {intent:?}");
    };
    assert_eq!(title, "wire auth");
    assert_eq!(description.as_deref(), Some("needs the new token flow"));
}

#[test]
fn create_captures_assign_clause_and_strips_it_from_title() {
    let intent = parser::parse("create a task to write docs and assign it to sarah");
    let ParsedIntent::Create {
        title,
        assignee_hint,
        ..
    } = intent
    else {
        panic!("expected create intent, got {intent:?}");
    };
    assert_eq!(title, "write docs");
    assert_eq!(assignee_hint.as_deref(), Some("sarah"));
}

#[test]
fn create_picks_up_initial_status() {
    let intent = parser::parse("create task 'spike caching' in progress");
    let ParsedIntent::Create { status, .. } = intent else {
        panic!("expected create intent, got {intent:?}");
    };
    assert_eq!(status, Some(TaskStatus::InProgress));
}

#[test]
fn create_without_title_is_a_parse_error() {
    let intent = parser::parse("create task");
    let ParsedIntent::Error { message } = intent else {
        panic!("expected error intent, got {intent:?}");
    };
    assert!(message.contains("title"));
}

// ─── Update ───────────────────────────────────────────────────────────

#[test]
fn update_extracts_quoted_reference_and_title_label() {
    let intent = parser::parse("update task 'fix login' title: fix the signin flow");
    let ParsedIntent::Update { task, title, .. } = intent else {
        panic!("expected update intent, got {intent:?}");
    };
    assert_eq!(task, Some(TaskReference::Title("fix login".to_owned())));
    assert_eq!(title.as_deref(), Some("fix the signin flow"));
}

#[test]
fn update_extracts_description_label() {
    let intent = parser::parse("update task 'fix login' description: rework the token check");
    let ParsedIntent::Update { description, .. } = intent else {
        panic!("expected update intent, got {intent:?}");
    };
    assert_eq!(description.as_deref(), Some("rework the token check"));
}

#[test]
fn update_leaves_absent_fields_unset() {
    let intent = parser::parse("update task 'fix login'");
    let ParsedIntent::Update {
        task,
        title,
        description,
        status,
    } = intent
    else {
        panic!("expected update intent, got {intent:?}");
    };
    assert!(task.is_some());
    assert!(title.is_none());
    assert!(description.is_none());
    assert!(status.is_none());
}

// ─── Move ─────────────────────────────────────────────────────────────

#[test]
fn move_extracts_reference_and_target_status() {
    let intent = parser::parse("move task 'Fix login' to done");
    let ParsedIntent::Move { task, status } = intent else {
        panic!("expected move intent, got {intent:?}");
    };
    assert_eq!(task, Some(TaskReference::Title("fix login".to_owned())));
    assert_eq!(status, Some(TaskStatus::Done));
}

#[test]
fn move_without_status_leaves_it_unset() {
    let intent = parser::parse("move task 'fix login'");
    let ParsedIntent::Move { status, .. } = intent else {
        panic!("expected move intent, got {intent:?}");
    };
    assert!(status.is_none());
}

#[test]
fn mark_as_completed_normalizes_to_done() {
    let intent = parser::parse("mark task 'fix login' as completed");
    let ParsedIntent::Move { status, .. } = intent else {
        panic!("expected move intent, got {intent:?}");
    };
    assert_eq!(status, Some(TaskStatus::Done));
}

#[test]
fn in_progress_synonym_normalizes() {
    let intent = parser::parse("move task 'fix login' to in progress");
    let ParsedIntent::Move { status, .. } = intent else {
        panic!("expected move intent, got {intent:?}");
    };
    assert_eq!(status, Some(TaskStatus::InProgress));
}

#[test]
fn unquoted_task_fragment_stops_before_trailing_clause() {
    let intent = parser::parse("move task fix login to done");
    let ParsedIntent::Move { task, .. } = intent else {
        panic!("expected move intent, got {intent:?}");
    };
    assert_eq!(task, Some(TaskReference::Title("fix login".to_owned())));
}

// ─── Assign / Delete ──────────────────────────────────────────────────

#[test]
fn assign_extracts_reference_and_assignee_fragment() {
    let intent = parser::parse("assign task 'Fix login' to Sarah");
    let ParsedIntent::Assign {
        task,
        assignee_hint,
    } = intent
    else {
        panic!("expected assign intent, got {intent:?}");
    };
    assert_eq!(task, Some(TaskReference::Title("fix login".to_owned())));
    assert_eq!(assignee_hint.as_deref(), Some("sarah"));
}

#[test]
fn assign_without_target_leaves_assignee_unset() {
    let intent = parser::parse("assign task 'fix login'");
    let ParsedIntent::Assign { assignee_hint, .. } = intent else {
        panic!("expected assign intent, got {intent:?}");
    };
    assert!(assignee_hint.is_none());
}

#[test]
fn delete_resolves_direct_identifier() {
    let intent = parser::parse("delete task 123e4567-e89b-42d3-a456-426614174000");
    let ParsedIntent::Delete { task } = intent else {
        panic!("expected delete intent, got {intent:?}");
    };
    assert_eq!(
        task,
        Some(TaskReference::Id(
            "123e4567-e89b-42d3-a456-426614174000".to_owned()
        ))
    );
}

// ─── List / Help / Unknown ────────────────────────────────────────────

#[test]
fn list_and_show_both_classify_as_list() {
    assert_eq!(parser::parse("list tasks"), ParsedIntent::List);
    assert_eq!(parser::parse("show the tasks"), ParsedIntent::List);
}

#[test]
fn help_short_circuits_with_no_extraction() {
    assert_eq!(parser::parse("help"), ParsedIntent::Help);
}

#[test]
fn unmatched_text_becomes_unknown_with_guidance() {
    let intent = parser::parse("sing me a song");
    let ParsedIntent::Unknown { message } = intent else {
        panic!("expected unknown intent, got {intent:?}");
    };
    assert_eq!(message, UNKNOWN_GUIDANCE);
}

#[test]
fn empty_input_becomes_unknown() {
    let intent = parser::parse("   ");
    assert!(matches!(intent, ParsedIntent::Unknown { .. }));
}
