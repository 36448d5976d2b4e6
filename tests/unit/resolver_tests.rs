//! Unit tests for fuzzy entity resolution.
//!
//! Validates:
//! - Bidirectional case-insensitive substring containment
//! - First-match-in-input-order determinism, no ranking
//! - Direct identifier references match exactly, never fuzzily
//! - Email (contact handle) matching for users

use crewdeck::assistant::parser::TaskReference;
use crewdeck::assistant::resolver::{resolve_task, resolve_user};
use crewdeck::models::task::{Task, TaskStatus};
use crewdeck::models::user::{Role, User};

fn task(title: &str) -> Task {
    Task::new(
        "proj-1".to_owned(),
        title.to_owned(),
        None,
        TaskStatus::Todo,
        None,
        "creator".to_owned(),
    )
}

fn member(name: &str, email: &str) -> User {
    User::new(
        name.to_owned(),
        email.to_owned(),
        Role::Member,
        "team-1".to_owned(),
    )
}

// ─── Task resolution ──────────────────────────────────────────────────

#[test]
fn fragment_contained_in_title_matches() {
    let tasks = vec![task("Fix login bug"), task("Write docs")];
    let reference = TaskReference::Title("login".to_owned());

    let found = resolve_task(&reference, &tasks).expect("match");
    assert_eq!(found.title, "Fix login bug");
}

#[test]
fn title_contained_in_fragment_matches() {
    let tasks = vec![task("login")];
    let reference = TaskReference::Title("fix the login flow today".to_owned());

    assert!(resolve_task(&reference, &tasks).is_some());
}

#[test]
fn matching_is_case_insensitive() {
    let tasks = vec![task("FIX LOGIN")];
    let reference = TaskReference::Title("fix login".to_owned());

    assert!(resolve_task(&reference, &tasks).is_some());
}

#[test]
fn first_candidate_in_input_order_wins() {
    let tasks = vec![
        task("login page"),
        task("login button"),
        task("login redirect"),
    ];
    let reference = TaskReference::Title("login".to_owned());

    let found = resolve_task(&reference, &tasks).expect("match");
    assert_eq!(found.id, tasks[0].id);
}

#[test]
fn empty_candidate_set_returns_none() {
    let reference = TaskReference::Title("login".to_owned());
    assert!(resolve_task(&reference, &[]).is_none());
}

#[test]
fn no_containment_either_way_returns_none() {
    let tasks = vec![task("Write docs")];
    let reference = TaskReference::Title("login".to_owned());

    assert!(resolve_task(&reference, &tasks).is_none());
}

#[test]
fn identifier_reference_matches_exactly() {
    let tasks = vec![task("alpha"), task("beta")];
    let reference = TaskReference::Id(tasks[1].id.clone());

    let found = resolve_task(&reference, &tasks).expect("match");
    assert_eq!(found.title, "beta");
}

#[test]
fn identifier_reference_never_matches_titles() {
    let tasks = vec![task("not-a-real-id")];
    let reference = TaskReference::Id("not-a-real-id-at-all".to_owned());

    assert!(resolve_task(&reference, &tasks).is_none());
}

// ─── User resolution ──────────────────────────────────────────────────

#[test]
fn user_matches_by_name_fragment() {
    let users = vec![member("Sarah Chen", "sarah@corp.test")];

    let found = resolve_user("sarah", &users).expect("match");
    assert_eq!(found.name, "Sarah Chen");
}

#[test]
fn user_matches_by_contact_handle() {
    let users = vec![member("S. Chen", "sarah.chen@corp.test")];

    assert!(resolve_user("sarah.chen@corp.test", &users).is_some());
}

#[test]
fn user_resolution_takes_first_in_order() {
    let users = vec![
        member("Sarah Chen", "sarah.c@corp.test"),
        member("Sarah Park", "sarah.p@corp.test"),
    ];

    let found = resolve_user("sarah", &users).expect("match");
    assert_eq!(found.name, "Sarah Chen");
}

#[test]
fn empty_fragment_matches_nobody() {
    let users = vec![member("Sarah Chen", "sarah@corp.test")];
    assert!(resolve_user("", &users).is_none());
}
