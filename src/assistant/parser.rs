//! Free-text command parsing into structured intents.
//!
//! Classification walks an ordered rule table; the first intent whose action
//! and object keyword sets both match wins. The order is load-bearing:
//! "update task status to done" satisfies both Update and Move and must
//! classify as Update. Field extraction is regex capture over the lower-cased
//! text; a pattern that does not match leaves the field unset.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::task::TaskStatus;

/// Guidance returned when no rule matches the command.
pub const UNKNOWN_GUIDANCE: &str = "I didn't understand that. Try \"create a task to ...\", \
     \"move task '...' to done\", \"assign task '...' to ...\", or \"list tasks\". \
     Say \"help\" to see everything I can do.";

/// A loose reference to a task, resolved later against a candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskReference {
    /// UUID-shaped token taken as a direct identifier.
    Id(String),
    /// Free-text fragment matched against task titles.
    Title(String),
}

/// Structured intent parsed from a raw command.
///
/// Exactly one variant is produced per command; each carries only the fields
/// meaningful for it, with unmatched fields left as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedIntent {
    /// Create a new task.
    Create {
        /// Title of the new task.
        title: String,
        /// Longer description, when a `description:` label was present.
        description: Option<String>,
        /// Requested initial status.
        status: Option<TaskStatus>,
        /// Assignee name fragment, when an assign clause was present.
        assignee_hint: Option<String>,
    },
    /// Mutate fields on an existing task.
    Update {
        /// Which task to mutate.
        task: Option<TaskReference>,
        /// Replacement title, when a `title:` label was present.
        title: Option<String>,
        /// Replacement description.
        description: Option<String>,
        /// Replacement status.
        status: Option<TaskStatus>,
    },
    /// Change only the status of an existing task.
    Move {
        /// Which task to move.
        task: Option<TaskReference>,
        /// Target status; absence is rejected at execution time.
        status: Option<TaskStatus>,
    },
    /// Hand an existing task to a team member.
    Assign {
        /// Which task to assign.
        task: Option<TaskReference>,
        /// Assignee name fragment.
        assignee_hint: Option<String>,
    },
    /// Remove an existing task.
    Delete {
        /// Which task to delete.
        task: Option<TaskReference>,
    },
    /// List the scoped tasks.
    List,
    /// Show usage guidance.
    Help,
    /// No rule matched; carries canned guidance for the user.
    Unknown {
        /// Guidance text returned verbatim.
        message: String,
    },
    /// The command matched an intent but cannot be parsed as written.
    Error {
        /// Human-readable explanation of what was missing.
        message: String,
    },
}

/// Discriminant for a parsed intent, used by the authorization gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    /// Create a task.
    Create,
    /// Update task fields.
    Update,
    /// Change a task's status.
    Move,
    /// Assign a task to a member.
    Assign,
    /// Delete a task.
    Delete,
    /// List scoped tasks.
    List,
    /// Usage guidance.
    Help,
    /// No rule matched.
    Unknown,
}

/// One classification rule: an intent and its two keyword sets.
struct IntentRule {
    kind: IntentKind,
    actions: &'static [&'static str],
    objects: &'static [&'static str],
}

/// Ordered rule table. Earlier entries win ties; do not reorder.
const RULES: &[IntentRule] = &[
    IntentRule {
        kind: IntentKind::Create,
        actions: &["create", "add", "new", "make"],
        objects: &["task"],
    },
    IntentRule {
        kind: IntentKind::Update,
        actions: &["update", "change", "edit", "modify"],
        objects: &["task"],
    },
    IntentRule {
        kind: IntentKind::Move,
        actions: &["move", "mark", "set"],
        objects: &["task", "status"],
    },
    IntentRule {
        kind: IntentKind::Assign,
        actions: &["assign", "give", "hand"],
        objects: &["task"],
    },
    IntentRule {
        kind: IntentKind::Delete,
        actions: &["delete", "remove", "drop"],
        objects: &["task"],
    },
    IntentRule {
        kind: IntentKind::List,
        actions: &["list", "show", "display", "view"],
        objects: &["task", "tasks"],
    },
    IntentRule {
        kind: IntentKind::Help,
        actions: &["help", "usage"],
        objects: &[],
    },
];

/// Status synonyms, scanned in order; first hit wins.
const STATUS_SYNONYMS: &[(&str, TaskStatus)] = &[
    ("in-progress", TaskStatus::InProgress),
    ("in progress", TaskStatus::InProgress),
    ("completed", TaskStatus::Done),
    ("done", TaskStatus::Done),
    ("todo", TaskStatus::Todo),
    ("to-do", TaskStatus::Todo),
];

static ID_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\b").ok()
});

static QUOTED_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"['"]([^'"]+)['"]"#).ok());

static DESCRIPTION_LABEL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?:description|desc)\s*:\s*").ok());

static TITLE_LABEL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"title\s*:\s*(.+)$").ok());

static CREATE_TITLE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"task\s*(?:to\s+|called\s+|named\s+|:\s*)(.+)$").ok());

static TASK_TAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"task\s+(.+)$").ok());

static ASSIGN_CLAUSE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\bassign(?:ed)?\s+(?:it\s+)?to\s+(.+)$").ok());

/// Parse a raw command into a structured intent.
///
/// Pure function of the text: lower-cases, trims, classifies against the
/// ordered rule table, then extracts the fields relevant to the winning
/// intent. Never fails; unparseable input becomes `Unknown` and a title-less
/// create becomes `Error`.
#[must_use]
pub fn parse(command_text: &str) -> ParsedIntent {
    let text = command_text.trim().to_lowercase();
    if text.is_empty() {
        return ParsedIntent::Unknown {
            message: UNKNOWN_GUIDANCE.to_string(),
        };
    }

    match classify(&text) {
        IntentKind::Create => parse_create(&text),
        IntentKind::Update => parse_update(&text),
        IntentKind::Move => parse_move(&text),
        IntentKind::Assign => parse_assign(&text),
        IntentKind::Delete => parse_delete(&text),
        IntentKind::List => ParsedIntent::List,
        IntentKind::Help => ParsedIntent::Help,
        IntentKind::Unknown => ParsedIntent::Unknown {
            message: UNKNOWN_GUIDANCE.to_string(),
        },
    }
}

/// Walk the rule table in order; first rule with a hit in both sets wins.
fn classify(text: &str) -> IntentKind {
    for rule in RULES {
        let action_hit = rule.actions.iter().any(|kw| text.contains(kw));
        let object_hit = rule.objects.is_empty() || rule.objects.iter().any(|kw| text.contains(kw));
        if action_hit && object_hit {
            return rule.kind;
        }
    }
    IntentKind::Unknown
}

fn parse_create(text: &str) -> ParsedIntent {
    let (head, description) = split_description(text);

    let Some(title) = extract_create_title(&head) else {
        return ParsedIntent::Error {
            message: "I couldn't find a title for the new task. Quote it, e.g. \
                      create task 'write the changelog'."
                .to_string(),
        };
    };

    ParsedIntent::Create {
        title,
        description,
        status: extract_status(&head),
        assignee_hint: extract_assign_clause(&head),
    }
}

fn parse_update(text: &str) -> ParsedIntent {
    let (head, description) = split_description(text);

    ParsedIntent::Update {
        task: extract_reference(&head),
        title: extract_title_label(&head),
        description,
        status: extract_status(&head),
    }
}

fn parse_move(text: &str) -> ParsedIntent {
    let (head, _) = split_description(text);

    ParsedIntent::Move {
        task: extract_reference(&head),
        status: extract_status(&head),
    }
}

fn parse_assign(text: &str) -> ParsedIntent {
    let (head, _) = split_description(text);

    ParsedIntent::Assign {
        task: extract_reference(&head),
        assignee_hint: extract_assignee(&head),
    }
}

fn parse_delete(text: &str) -> ParsedIntent {
    let (head, _) = split_description(text);

    ParsedIntent::Delete {
        task: extract_reference(&head),
    }
}

/// Split off a trailing `description:` clause, returning the remaining head
/// and the description text.
fn split_description(text: &str) -> (String, Option<String>) {
    let Some(re) = DESCRIPTION_LABEL_RE.as_ref() else {
        return (text.to_string(), None);
    };
    match re.find(text) {
        Some(m) => {
            let description = text[m.end()..].trim();
            let head = text[..m.start()].trim_end();
            let description = (!description.is_empty()).then(|| description.to_string());
            (head.to_string(), description)
        }
        None => (text.to_string(), None),
    }
}

/// Scan for the first status synonym contained in the text.
fn extract_status(text: &str) -> Option<TaskStatus> {
    STATUS_SYNONYMS
        .iter()
        .find(|(kw, _)| text.contains(kw))
        .map(|(_, status)| *status)
}

/// Extract a task reference: direct identifier, quoted title, or the
/// remainder after "task" with trailing clauses stripped.
fn extract_reference(head: &str) -> Option<TaskReference> {
    if let Some(m) = ID_RE.as_ref().and_then(|re| re.find(head)) {
        return Some(TaskReference::Id(m.as_str().to_string()));
    }

    if let Some(caps) = QUOTED_RE.as_ref().and_then(|re| re.captures(head)) {
        let title = caps.get(1)?.as_str().trim();
        if !title.is_empty() {
            return Some(TaskReference::Title(title.to_string()));
        }
    }

    let caps = TASK_TAIL_RE.as_ref().and_then(|re| re.captures(head))?;
    let mut tail = caps.get(1)?.as_str();
    for marker in [" to ", " as ", " status", " title:"] {
        if let Some(idx) = tail.find(marker) {
            tail = &tail[..idx];
        }
    }
    let tail = tail
        .trim_start_matches("called ")
        .trim_start_matches("named ")
        .trim();
    // "update task status to done" names no task; the word is not a fragment.
    let tail = tail
        .strip_prefix("status")
        .unwrap_or(tail)
        .trim()
        .trim_matches(|c: char| c == '.' || c == '!' || c == '?');
    (!tail.is_empty()).then(|| TaskReference::Title(tail.to_string()))
}

/// Extract the new-task title: quoted wins, otherwise the remainder after
/// "task to/called/named/:" with any assign clause stripped.
fn extract_create_title(head: &str) -> Option<String> {
    if let Some(caps) = QUOTED_RE.as_ref().and_then(|re| re.captures(head)) {
        let title = caps.get(1)?.as_str().trim();
        if !title.is_empty() {
            return Some(title.to_string());
        }
    }

    let caps = CREATE_TITLE_RE.as_ref().and_then(|re| re.captures(head))?;
    let mut title = caps.get(1)?.as_str();
    for marker in [" and assign", " assign"] {
        if let Some(idx) = title.find(marker) {
            title = &title[..idx];
        }
    }
    let title = title
        .trim()
        .trim_matches(|c: char| c == '.' || c == '!' || c == '?');
    (!title.is_empty()).then(|| title.to_string())
}

/// Extract a replacement title following a `title:` label.
fn extract_title_label(head: &str) -> Option<String> {
    let caps = TITLE_LABEL_RE.as_ref().and_then(|re| re.captures(head))?;
    let title = caps.get(1)?.as_str().trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Extract an explicit "assign to <name>" clause (create commands).
fn extract_assign_clause(head: &str) -> Option<String> {
    let caps = ASSIGN_CLAUSE_RE.as_ref().and_then(|re| re.captures(head))?;
    let name = caps.get(1)?.as_str().trim().trim_matches('\'').trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Extract the assignee fragment after the final "to" (assign commands).
fn extract_assignee(head: &str) -> Option<String> {
    let idx = head.rfind(" to ")?;
    let name = head[idx + 4..]
        .trim()
        .trim_matches(|c: char| c == '\'' || c == '"')
        .trim();
    (!name.is_empty()).then(|| name.to_string())
}
