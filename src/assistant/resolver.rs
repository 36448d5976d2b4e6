//! Fuzzy resolution of loose references against scoped candidate sets.
//!
//! Matching is case-insensitive bidirectional substring containment: a
//! candidate matches when its name contains the fragment or the fragment
//! contains the name. The first candidate in the caller-supplied order wins;
//! there is no scoring or longest-match refinement. Callers depend on this
//! exact behavior.

use crate::models::task::Task;
use crate::models::user::User;

use super::parser::TaskReference;

/// Resolve a task reference against a candidate snapshot.
///
/// Identifiers match exactly; title fragments match fuzzily. Returns the
/// first matching candidate in input order, or `None`.
#[must_use]
pub fn resolve_task<'a>(reference: &TaskReference, candidates: &'a [Task]) -> Option<&'a Task> {
    match reference {
        TaskReference::Id(id) => candidates.iter().find(|task| task.id == *id),
        TaskReference::Title(fragment) => candidates
            .iter()
            .find(|task| contains_either(&task.title, fragment)),
    }
}

/// Resolve an assignee name fragment against a candidate user set.
///
/// Matches the user's name or email (contact handle). The caller restricts
/// candidates to member-role users of their own team before calling.
#[must_use]
pub fn resolve_user<'a>(fragment: &str, candidates: &'a [User]) -> Option<&'a User> {
    candidates
        .iter()
        .find(|user| contains_either(&user.name, fragment) || contains_either(&user.email, fragment))
}

/// Bidirectional case-insensitive substring containment.
fn contains_either(candidate: &str, fragment: &str) -> bool {
    if fragment.is_empty() {
        return false;
    }
    let candidate = candidate.to_lowercase();
    let fragment = fragment.to_lowercase();
    candidate.contains(&fragment) || fragment.contains(&candidate)
}
