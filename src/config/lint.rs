//! Accumulating audit of a state configuration.
//!
//! Construction stops at the first hard error. `lint` instead uses
//! Stillwater's `Validation` to report every issue in one pass, including
//! the ones construction tolerates (several initial flags, restrictions that
//! name undeclared states).

use crate::config::entry::StateEntry;
use crate::config::MIN_STATES;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single finding reported by [`lint`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigIssue {
    #[error("At least 2 states required (found {found})")]
    TooFewStates { found: usize },

    #[error("State entry at index {index} has an empty id")]
    EmptyStateId { index: usize },

    #[error("State already defined: {id}")]
    DuplicateState { id: String },

    #[error("Several states are marked initial: {}", .ids.join(", "))]
    MultipleInitial { ids: Vec<String> },

    #[error("State '{state}' allows transitions to undeclared state '{target}'")]
    UnknownTarget { state: String, target: String },

    #[error("State '{state}' allows transitions from undeclared state '{origin}'")]
    UnknownOrigin { state: String, origin: String },
}

type LintResult = Validation<(), NonEmptyVec<ConfigIssue>>;

fn check(ok: bool, issue: impl FnOnce() -> ConfigIssue) -> LintResult {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(issue())
    }
}

/// Audit `entries`, accumulating ALL issues.
///
/// Returns `Validation::Success(())` if the configuration is clean.
///
/// # Example
///
/// ```rust
/// use immutable_state_machine::config::{lint, StateEntry, StateSpec};
///
/// let entries: Vec<StateEntry> = vec![
///     StateSpec::new("start").to(["nowhere"]).into(),
///     "start".into(),
/// ];
///
/// assert!(lint(&entries).is_failure());
/// ```
pub fn lint(entries: &[StateEntry]) -> LintResult {
    let mut checks: Vec<LintResult> = Vec::new();

    checks.push(check(entries.len() >= MIN_STATES, || ConfigIssue::TooFewStates {
        found: entries.len(),
    }));

    let declared: HashSet<&str> = entries.iter().map(StateEntry::id).collect();
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let id = entry.id();

        checks.push(check(!id.is_empty(), || ConfigIssue::EmptyStateId { index }));
        checks.push(check(seen.insert(id), || ConfigIssue::DuplicateState {
            id: id.to_string(),
        }));

        for target in entry.allowed_to().unwrap_or_default() {
            checks.push(check(declared.contains(target.as_str()), || {
                ConfigIssue::UnknownTarget {
                    state: id.to_string(),
                    target: target.clone(),
                }
            }));
        }

        for origin in entry.allowed_from().unwrap_or_default() {
            checks.push(check(declared.contains(origin.as_str()), || {
                ConfigIssue::UnknownOrigin {
                    state: id.to_string(),
                    origin: origin.clone(),
                }
            }));
        }
    }

    let initial: Vec<String> = entries
        .iter()
        .filter(|e| e.is_initial())
        .map(|e| e.id().to_string())
        .collect();
    checks.push(check(initial.len() <= 1, || ConfigIssue::MultipleInitial {
        ids: initial.clone(),
    }));

    Validation::all_vec(checks).map(|_| ())
}
