//! Configuration errors.

use crate::config::lint::ConfigIssue;
use thiserror::Error;

/// Errors that can occur while building a machine from its state configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("At least 2 states required (found {found})")]
    TooFewStates { found: usize },

    #[error("State already defined: {id}")]
    DuplicateState { id: String },

    #[error("Invalid initial state: {id}")]
    UnknownInitialState { id: String },

    #[error("State entry at index {index} has an empty id")]
    EmptyStateId { index: usize },

    #[error("Invalid state entry at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("Malformed state configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("State configuration rejected: {}", join_issues(.issues))]
    Rejected { issues: Vec<ConfigIssue> },
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
