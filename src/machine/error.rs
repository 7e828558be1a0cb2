//! Transition errors.

use thiserror::Error;

/// Errors that can occur when moving a machine to another state.
///
/// A failed transition never produces a machine; the receiver is unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    #[error("Invalid state: {id}")]
    InvalidState { id: String },

    #[error("Disallowed transition: {from} -> {to}")]
    Disallowed { from: String, to: String },
}
