//! The immutable state machine value.
//!
//! # Key Concepts
//!
//! - **Construction**: a configuration is validated into a shared, read-only
//!   state table and an initial active state
//! - **Queries**: `state()` and `data()` are pure reads
//! - **Transitions**: `goto` never touches the receiver; it returns either the
//!   same instance (nothing changed) or a new one with its own table

mod error;
mod immutable;

pub use error::TransitionError;
pub use immutable::ImmutableStateMachine;
