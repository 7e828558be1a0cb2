//! Immutable State Machine: a finite state machine as a value
//!
//! A machine is built from a declarative list of states and can only change by
//! producing a new machine. Previous instances are never touched, so they can
//! be kept, compared and shared freely.
//!
//! # Core Concepts
//!
//! - **States**: declared as plain ids or as [`StateSpec`] descriptors that
//!   restrict which states they may move `to` or be entered `from`
//! - **Initial state**: the first declared state, unless one is marked `initial`
//! - **Transitions**: `goto` validates the move and returns a new machine, or
//!   the same one when nothing changed
//! - **Payload**: each transition may attach data to the state it enters
//!
//! # Example
//!
//! ```rust
//! use immutable_state_machine::{ImmutableStateMachine, StateSpec, TransitionError};
//!
//! let machine: ImmutableStateMachine = ImmutableStateMachine::new([
//!     StateSpec::new("start").to(["finish"]),
//!     StateSpec::new("bed"),
//!     StateSpec::new("finish"),
//! ])
//! .unwrap();
//!
//! assert!(matches!(
//!     machine.goto("bed"),
//!     Err(TransitionError::Disallowed { .. })
//! ));
//!
//! let finished = machine.goto("finish").unwrap();
//! assert_eq!(finished.state(), "finish");
//! assert_eq!(machine.state(), "start");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::StateMachineBuilder;
pub use crate::config::{ConfigError, ConfigIssue, StateEntry, StateSpec};
pub use crate::core::{StateDescriptor, StateTable};
pub use crate::machine::{ImmutableStateMachine, TransitionError};
