//! Immutable machine over a shared state table.

use crate::config::{self, ConfigError, StateEntry};
use crate::core::{StateDescriptor, StateTable};
use crate::machine::error::TransitionError;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

/// A finite state machine that is never mutated after construction.
///
/// Every transition returns a machine. When nothing observable changes that
/// is the same instance (sharing the same table, see [`ptr_eq`]); otherwise it
/// is a new instance holding its own deep copy of the state table.
///
/// `D` is the payload type carried by the active state. It defaults to
/// `serde_json::Value`.
///
/// # Example
///
/// ```rust
/// use immutable_state_machine::ImmutableStateMachine;
/// use serde_json::json;
///
/// let machine: ImmutableStateMachine = ImmutableStateMachine::new(["start", "stop"]).unwrap();
/// assert_eq!(machine.state(), "start");
///
/// let stopped = machine.goto_with("stop", json!({ "reason": "done" })).unwrap();
/// assert_eq!(stopped.state(), "stop");
/// assert_eq!(stopped.data(), Some(&json!({ "reason": "done" })));
///
/// // the original is untouched
/// assert_eq!(machine.state(), "start");
/// assert_eq!(machine.data(), None);
/// ```
///
/// [`ptr_eq`]: ImmutableStateMachine::ptr_eq
#[derive(Debug)]
pub struct ImmutableStateMachine<D = Value> {
    table: Arc<StateTable<D>>,
    active: String,
}

impl<D> Clone for ImmutableStateMachine<D> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            active: self.active.clone(),
        }
    }
}

impl<D: Clone + PartialEq> ImmutableStateMachine<D> {
    /// Create a machine from a sequence of state entries.
    ///
    /// Entries may be plain ids or [`StateSpec`](crate::config::StateSpec)
    /// descriptors.
    pub fn new<I, E>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = E>,
        E: Into<StateEntry>,
    {
        let entries: Vec<StateEntry> = entries.into_iter().map(Into::into).collect();
        Self::from_entries(&entries)
    }

    /// Create a machine from already-built entries.
    pub fn from_entries(entries: &[StateEntry]) -> Result<Self, ConfigError> {
        let (table, active) = config::build_table(entries)?;
        debug!(
            "Built state machine with {} states, initial state '{}'",
            table.len(),
            active
        );
        Ok(Self {
            table: Arc::new(table),
            active,
        })
    }

    /// Create a machine from a JSON configuration value.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let entries = config::parse_value(value)?;
        Self::from_entries(&entries)
    }

    /// Create a machine from JSON configuration text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let entries = config::parse_json(json)?;
        Self::from_entries(&entries)
    }

    /// Go to `target` with no payload.
    pub fn goto(&self, target: &str) -> Result<Self, TransitionError> {
        self.transition(target, None)
    }

    /// Go to `target`, associating `data` with it.
    pub fn goto_with(&self, target: &str, data: D) -> Result<Self, TransitionError> {
        self.transition(target, Some(data))
    }

    /// Go to `target` with an optional payload.
    ///
    /// Staying in the active state with an equal payload returns the same
    /// instance. Any other successful call returns a new instance. `self` is
    /// never modified.
    pub fn transition(&self, target: &str, data: Option<D>) -> Result<Self, TransitionError> {
        if target == self.active {
            if self.data() == data.as_ref() {
                trace!("State '{}' unchanged, reusing instance", target);
                return Ok(self.clone());
            }
            debug!("Replacing data of state '{}'", target);
            return Ok(self.derive(target, data));
        }

        self.check_transition(target)?;

        debug!("Transition {} -> {}", self.active, target);
        Ok(self.derive(target, data))
    }

    fn derive(&self, target: &str, data: Option<D>) -> Self {
        Self {
            table: Arc::new(self.table.with_data(target, data)),
            active: target.to_string(),
        }
    }
}

impl<D> ImmutableStateMachine<D> {
    /// Id of the active state (pure).
    pub fn state(&self) -> &str {
        &self.active
    }

    /// Payload of the active state (pure).
    pub fn data(&self) -> Option<&D> {
        self.table
            .get(&self.active)
            .and_then(StateDescriptor::data)
    }

    /// Declared state ids in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.table.ids()
    }

    pub fn descriptor(&self, id: &str) -> Option<&StateDescriptor<D>> {
        self.table.get(id)
    }

    /// Check whether `goto(target)` would succeed (pure).
    pub fn can_goto(&self, target: &str) -> bool {
        target == self.active || self.check_transition(target).is_ok()
    }

    /// Whether `self` and `other` are the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.table, &other.table) && self.active == other.active
    }

    /// Validate a move from the active state to a different `target`.
    fn check_transition(&self, target: &str) -> Result<(), TransitionError> {
        let destination = self
            .table
            .get(target)
            .ok_or_else(|| TransitionError::InvalidState {
                id: target.to_string(),
            })?;

        let exit_allowed = self
            .table
            .get(&self.active)
            .is_some_and(|source| source.permits_exit_to(target));

        if !exit_allowed || !destination.permits_entry_from(&self.active) {
            return Err(TransitionError::Disallowed {
                from: self.active.clone(),
                to: target.to_string(),
            });
        }

        Ok(())
    }
}
