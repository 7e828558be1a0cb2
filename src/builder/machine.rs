//! Builder for constructing state machines.

use crate::config::{lint, ConfigError, StateEntry, StateSpec};
use crate::machine::ImmutableStateMachine;
use serde_json::Value;
use std::marker::PhantomData;
use stillwater::validation::Validation;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use immutable_state_machine::builder::StateMachineBuilder;
/// use immutable_state_machine::config::StateSpec;
///
/// let machine = StateMachineBuilder::<()>::new()
///     .state(StateSpec::new("draft").to(["review"]))
///     .state(StateSpec::new("review").to(["draft", "published"]))
///     .state("published")
///     .strict()
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), "draft");
/// assert!(!machine.can_goto("published"));
/// ```
pub struct StateMachineBuilder<D = Value> {
    entries: Vec<StateEntry>,
    initial: Option<String>,
    strict: bool,
    _phantom: PhantomData<D>,
}

impl<D: Clone + PartialEq> StateMachineBuilder<D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            initial: None,
            strict: false,
            _phantom: PhantomData,
        }
    }

    /// Declare a state.
    pub fn state(mut self, entry: impl Into<StateEntry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    /// Declare several states at once.
    pub fn states<I, E>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<StateEntry>,
    {
        self.entries.extend(entries.into_iter().map(Into::into));
        self
    }

    /// Set the initial state.
    ///
    /// `id` must name a declared state. It replaces any `initial` flag set on
    /// the entries themselves.
    pub fn initial(mut self, id: impl Into<String>) -> Self {
        self.initial = Some(id.into());
        self
    }

    /// Reject configurations that [`lint`] finds any issue with, instead of
    /// tolerating several initial flags and dangling restrictions.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Build the state machine.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<ImmutableStateMachine<D>, ConfigError> {
        let entries = match &self.initial {
            Some(id) => mark_initial(self.entries, id)?,
            None => self.entries,
        };

        if self.strict {
            if let Validation::Failure(issues) = lint(&entries) {
                return Err(ConfigError::Rejected {
                    issues: issues.iter().cloned().collect(),
                });
            }
        }

        ImmutableStateMachine::from_entries(&entries)
    }
}

/// Flag the entry named `id` as initial and clear every other flag.
fn mark_initial(entries: Vec<StateEntry>, id: &str) -> Result<Vec<StateEntry>, ConfigError> {
    if !entries.iter().any(|entry| entry.id() == id) {
        return Err(ConfigError::UnknownInitialState { id: id.to_string() });
    }

    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            StateEntry::Plain(plain) if plain == id => StateSpec::new(plain).initial().into(),
            StateEntry::Spec(mut spec) => {
                spec.initial = spec.id == id;
                spec.into()
            }
            other => other,
        })
        .collect())
}

impl<D: Clone + PartialEq> Default for StateMachineBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
