//! Per-state descriptor with transition restrictions and payload.
//!
//! Descriptors are plain values. They are built once during construction and
//! only ever copied afterwards, never edited in place by a machine.

use std::collections::BTreeSet;

/// One declared state of a machine.
///
/// `allowed_to` and `allowed_from` are `None` when the state places no
/// restriction in that direction. `Some` with an empty set blocks every move
/// in that direction.
///
/// # Example
///
/// ```rust
/// use immutable_state_machine::core::StateDescriptor;
///
/// let start: StateDescriptor<()> = StateDescriptor::new("start").with_allowed_to(["finish"]);
///
/// assert!(start.permits_exit_to("finish"));
/// assert!(!start.permits_exit_to("bed"));
/// assert!(start.permits_entry_from("anything"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateDescriptor<D> {
    id: String,
    allowed_to: Option<BTreeSet<String>>,
    allowed_from: Option<BTreeSet<String>>,
    data: Option<D>,
}

impl<D> StateDescriptor<D> {
    /// Create an unrestricted descriptor with no payload.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            allowed_to: None,
            allowed_from: None,
            data: None,
        }
    }

    /// Restrict the states this one may move to.
    pub fn with_allowed_to<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_to = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict the states that may move into this one.
    pub fn with_allowed_from<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_from = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn allowed_to(&self) -> Option<&BTreeSet<String>> {
        self.allowed_to.as_ref()
    }

    pub fn allowed_from(&self) -> Option<&BTreeSet<String>> {
        self.allowed_from.as_ref()
    }

    /// Payload currently held by this state.
    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    /// Check whether this state may be left for `target` (pure).
    pub fn permits_exit_to(&self, target: &str) -> bool {
        self.allowed_to
            .as_ref()
            .is_none_or(|allowed| allowed.contains(target))
    }

    /// Check whether this state may be entered from `source` (pure).
    pub fn permits_entry_from(&self, source: &str) -> bool {
        self.allowed_from
            .as_ref()
            .is_none_or(|allowed| allowed.contains(source))
    }

    pub(crate) fn set_data(&mut self, data: Option<D>) {
        self.data = data;
    }
}
