//! State table: the declared states of a machine, in declaration order.
//!
//! The table is a persistent value. Transitions never edit a table that a
//! machine already holds; they derive a new one with [`StateTable::with_data`].

use super::descriptor::StateDescriptor;
use std::collections::HashMap;

/// Declared states keyed by id.
#[derive(Clone, Debug, PartialEq)]
pub struct StateTable<D> {
    states: Vec<StateDescriptor<D>>,
    index: HashMap<String, usize>,
}

impl<D> StateTable<D> {
    pub(crate) fn new() -> Self {
        Self {
            states: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append a descriptor. Returns `false` and leaves the table untouched if
    /// the id is already declared.
    pub(crate) fn insert(&mut self, descriptor: StateDescriptor<D>) -> bool {
        if self.index.contains_key(descriptor.id()) {
            return false;
        }
        self.index
            .insert(descriptor.id().to_string(), self.states.len());
        self.states.push(descriptor);
        true
    }

    pub fn get(&self, id: &str) -> Option<&StateDescriptor<D>> {
        self.index.get(id).map(|&i| &self.states[i])
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    /// Declared ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(StateDescriptor::id)
    }
}

impl<D: Clone> StateTable<D> {
    /// Return a deep copy of the table with `id`'s payload replaced.
    ///
    /// This is a pure function. `self` is unchanged and the returned table
    /// shares no storage with it. An unknown `id` yields an unmodified copy.
    pub fn with_data(&self, id: &str, data: Option<D>) -> Self {
        let mut table = self.clone();
        if let Some(&i) = table.index.get(id) {
            table.states[i].set_data(data);
        }
        table
    }
}
