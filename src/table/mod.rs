//! Declarative state tables.
//!
//! A table is the full definition of a machine: every state, and for
//! each state its guarded transitions in priority order. Tables are
//! validated once when built and never change afterwards, so a single
//! table can be shared (behind an `Arc`) by any number of engines.

mod state;
mod transition;
pub mod validate;

pub use state::State;
pub use transition::Transition;

use crate::core::StateId;
use crate::error::Fault;
use std::collections::HashMap;
use std::fmt;

/// Immutable mapping from state id to state.
///
/// Construction guarantees that ids are unique and that every
/// transition target is a key of the table.
pub struct StateTable<S: StateId, M, C> {
    states: HashMap<S, State<S, M, C>>,
    order: Vec<S>,
}

impl<S: StateId, M, C> StateTable<S, M, C> {
    /// Build and validate a table from state declarations.
    ///
    /// Returns `Fault::InvalidTable` listing every duplicate id and every
    /// transition whose target is not declared.
    pub fn new(states: Vec<State<S, M, C>>) -> Result<Self, Fault> {
        validate::into_fault(validate::check_states(&states))?;

        let order: Vec<S> = states.iter().map(|s| s.id().clone()).collect();
        let states = states
            .into_iter()
            .map(|state| (state.id().clone(), state))
            .collect();

        Ok(Self { states, order })
    }

    pub fn get(&self, id: &S) -> Option<&State<S, M, C>> {
        self.states.get(id)
    }

    pub fn contains(&self, id: &S) -> bool {
        self.states.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &S> {
        self.order.iter()
    }

    /// States in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &State<S, M, C>> {
        self.order.iter().filter_map(|id| self.states.get(id))
    }
}

impl<S: StateId, M, C> fmt::Debug for StateTable<S, M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.states()).finish()
    }
}
