//! States: named nodes holding an ordered list of transitions.

use crate::core::StateId;
use crate::table::transition::Transition;
use std::fmt;

/// A named node with its outgoing transitions in declaration order.
///
/// Order is part of the table's meaning: when several guards pass for
/// the same model, the earliest declared transition wins and the later
/// ones are never fired.
pub struct State<S: StateId, M, C> {
    id: S,
    transitions: Vec<Transition<S, M, C>>,
}

impl<S: StateId, M, C> State<S, M, C> {
    pub fn new(id: S, transitions: Vec<Transition<S, M, C>>) -> Self {
        Self { id, transitions }
    }

    pub fn id(&self) -> &S {
        &self.id
    }

    pub fn transitions(&self) -> &[Transition<S, M, C>] {
        &self.transitions
    }

    pub fn transition(&self, index: usize) -> Option<&Transition<S, M, C>> {
        self.transitions.get(index)
    }

    /// True when the state has no outgoing transitions at all.
    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Index of the first transition whose guard passes for `model`.
    ///
    /// Pure query: guards are evaluated in declaration order, scanning
    /// stops at the first match, and no action runs.
    pub fn find_first_matching_transition_index(&self, model: &M) -> Option<usize> {
        self.transitions.iter().position(|t| t.matches(model))
    }
}

impl<S: StateId, M, C> fmt::Debug for State<S, M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("transitions", &self.transitions)
            .finish()
    }
}
