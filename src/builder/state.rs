//! Builder for declaring a state and its transitions in priority order.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::StateId;
use crate::table::{State, Transition};

/// Builder for one state of a table.
///
/// Transitions are kept in the order they are added, which is the order
/// their guards are tried in.
pub struct StateBuilder<S: StateId, M, C> {
    id: S,
    transitions: Vec<Transition<S, M, C>>,
}

impl<S: StateId, M, C> StateBuilder<S, M, C> {
    pub fn new(id: S) -> Self {
        Self {
            id,
            transitions: Vec::new(),
        }
    }

    /// Add a guarded transition with an action.
    pub fn on<G, A>(mut self, guard: G, action: A, target: S) -> Self
    where
        G: Fn(&M) -> bool + Send + Sync + 'static,
        A: Fn(&mut C) + Send + Sync + 'static,
    {
        self.transitions.push(Transition::new(guard, action, target));
        self
    }

    /// Add a guarded transition that only moves the machine.
    pub fn go<G>(mut self, guard: G, target: S) -> Self
    where
        G: Fn(&M) -> bool + Send + Sync + 'static,
    {
        self.transitions.push(Transition::goto(guard, target));
        self
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, M, C>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, M, C>) -> Result<Self, BuildError> {
        self.transitions.push(builder.build()?);
        Ok(self)
    }

    pub fn build(self) -> State<S, M, C> {
        State::new(self.id, self.transitions)
    }
}
