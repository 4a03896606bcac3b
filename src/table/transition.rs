//! Guarded edges between states.

use crate::core::{Action, Guard, StateId};
use std::fmt;

/// A guarded, directed edge from its owning state to `target`.
///
/// The guard is evaluated against a model; the action is applied to a
/// controller. Model and controller may be the same type.
pub struct Transition<S: StateId, M, C> {
    guard: Guard<M>,
    action: Action<C>,
    target: S,
}

impl<S: StateId, M, C> Transition<S, M, C> {
    /// Create a transition from a guard, an action and a target state.
    pub fn new<G, A>(guard: G, action: A, target: S) -> Self
    where
        G: Fn(&M) -> bool + Send + Sync + 'static,
        A: Fn(&mut C) + Send + Sync + 'static,
    {
        Self {
            guard: Guard::new(guard),
            action: Action::new(action),
            target,
        }
    }

    /// Create a transition to `target` whose action does nothing.
    pub fn goto<G>(guard: G, target: S) -> Self
    where
        G: Fn(&M) -> bool + Send + Sync + 'static,
    {
        Self {
            guard: Guard::new(guard),
            action: Action::none(),
            target,
        }
    }

    /// Assemble a transition from already-built parts.
    pub fn from_parts(guard: Guard<M>, action: Action<C>, target: S) -> Self {
        Self {
            guard,
            action,
            target,
        }
    }

    /// Check if this transition is eligible for the model (pure).
    pub fn matches(&self, model: &M) -> bool {
        self.guard.check(model)
    }

    /// Run this transition's action once.
    pub fn fire(&self, controller: &mut C) {
        self.action.run(controller);
    }

    /// The state this transition leads to.
    pub fn target(&self) -> &S {
        &self.target
    }

    /// The transition's action.
    pub fn action(&self) -> &Action<C> {
        &self.action
    }
}

impl<S: StateId, M, C> fmt::Debug for Transition<S, M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_evaluates_guard_only() {
        let transition: Transition<&'static str, u32, u32> =
            Transition::new(|m: &u32| *m > 3, |c: &mut u32| *c += 1, "High");
        let mut controller = 0;

        assert!(transition.matches(&5));
        assert!(!transition.matches(&1));
        assert_eq!(controller, 0);

        transition.fire(&mut controller);
        assert_eq!(controller, 1);
        assert_eq!(transition.target(), &"High");
    }

    #[test]
    fn goto_has_noop_action() {
        let transition: Transition<&'static str, bool, Vec<u8>> =
            Transition::goto(|m: &bool| *m, "Same");
        let mut controller = vec![1, 2];

        transition.fire(&mut controller);

        assert!(transition.action().is_noop());
        assert_eq!(controller, vec![1, 2]);
    }
}
