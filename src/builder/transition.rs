//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Guard, StateId};
use crate::table::Transition;

/// Builder for constructing transitions with a fluent API.
///
/// A guard and a target are required; the action defaults to a no-op.
pub struct TransitionBuilder<S: StateId, M, C> {
    guard: Option<Guard<M>>,
    action: Action<C>,
    target: Option<S>,
}

impl<S: StateId, M, C> TransitionBuilder<S, M, C> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            guard: None,
            action: Action::none(),
            target: None,
        }
    }

    /// Add a guard using a closure (required unless `.always()` is used).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&M) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Use a prebuilt guard.
    pub fn guard(mut self, guard: Guard<M>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Fire whenever the owning state is current.
    pub fn always(mut self) -> Self {
        self.guard = Some(Guard::always());
        self
    }

    /// Set the action run when the transition fires (optional).
    pub fn then<F>(mut self, procedure: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        self.action = Action::new(procedure);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.target = Some(state);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, M, C>, BuildError> {
        let guard = self.guard.ok_or(BuildError::MissingGuard)?;
        let target = self.target.ok_or(BuildError::MissingTarget)?;

        Ok(Transition::from_parts(guard, self.action, target))
    }
}

impl<S: StateId, M, C> Default for TransitionBuilder<S, M, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_ids;

    state_ids! {
        enum Door {
            Open,
            Closed,
        }
    }

    struct Sensor {
        blocked: bool,
    }

    #[test]
    fn builder_validates_missing_guard() {
        let result = TransitionBuilder::<Door, Sensor, ()>::new()
            .to(Door::Closed)
            .build();

        assert!(matches!(result, Err(BuildError::MissingGuard)));
    }

    #[test]
    fn builder_validates_missing_target() {
        let result = TransitionBuilder::<Door, Sensor, ()>::new()
            .when(|s: &Sensor| !s.blocked)
            .build();

        assert!(matches!(result, Err(BuildError::MissingTarget)));
    }

    #[test]
    fn fluent_api_builds_transition() {
        let transition: Transition<Door, Sensor, Vec<&'static str>> = TransitionBuilder::new()
            .when(|s: &Sensor| !s.blocked)
            .then(|log: &mut Vec<&'static str>| log.push("closing"))
            .to(Door::Closed)
            .build()
            .unwrap();
        let mut log = Vec::new();

        assert!(transition.matches(&Sensor { blocked: false }));
        assert!(!transition.matches(&Sensor { blocked: true }));

        transition.fire(&mut log);
        assert_eq!(log, vec!["closing"]);
        assert_eq!(transition.target(), &Door::Closed);
    }

    #[test]
    fn action_defaults_to_noop() {
        let transition: Transition<Door, Sensor, ()> =
            TransitionBuilder::new().always().to(Door::Open).build().unwrap();

        assert!(transition.action().is_noop());
        assert!(transition.matches(&Sensor { blocked: true }));
    }
}
