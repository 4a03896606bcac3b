//! Actions run when a transition fires.

use std::fmt;

/// Side-effecting procedure applied to a controller.
///
/// An action runs exactly once when its transition is selected, before
/// the engine moves its state pointer. If the action panics, the panic
/// reaches the caller of `step` and the engine stays where it was.
pub struct Action<C> {
    procedure: Option<Box<dyn Fn(&mut C) + Send + Sync>>,
}

impl<C> Action<C> {
    /// Create an action from a procedure.
    pub fn new<F>(procedure: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        Action {
            procedure: Some(Box::new(procedure)),
        }
    }

    /// An action that does nothing.
    pub fn none() -> Self {
        Action { procedure: None }
    }

    /// Whether running this action has no effect.
    pub fn is_noop(&self) -> bool {
        self.procedure.is_none()
    }

    /// Run the action against the controller.
    pub fn run(&self, controller: &mut C) {
        if let Some(procedure) = &self.procedure {
            procedure(controller);
        }
    }
}

impl<C> Default for Action<C> {
    fn default() -> Self {
        Self::none()
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noop() {
            f.write_str("Action(noop)")
        } else {
            f.write_str("Action(..)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_mutates_controller() {
        let action = Action::new(|count: &mut u32| *count += 1);
        let mut count = 0;

        action.run(&mut count);
        action.run(&mut count);

        assert_eq!(count, 2);
        assert!(!action.is_noop());
    }

    #[test]
    fn none_leaves_controller_alone() {
        let action = Action::<Vec<&str>>::none();
        let mut log = vec!["untouched"];

        action.run(&mut log);

        assert_eq!(log, vec!["untouched"]);
        assert!(action.is_noop());
    }
}
