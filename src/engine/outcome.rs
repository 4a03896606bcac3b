//! Results of stepping and running a machine.

use crate::core::StateId;
use serde::{Deserialize, Serialize};

/// Result of a single step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome<S: StateId> {
    /// No guard passed in the current state; nothing ran
    NoTransition,

    /// Transition `index` fired but targets the state it left.
    /// Its action ran; the machine did not move.
    SelfTransition { index: usize, state: S },

    /// Transition `index` fired and moved the machine
    Changed { index: usize, from: S, to: S },
}

impl<S: StateId> StepOutcome<S> {
    /// Whether a transition fired (its action ran).
    pub fn fired(&self) -> bool {
        !matches!(self, Self::NoTransition)
    }

    /// Whether the machine moved to a different state.
    pub fn changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    /// Index of the fired transition within its state.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::NoTransition => None,
            Self::SelfTransition { index, .. } | Self::Changed { index, .. } => Some(*index),
        }
    }
}

/// Result of running a machine until it stops changing.
///
/// `Unstable` is an ordinary outcome, not a fault: the caller decides
/// whether an input that needs more steps is a problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StabilityOutcome {
    /// Reached a fixed point; `steps` counts every step taken, including
    /// the final one that made no change
    Stable { steps: usize },

    /// Used the whole step budget while still changing state
    Unstable { steps: usize },
}

impl StabilityOutcome {
    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Stable { .. })
    }

    pub fn steps(&self) -> usize {
        match self {
            Self::Stable { steps } | Self::Unstable { steps } => *steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_outcome_helpers() {
        let none: StepOutcome<&'static str> = StepOutcome::NoTransition;
        let same = StepOutcome::SelfTransition {
            index: 1,
            state: "Unlocked",
        };
        let moved = StepOutcome::Changed {
            index: 0,
            from: "Locked",
            to: "Unlocked",
        };

        assert!(!none.fired() && !none.changed());
        assert!(same.fired() && !same.changed());
        assert!(moved.fired() && moved.changed());

        assert_eq!(none.index(), None);
        assert_eq!(same.index(), Some(1));
        assert_eq!(moved.index(), Some(0));
    }

    #[test]
    fn stability_outcome_helpers() {
        assert!(StabilityOutcome::Stable { steps: 2 }.is_stable());
        assert!(!StabilityOutcome::Unstable { steps: 5 }.is_stable());
        assert_eq!(StabilityOutcome::Unstable { steps: 5 }.steps(), 5);
    }

    #[test]
    fn outcomes_serialize_for_reporting() {
        let outcome = StepOutcome::Changed {
            index: 0,
            from: "Locked".to_string(),
            to: "Unlocked".to_string(),
        };

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: StepOutcome<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);

        let json = serde_json::to_string(&StabilityOutcome::Stable { steps: 2 }).unwrap();
        assert_eq!(json, r#"{"Stable":{"steps":2}}"#);
    }
}
