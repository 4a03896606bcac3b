//! Builder API for ergonomic table and machine construction.
//!
//! This module provides fluent builders and a macro for declaring state
//! tables with minimal boilerplate while keeping transition order explicit.

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use state::StateBuilder;
pub use transition::TransitionBuilder;

use crate::core::StateId;
use crate::table::Transition;

/// Create an unconditional transition with no action.
///
/// Useful as the last entry of a state, where it acts as a fallback.
///
/// # Example
///
/// ```
/// use statetable::builder::simple_transition;
/// use statetable::state_ids;
///
/// state_ids! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// let transition = simple_transition::<MyState, (), ()>(MyState::End);
/// assert!(transition.matches(&()));
/// ```
pub fn simple_transition<S, M, C>(target: S) -> Transition<S, M, C>
where
    S: StateId,
{
    Transition::goto(|_| true, target)
}

/// Create a transition with a guard predicate and no action.
///
/// # Example
///
/// ```
/// use statetable::builder::guarded_transition;
/// use statetable::state_ids;
///
/// state_ids! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// let transition = guarded_transition::<MyState, u32, (), _>(MyState::End, |n| *n > 3);
/// assert!(transition.matches(&4));
/// assert!(!transition.matches(&1));
/// ```
pub fn guarded_transition<S, M, C, F>(target: S, guard: F) -> Transition<S, M, C>
where
    S: StateId,
    F: Fn(&M) -> bool + Send + Sync + 'static,
{
    Transition::goto(guard, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_ids;

    state_ids! {
        enum TestState {
            Start,
            End,
        }
    }

    #[test]
    fn simple_transition_always_matches() {
        let transition = simple_transition::<TestState, u8, ()>(TestState::End);

        assert_eq!(transition.target(), &TestState::End);
        assert!(transition.matches(&0));
        assert!(transition.action().is_noop());
    }

    #[test]
    fn guarded_transition_respects_guard() {
        let transition =
            guarded_transition::<TestState, u8, (), _>(TestState::Start, |n: &u8| *n % 2 == 0);

        assert!(transition.matches(&4));
        assert!(!transition.matches(&3));
    }
}
