//! Diagnostic trace of what a machine does.
//!
//! The engine reports table construction, every fired transition, and
//! the end of each stabilisation run through a `TraceSink`. Tracing is a
//! side channel: it never influences which transition fires.

use crate::core::StateId;
use std::fmt::Debug;

/// Receiver for engine diagnostics.
///
/// Every method has an empty default, so a sink only overrides the
/// events it cares about.
pub trait TraceSink<S: StateId>: Debug + Send + Sync {
    /// A machine was built over a table with `states` entries.
    fn table_built(&self, _states: usize) {}

    /// Transition `index` of state `from` fired, leading to `to`.
    ///
    /// Self-transitions are reported too, with `from == to`.
    fn transition_fired(&self, _index: usize, _from: &S, _to: &S) {}

    /// A run reached a fixed point after `steps` steps, `changes` of
    /// which moved the machine.
    fn settled(&self, _steps: usize, _changes: usize) {}

    /// A run used its whole budget without reaching a fixed point.
    fn unstable(&self, _steps: usize) {}

    /// A run revisited `state` after `steps` steps.
    fn cycle_detected(&self, _state: &S, _steps: usize) {}
}

/// Sink that emits structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl<S: StateId> TraceSink<S> for TracingSink {
    fn table_built(&self, states: usize) {
        tracing::debug!(states, "state table built");
    }

    fn transition_fired(&self, index: usize, from: &S, to: &S) {
        if from == to {
            tracing::trace!(index, state = from.name(), "self transition");
        } else {
            tracing::debug!(index, from = from.name(), to = to.name(), "state changed");
        }
    }

    fn settled(&self, steps: usize, changes: usize) {
        if changes > 1 {
            tracing::debug!(steps, changes, "machine settled");
        }
    }

    fn unstable(&self, steps: usize) {
        tracing::warn!(steps, "step budget exhausted before machine settled");
    }

    fn cycle_detected(&self, state: &S, steps: usize) {
        tracing::error!(state = state.name(), steps, "cycle detected");
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl<S: StateId> TraceSink<S> for SilentSink {}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Event captured by `RecordingSink`.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Event<S> {
        TableBuilt(usize),
        Fired { index: usize, from: S, to: S },
        Settled { steps: usize, changes: usize },
        Unstable(usize),
        Cycle { state: S, steps: usize },
    }

    /// Sink that keeps every event for inspection in tests.
    #[derive(Debug, Clone)]
    pub struct RecordingSink<S> {
        events: Arc<Mutex<Vec<Event<S>>>>,
    }

    impl<S: Clone> RecordingSink<S> {
        pub fn new() -> Self {
            Self {
                events: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn events(&self) -> Vec<Event<S>> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, event: Event<S>) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl<S: StateId> TraceSink<S> for RecordingSink<S> {
        fn table_built(&self, states: usize) {
            self.push(Event::TableBuilt(states));
        }

        fn transition_fired(&self, index: usize, from: &S, to: &S) {
            self.push(Event::Fired {
                index,
                from: from.clone(),
                to: to.clone(),
            });
        }

        fn settled(&self, steps: usize, changes: usize) {
            self.push(Event::Settled { steps, changes });
        }

        fn unstable(&self, steps: usize) {
            self.push(Event::Unstable(steps));
        }

        fn cycle_detected(&self, state: &S, steps: usize) {
            self.push(Event::Cycle {
                state: state.clone(),
                steps,
            });
        }
    }
}
