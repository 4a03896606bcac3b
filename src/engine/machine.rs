//! The table-driven state machine engine.

use crate::config::MachineConfig;
use crate::core::StateId;
use crate::engine::outcome::{StabilityOutcome, StepOutcome};
use crate::error::Fault;
use crate::table::{State, StateTable, Transition};
use crate::trace::{SilentSink, TraceSink, TracingSink};
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Engine driving a client through a validated state table.
///
/// The table is shared and read-only; the only thing an engine mutates
/// is its own current state id (plus whatever the fired actions do to
/// the controller). Stepping needs `&mut self`, so an engine shared
/// between threads must be serialized by the caller.
pub struct FiniteStateMachine<S: StateId, M, C> {
    table: Arc<StateTable<S, M, C>>,
    current: S,
    config: MachineConfig,
    sink: Arc<dyn TraceSink<S>>,
    custom_sink: bool,
}

impl<S: StateId, M, C> FiniteStateMachine<S, M, C> {
    /// Build a machine from state declarations, starting at `initial`.
    ///
    /// Table faults are reported before the initial state is checked.
    pub fn new(states: Vec<State<S, M, C>>, initial: S) -> Result<Self, Fault> {
        Self::from_table(Arc::new(StateTable::new(states)?), initial)
    }

    /// Build a machine over an already validated, shared table.
    pub fn from_table(table: Arc<StateTable<S, M, C>>, initial: S) -> Result<Self, Fault> {
        Self::assemble(table, initial, MachineConfig::default(), None)
    }

    pub(crate) fn assemble(
        table: Arc<StateTable<S, M, C>>,
        initial: S,
        config: MachineConfig,
        sink: Option<Arc<dyn TraceSink<S>>>,
    ) -> Result<Self, Fault> {
        if !table.contains(&initial) {
            return Err(Fault::UnknownInitialState {
                state: initial.name().to_string(),
            });
        }

        let custom_sink = sink.is_some();
        let sink = sink.unwrap_or_else(|| default_sink(&config));
        sink.table_built(table.len());

        Ok(Self {
            table,
            current: initial,
            config,
            sink,
            custom_sink,
        })
    }

    /// Replace the configuration.
    ///
    /// Unless a sink was installed explicitly, the default sink is rebuilt
    /// from `config.trace`.
    pub fn with_config(mut self, config: MachineConfig) -> Self {
        if !self.custom_sink {
            self.sink = default_sink(&config);
        }
        self.config = config;
        self
    }

    /// Send diagnostics to `sink`. Later `with_config` calls keep it.
    pub fn with_sink<T>(mut self, sink: T) -> Self
    where
        T: TraceSink<S> + 'static,
    {
        self.sink = Arc::new(sink);
        self.custom_sink = true;
        self
    }

    /// Discard all diagnostics.
    pub fn silent(self) -> Self {
        self.with_sink(SilentSink)
    }

    /// Get current state id (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the machine is in `state` (pure)
    pub fn is_in(&self, state: &S) -> bool {
        self.current == *state
    }

    pub fn table(&self) -> &Arc<StateTable<S, M, C>> {
        &self.table
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Make at most one transition.
    ///
    /// Finds the first transition of the current state whose guard passes
    /// for `model`, runs its action on `controller`, then moves to its
    /// target. If the action panics the machine stays where it was.
    pub fn step(&mut self, model: &M, controller: &mut C) -> StepOutcome<S> {
        let table = Arc::clone(&self.table);
        match select(&table, &self.current, model) {
            Some((index, transition)) => self.fire(index, transition, controller),
            None => StepOutcome::NoTransition,
        }
    }

    /// Step until the machine stops changing state, at most `max_steps` times.
    ///
    /// Returns `Stable` on the first step that does not move the machine
    /// (no transition, or a self-transition). Moving into a state already
    /// visited during this run is a `CycleDetected` fault; the machine is
    /// left in that revisited state. Exhausting the budget returns
    /// `Unstable`.
    pub fn run_to_stable(
        &mut self,
        model: &M,
        controller: &mut C,
        max_steps: NonZeroUsize,
    ) -> Result<StabilityOutcome, Fault> {
        self.run_with(max_steps, |machine| machine.step(model, controller))
    }

    /// `run_to_stable` with the configured default step budget.
    pub fn settle(&mut self, model: &M, controller: &mut C) -> Result<StabilityOutcome, Fault> {
        let max_steps = self.config.default_max_steps;
        self.run_to_stable(model, controller, max_steps)
    }

    fn fire(
        &mut self,
        index: usize,
        transition: &Transition<S, M, C>,
        controller: &mut C,
    ) -> StepOutcome<S> {
        transition.fire(controller);
        let target = transition.target().clone();
        self.sink.transition_fired(index, &self.current, &target);

        if target == self.current {
            StepOutcome::SelfTransition {
                index,
                state: target,
            }
        } else {
            let from = std::mem::replace(&mut self.current, target.clone());
            StepOutcome::Changed {
                index,
                from,
                to: target,
            }
        }
    }

    fn run_with<F>(
        &mut self,
        max_steps: NonZeroUsize,
        mut step: F,
    ) -> Result<StabilityOutcome, Fault>
    where
        F: FnMut(&mut Self) -> StepOutcome<S>,
    {
        let mut visited: HashSet<S> = HashSet::from([self.current.clone()]);
        let mut changes = 0;

        for steps in 1..=max_steps.get() {
            match step(self) {
                StepOutcome::Changed { to, .. } => {
                    if !visited.insert(to.clone()) {
                        self.sink.cycle_detected(&to, steps);
                        return Err(Fault::CycleDetected {
                            state: to.name().to_string(),
                            steps,
                        });
                    }
                    changes += 1;
                }
                StepOutcome::NoTransition | StepOutcome::SelfTransition { .. } => {
                    self.sink.settled(steps, changes);
                    return Ok(StabilityOutcome::Stable { steps });
                }
            }
        }

        self.sink.unstable(max_steps.get());
        Ok(StabilityOutcome::Unstable {
            steps: max_steps.get(),
        })
    }
}

/// Single-client form: the same value is read by guards and mutated by
/// actions. Guards see it shared, then the fired action gets it mutably.
impl<S: StateId, T> FiniteStateMachine<S, T, T> {
    pub fn step_client(&mut self, client: &mut T) -> StepOutcome<S> {
        let table = Arc::clone(&self.table);
        match select(&table, &self.current, client) {
            Some((index, transition)) => self.fire(index, transition, client),
            None => StepOutcome::NoTransition,
        }
    }

    pub fn run_client_to_stable(
        &mut self,
        client: &mut T,
        max_steps: NonZeroUsize,
    ) -> Result<StabilityOutcome, Fault> {
        self.run_with(max_steps, |machine| machine.step_client(client))
    }

    pub fn settle_client(&mut self, client: &mut T) -> Result<StabilityOutcome, Fault> {
        let max_steps = self.config.default_max_steps;
        self.run_client_to_stable(client, max_steps)
    }
}

impl<S: StateId, M, C> fmt::Debug for FiniteStateMachine<S, M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteStateMachine")
            .field("current", &self.current)
            .field("states", &self.table.len())
            .field("config", &self.config)
            .field("sink", &self.sink)
            .finish()
    }
}

/// First transition of `current` whose guard passes for `model`.
///
/// `current` is always a key of `table`: construction checks the initial
/// state and validation checks every target.
fn select<'t, S: StateId, M, C>(
    table: &'t StateTable<S, M, C>,
    current: &S,
    model: &M,
) -> Option<(usize, &'t Transition<S, M, C>)> {
    let state = table.get(current);
    debug_assert!(state.is_some(), "current state {current:?} missing from table");
    let state = state?;
    let index = state.find_first_matching_transition_index(model)?;
    state.transition(index).map(|transition| (index, transition))
}

fn default_sink<S: StateId>(config: &MachineConfig) -> Arc<dyn TraceSink<S>> {
    if config.trace {
        Arc::new(TracingSink)
    } else {
        Arc::new(SilentSink)
    }
}
