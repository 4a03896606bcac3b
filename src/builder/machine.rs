//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::StateId;
use crate::engine::FiniteStateMachine;
use crate::table::{State, StateTable};
use crate::trace::TraceSink;
use std::sync::Arc;

/// Builder for constructing machines with a fluent API.
///
/// States are either declared one by one or taken from a shared table,
/// never both.
pub struct MachineBuilder<S: StateId, M, C> {
    initial: Option<S>,
    states: Vec<State<S, M, C>>,
    table: Option<Arc<StateTable<S, M, C>>>,
    config: MachineConfig,
    sink: Option<Arc<dyn TraceSink<S>>>,
}

impl<S: StateId, M, C> MachineBuilder<S, M, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            table: None,
            config: MachineConfig::default(),
            sink: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare one state.
    pub fn state(mut self, state: State<S, M, C>) -> Self {
        self.states.push(state);
        self
    }

    /// Declare several states at once.
    pub fn states(mut self, states: Vec<State<S, M, C>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Drive an already validated table shared with other machines.
    pub fn table(mut self, table: Arc<StateTable<S, M, C>>) -> Self {
        self.table = Some(table);
        self
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Send diagnostics to `sink` instead of the configured default.
    pub fn sink<T>(mut self, sink: T) -> Self
    where
        T: TraceSink<S> + 'static,
    {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing or the table is invalid.
    pub fn build(self) -> Result<FiniteStateMachine<S, M, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let table = match self.table {
            Some(_) if !self.states.is_empty() => return Err(BuildError::ConflictingStates),
            Some(table) => table,
            None if self.states.is_empty() => return Err(BuildError::NoStates),
            None => Arc::new(StateTable::new(self.states)?),
        };

        FiniteStateMachine::assemble(table, initial, self.config, self.sink)
            .map_err(BuildError::from)
    }
}

impl<S: StateId, M, C> Default for MachineBuilder<S, M, C> {
    fn default() -> Self {
        Self::new()
    }
}
