//! Build errors for transition and machine builders.

use crate::error::Fault;
use thiserror::Error;

/// Errors that can occur when building transitions and machines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Transition guard not specified. Call .when(predicate) or .always()")]
    MissingGuard,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingTarget,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add states or a shared table")]
    NoStates,

    #[error("Both states and a shared table given. Use .state()/.states() or .table(), not both")]
    ConflictingStates,

    #[error(transparent)]
    Fault(#[from] Fault),
}
