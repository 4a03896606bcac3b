//! Faults raised while building tables and driving machines.

use thiserror::Error;

/// A single well-formedness problem found in a state table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("Transition {index} of state '{state}' targets unknown state '{target}'")]
    UnknownTarget {
        state: String,
        index: usize,
        target: String,
    },

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: String },
}

/// Faults reported by the engine.
///
/// Table and initial-state faults happen at construction and are not
/// recoverable for that table. `CycleDetected` is raised by
/// `run_to_stable` only; the caller decides whether to retry with
/// different input or surface it as a machine fault.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Fault {
    #[error(
        "Invalid state table: {} violation(s), first: {}",
        .violations.len(),
        first_violation(.violations)
    )]
    InvalidTable { violations: Vec<TableViolation> },

    #[error("Initial state '{state}' is not in the table")]
    UnknownInitialState { state: String },

    #[error("Cycle detected: state '{state}' revisited after {steps} step(s)")]
    CycleDetected { state: String, steps: usize },
}

impl Fault {
    /// Violations carried by an `InvalidTable` fault, empty otherwise.
    pub fn violations(&self) -> &[TableViolation] {
        match self {
            Fault::InvalidTable { violations } => violations,
            _ => &[],
        }
    }
}

fn first_violation(violations: &[TableViolation]) -> String {
    violations
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "none".to_string())
}
