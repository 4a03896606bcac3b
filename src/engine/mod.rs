//! The engine that walks a state table.
//!
//! # Key Concepts
//!
//! - **Step**: fire at most one transition, the first whose guard passes
//! - **Run to stable**: step until nothing moves, within a hard step budget
//! - **Cycle guard**: re-entering a state during one run is a fault
//!
//! Models are read by guards, controllers are mutated by actions. When
//! both are the same value use the `*_client` methods.

mod machine;
mod outcome;

pub use machine::FiniteStateMachine;
pub use outcome::{StabilityOutcome, StepOutcome};
