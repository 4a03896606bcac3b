//! Core building blocks of a state table.
//!
//! This module contains the pieces every table is assembled from:
//! - State identity via the `StateId` trait
//! - Guard predicates evaluated against a model
//! - Actions applied to a controller
//!
//! Guards are pure. Actions are the only place side effects enter the
//! machine, and the engine runs each one at most once per step.

mod action;
mod guard;
mod id;

pub use action::Action;
pub use guard::Guard;
pub use id::StateId;
