//! Statetable: a table-driven finite state machine engine
//!
//! A machine is described once, as a static table of states. Each state
//! lists its outgoing transitions in priority order; each transition is a
//! guard over a model, an action over a controller, and a target state.
//! The engine then drives a client through that table: at every step the
//! first transition whose guard passes fires, and `run_to_stable` keeps
//! stepping until nothing moves any more.
//!
//! # Core Concepts
//!
//! - **StateId**: hashable identity of a state, usually an enum from `state_ids!`
//! - **Transition**: guard + action + target; declaration order decides ties
//! - **StateTable**: validated, immutable, shareable set of states
//! - **FiniteStateMachine**: current state plus `step` / `run_to_stable`
//!
//! Tables are validated when built: duplicate ids and transitions to
//! undeclared states are rejected with `Fault::InvalidTable`. A run that
//! revisits a state fails with `Fault::CycleDetected` instead of looping.
//!
//! # Example
//!
//! ```rust
//! use statetable::{state_ids, FiniteStateMachine, StabilityOutcome, State, StepOutcome, Transition};
//! use std::num::NonZeroUsize;
//!
//! state_ids! {
//!     enum Turnstile {
//!         Locked,
//!         Unlocked,
//!     }
//! }
//!
//! struct Inputs {
//!     coin: bool,
//!     push: bool,
//! }
//!
//! #[derive(Default)]
//! struct Gate {
//!     unlocks: u32,
//! }
//!
//! let states = vec![
//!     State::new(Turnstile::Locked, vec![
//!         Transition::new(|i: &Inputs| i.coin, |g: &mut Gate| g.unlocks += 1, Turnstile::Unlocked),
//!         Transition::goto(|i: &Inputs| i.push, Turnstile::Locked),
//!     ]),
//!     State::new(Turnstile::Unlocked, vec![
//!         Transition::goto(|i: &Inputs| i.push, Turnstile::Locked),
//!         Transition::goto(|i: &Inputs| i.coin, Turnstile::Unlocked),
//!     ]),
//! ];
//!
//! let mut machine = FiniteStateMachine::new(states, Turnstile::Locked).unwrap();
//! let mut gate = Gate::default();
//! let coin = Inputs { coin: true, push: false };
//!
//! let outcome = machine.step(&coin, &mut gate);
//! assert!(matches!(outcome, StepOutcome::Changed { .. }));
//!
//! let outcome = machine
//!     .run_to_stable(&coin, &mut gate, NonZeroUsize::new(2).unwrap())
//!     .unwrap();
//! assert_eq!(outcome, StabilityOutcome::Stable { steps: 1 });
//! assert_eq!(machine.current_state(), &Turnstile::Unlocked);
//! assert_eq!(gate.unlocks, 1);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod table;
pub mod trace;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, StateBuilder, TransitionBuilder};
pub use config::MachineConfig;
pub use crate::core::{Action, Guard, StateId};
pub use engine::{FiniteStateMachine, StabilityOutcome, StepOutcome};
pub use error::{Fault, TableViolation};
pub use table::{State, StateTable, Transition};
pub use trace::{SilentSink, TraceSink, TracingSink};
