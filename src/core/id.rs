//! Identity of the states in a table.
//!
//! Every state in a table is keyed by a value implementing `StateId`.
//! Ids are compared for equality and hashed for lookup, and they carry a
//! display name used in diagnostics and fault messages.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// All methods are pure. An id is an opaque tag; it says nothing about
/// the transitions leaving the state it names.
///
/// # Required Traits
///
/// - `Clone`: the engine keeps its own copy of the current id
/// - `Eq` + `Hash`: ids key the state table and the visited set
/// - `Debug`: ids are debuggable for diagnostics
/// - `Send` + `Sync`: tables are shared across threads
///
/// # Example
///
/// ```rust
/// use statetable::core::StateId;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl StateId for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait StateId: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl StateId for &'static str {
    fn name(&self) -> &str {
        *self
    }
}

impl StateId for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
