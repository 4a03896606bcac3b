//! Guard predicates for selecting transitions.
//!
//! Guards are pure boolean functions over a model value. They decide
//! whether a transition is eligible; they never perform the transition.

use std::fmt;

/// Pure predicate that determines if a transition can fire.
///
/// Guards are evaluated in declaration order when a state looks for its
/// first matching transition. A guard may read anything reachable
/// through the model, but it must not change engine state.
///
/// # Example
///
/// ```rust
/// use statetable::core::Guard;
///
/// struct Sensor {
///     level: u32,
/// }
///
/// let overflowing = Guard::new(|s: &Sensor| s.level > 100);
///
/// assert!(overflowing.check(&Sensor { level: 120 }));
/// assert!(!overflowing.check(&Sensor { level: 80 }));
/// ```
pub struct Guard<M> {
    predicate: Box<dyn Fn(&M) -> bool + Send + Sync>,
}

impl<M> Guard<M> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic for a given model and
    /// thread-safe (Send + Sync), since tables are shared.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&M) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// A guard that always passes.
    pub fn always() -> Self {
        Guard::new(|_| true)
    }

    /// Check if the guard passes for this model.
    pub fn check(&self, model: &M) -> bool {
        (self.predicate)(model)
    }
}

impl<M> fmt::Debug for Guard<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
