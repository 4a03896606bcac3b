//! Well-formedness checks for state tables.
//!
//! Checks use `Validation` so that every problem in a table is reported
//! in one pass instead of stopping at the first.

use crate::core::StateId;
use crate::error::{Fault, TableViolation};
use crate::table::state::State;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking a table, with every violation accumulated.
pub type TableCheck = Validation<(), NonEmptyVec<TableViolation>>;

/// Check a list of state declarations, accumulating ALL violations.
///
/// - every id is declared once
/// - every transition target names a declared state
pub fn check_states<S: StateId, M, C>(states: &[State<S, M, C>]) -> TableCheck {
    let mut checks: Vec<TableCheck> = Vec::new();
    let mut declared: HashSet<&S> = HashSet::with_capacity(states.len());

    for state in states {
        let check = if declared.insert(state.id()) {
            Validation::success(())
        } else {
            Validation::fail(TableViolation::DuplicateState {
                state: state.id().name().to_string(),
            })
        };
        checks.push(check);
    }

    for state in states {
        for (index, transition) in state.transitions().iter().enumerate() {
            let check = if declared.contains(transition.target()) {
                Validation::success(())
            } else {
                Validation::fail(TableViolation::UnknownTarget {
                    state: state.id().name().to_string(),
                    index,
                    target: transition.target().name().to_string(),
                })
            };
            checks.push(check);
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Convert a table check into the engine's fault type.
pub fn into_fault(check: TableCheck) -> Result<(), Fault> {
    match check {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(Fault::InvalidTable {
            violations: errors.iter().cloned().collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::transition::Transition;

    type TestState = State<&'static str, (), ()>;

    fn state(id: &'static str, targets: &[&'static str]) -> TestState {
        State::new(
            id,
            targets
                .iter()
                .map(|target| Transition::goto(|_| true, *target))
                .collect(),
        )
    }

    #[test]
    fn well_formed_table_passes() {
        let states = vec![state("A", &["B"]), state("B", &["A", "B"])];
        assert!(check_states(&states).is_success());
        assert!(into_fault(check_states(&states)).is_ok());
    }

    #[test]
    fn empty_table_passes() {
        let states: Vec<TestState> = Vec::new();
        assert!(check_states(&states).is_success());
    }

    #[test]
    fn unknown_target_is_reported_with_position() {
        let states = vec![state("A", &["B", "Missing"]), state("B", &[])];

        let result = into_fault(check_states(&states));

        assert_eq!(
            result,
            Err(Fault::InvalidTable {
                violations: vec![TableViolation::UnknownTarget {
                    state: "A".to_string(),
                    index: 1,
                    target: "Missing".to_string(),
                }],
            })
        );
    }

    #[test]
    fn check_accumulates_all_violations() {
        let states = vec![
            state("A", &["X"]),
            state("B", &["Y"]),
            state("A", &["B"]),
        ];

        let result = check_states(&states);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                let has_duplicate = errors
                    .iter()
                    .any(|e| matches!(e, TableViolation::DuplicateState { .. }));
                let unknown_targets = errors
                    .iter()
                    .filter(|e| matches!(e, TableViolation::UnknownTarget { .. }))
                    .count();

                assert!(has_duplicate);
                assert_eq!(unknown_targets, 2);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }
}
