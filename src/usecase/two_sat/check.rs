use crate::domain::error::SolverError;
use crate::domain::model::{Clause, SatOutcome};
use crate::usecase::two_sat::reduce::literal_vertex_count;

/// Splits a labeling of the `2n` literal vertices into the components of the
/// true literals and those of the false literals.
pub fn split_labeling(
    scc_id: &[usize],
    variables: usize,
) -> Result<(&[usize], &[usize]), SolverError> {
    let expected = literal_vertex_count(variables)?;
    if scc_id.len() != expected {
        return Err(SolverError::LabelingMismatch {
            expected,
            actual: scc_id.len(),
        });
    }
    Ok(scc_id.split_at(variables))
}

/// First variable (1-based) whose true and false literals share a component.
pub fn contradiction(positive: &[usize], negative: &[usize]) -> Option<usize> {
    positive
        .iter()
        .zip(negative)
        .position(|(p, q)| p == q)
        .map(|i| i + 1)
}

/// Decides satisfiability from a component labeling of the implication graph
/// and, if asked, derives an assignment from component order.
pub fn check(
    scc_id: &[usize],
    variables: usize,
    want_assignment: bool,
) -> Result<SatOutcome, SolverError> {
    let (positive, negative) = split_labeling(scc_id, variables)?;

    if contradiction(positive, negative).is_some() {
        return Ok(SatOutcome::unsatisfiable());
    }

    Ok(SatOutcome {
        satisfiable: true,
        assignment: want_assignment.then(|| derive_assignment(positive, negative)),
    })
}

/// Component ids grow along the condensation's topological order, so the
/// literal with the larger id is the one closer to a sink and is made true.
pub fn derive_assignment(positive: &[usize], negative: &[usize]) -> Vec<bool> {
    positive.iter().zip(negative).map(|(p, q)| p > q).collect()
}

pub fn verify_assignment(clauses: &[Clause], assignment: &[bool]) -> Result<(), SolverError> {
    match clauses.iter().position(|c| !c.is_satisfied_by(assignment)) {
        Some(clause) => Err(SolverError::AssignmentRejected { clause }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_component_is_unsatisfiable() {
        // x1 and ¬x1 both in component 0
        let outcome = check(&[0, 0], 1, true).expect("check");
        assert_eq!(outcome, SatOutcome::unsatisfiable());
        assert_eq!(contradiction(&[0, 1], &[2, 1]), Some(2));
        assert_eq!(contradiction(&[0, 1], &[2, 3]), None);
    }

    #[test]
    fn later_component_literal_is_chosen() {
        // x1 in 1, ¬x1 in 0 -> true; x2 in 2, ¬x2 in 3 -> false
        let outcome = check(&[1, 2, 0, 3], 2, true).expect("check");
        assert!(outcome.satisfiable);
        assert_eq!(outcome.assignment, Some(vec![true, false]));

        let outcome = check(&[1, 2, 0, 3], 2, false).expect("check");
        assert_eq!(outcome.assignment, None);
    }

    #[test]
    fn labeling_length_must_be_twice_the_variables() {
        assert_eq!(
            check(&[0, 1, 2], 2, false).unwrap_err(),
            SolverError::LabelingMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn oversized_variable_count_is_an_error_not_a_panic() {
        assert!(matches!(
            check(&[], usize::MAX / 2 + 1, true).unwrap_err(),
            SolverError::TooManyVariables { .. }
        ));
        assert!(matches!(
            check(&[], 1usize << 62, false).unwrap_err(),
            SolverError::TooManyVariables { .. }
        ));
    }

    #[test]
    fn zero_variables_is_vacuously_satisfiable() {
        let outcome = check(&[], 0, true).expect("check");
        assert!(outcome.satisfiable);
        assert_eq!(outcome.assignment, Some(vec![]));
    }

    #[test]
    fn verify_reports_first_violated_clause() {
        let clauses = [Clause::new(1, 2), Clause::new(-1, 2), Clause::new(-2, -2)];
        assert_eq!(
            verify_assignment(&clauses, &[true, false]).unwrap_err(),
            SolverError::AssignmentRejected { clause: 1 }
        );
        assert!(verify_assignment(&clauses[..2], &[false, true]).is_ok());
        assert!(verify_assignment(&[Clause::new(3, 0)], &[true]).is_err());
    }
}
