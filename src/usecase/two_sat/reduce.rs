use crate::domain::error::SolverError;
use crate::domain::graph::DirectedGraph;
use crate::domain::model::{literal_vertex, negated_literal_vertex, TwoSatInstance};

/// Largest variable count a clause literal can address.
pub const MAX_VARIABLES: usize = i32::MAX as usize;

/// Number of implication-graph vertices for `variables` variables.
pub fn literal_vertex_count(variables: usize) -> Result<usize, SolverError> {
    let too_many = SolverError::TooManyVariables {
        variables,
        limit: MAX_VARIABLES,
    };
    if variables > MAX_VARIABLES {
        return Err(too_many);
    }
    variables.checked_mul(2).ok_or(too_many)
}

/// Checks the variable count and every literal before any edge is built.
pub fn validate_clauses(instance: &TwoSatInstance) -> Result<(), SolverError> {
    let n = instance.variables;
    literal_vertex_count(n)?;
    for (i, clause) in instance.clauses.iter().enumerate() {
        for literal in clause.literals() {
            if literal == 0 {
                return Err(SolverError::MalformedClause { clause: i });
            }
            if literal.unsigned_abs() as usize > n {
                return Err(SolverError::OutOfRangeVariable {
                    clause: i,
                    literal,
                    variables: n,
                });
            }
        }
    }
    Ok(())
}

/// Implication graph over `2n` literal vertices: clause `(a ∨ b)` becomes
/// `¬a → b` and `¬b → a`.
pub fn build_implication_graph(instance: &TwoSatInstance) -> Result<DirectedGraph, SolverError> {
    validate_clauses(instance)?;

    let n = instance.variables;
    let mut g = DirectedGraph::try_new(literal_vertex_count(n)?)?;
    for clause in &instance.clauses {
        let (a, b) = (clause.a, clause.b);
        g.add_edge(negated_literal_vertex(a, n), literal_vertex(b, n))?;
        g.add_edge(negated_literal_vertex(b, n), literal_vertex(a, n))?;
    }
    Ok(g)
}
