use thiserror::Error;

/// Terminal failures of the core algorithms.
///
/// Every variant aborts the call that produced it; no partially built graph or
/// labeling escapes alongside the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRangeVertex { vertex: usize, vertex_count: usize },

    #[error("clause {clause}: literal {literal} references a variable outside 1..={variables}")]
    OutOfRangeVariable {
        clause: usize,
        literal: i32,
        variables: usize,
    },

    #[error("clause {clause}: zero is not a valid literal")]
    MalformedClause { clause: usize },

    #[error("component labeling covers {actual} vertices, expected {expected}")]
    LabelingMismatch { expected: usize, actual: usize },

    #[error("derived assignment violates clause {clause}")]
    AssignmentRejected { clause: usize },

    #[error("cannot allocate a graph with {requested} vertices")]
    TooManyVertices { requested: usize },

    #[error("{variables} variables exceed the largest literal-addressable count {limit}")]
    TooManyVariables { variables: usize, limit: usize },
}
