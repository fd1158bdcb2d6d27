/// A disjunction of two literals.
///
/// Literals are nonzero signed integers: `x` means "variable x is true",
/// `-x` means "variable x is false". Variables are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clause {
    pub a: i32,
    pub b: i32,
}

impl Clause {
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    pub fn literals(&self) -> [i32; 2] {
        [self.a, self.b]
    }

    /// A zero literal, or one naming a variable past the end of
    /// `assignment`, never holds.
    pub fn is_satisfied_by(&self, assignment: &[bool]) -> bool {
        literal_value(self.a, assignment) || literal_value(self.b, assignment)
    }
}

impl From<(i32, i32)> for Clause {
    fn from((a, b): (i32, i32)) -> Self {
        Self::new(a, b)
    }
}

pub fn literal_value(literal: i32, assignment: &[bool]) -> bool {
    let Some(index) = (literal.unsigned_abs() as usize).checked_sub(1) else {
        return false;
    };
    match assignment.get(index) {
        Some(&value) => value == (literal > 0),
        None => false,
    }
}

/// Implication-graph vertex of a literal over `variables` variables.
///
/// Variable `i` is true at vertex `i - 1` and false at vertex `i - 1 + variables`.
pub fn literal_vertex(literal: i32, variables: usize) -> usize {
    let index = literal.unsigned_abs() as usize - 1;
    if literal < 0 {
        index + variables
    } else {
        index
    }
}

/// Vertex of the negation of `literal`.
pub fn negated_literal_vertex(literal: i32, variables: usize) -> usize {
    let index = literal.unsigned_abs() as usize - 1;
    if literal < 0 {
        index
    } else {
        index + variables
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwoSatInstance {
    pub variables: usize,
    pub clauses: Vec<Clause>,
}

impl TwoSatInstance {
    pub fn new(variables: usize, clauses: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            variables,
            clauses: clauses.into_iter().collect(),
        }
    }

    /// Indices of the clauses that `assignment` leaves false.
    pub fn unsatisfied_clauses(&self, assignment: &[bool]) -> Vec<usize> {
        self.clauses
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_satisfied_by(assignment))
            .map(|(i, _)| i)
            .collect()
    }
}

/// A directed graph as read from input: `vertices` and 1-based edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphInstance {
    pub vertices: usize,
    pub edges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SatOutcome {
    pub satisfiable: bool,
    /// `assignment[i - 1]` is the value of variable `i`.
    pub assignment: Option<Vec<bool>>,
}

impl SatOutcome {
    pub fn unsatisfiable() -> Self {
        Self {
            satisfiable: false,
            assignment: None,
        }
    }
}
