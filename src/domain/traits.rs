use crate::domain::graph::{DirectedGraph, SccResult};
use crate::domain::model::TwoSatInstance;

pub trait SccDecomposer {
    fn decompose(&self, graph: &DirectedGraph) -> SccResult;
}

/// Incomplete search for a satisfying assignment: `None` means none was found,
/// not that none exists.
pub trait AssignmentSearch {
    fn search(&self, instance: &TwoSatInstance) -> Option<Vec<bool>>;
}
