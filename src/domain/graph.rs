use crate::domain::error::SolverError;

/// Directed graph over dense vertex ids `0..node_count`, holding both the
/// forward adjacency and its transpose.
///
/// `reverse` is always the exact transpose of `forward`. The structure is
/// append-only; parallel edges are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    forward: Vec<Vec<usize>>,
    reverse: Vec<Vec<usize>>,
}

impl DirectedGraph {
    pub fn new(node_count: usize) -> Self {
        Self {
            forward: vec![Vec::new(); node_count],
            reverse: vec![Vec::new(); node_count],
        }
    }

    /// Like [`DirectedGraph::new`], but reports a vertex count that cannot be
    /// allocated instead of aborting.
    pub fn try_new(node_count: usize) -> Result<Self, SolverError> {
        let too_many = |_| SolverError::TooManyVertices {
            requested: node_count,
        };
        let mut forward = Vec::new();
        forward.try_reserve_exact(node_count).map_err(too_many)?;
        let mut reverse = Vec::new();
        reverse.try_reserve_exact(node_count).map_err(too_many)?;
        forward.resize_with(node_count, Vec::new);
        reverse.resize_with(node_count, Vec::new);
        Ok(Self { forward, reverse })
    }

    /// Builds a graph from 0-based `(from, to)` pairs, stopping at the first
    /// out-of-range edge.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self, SolverError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut g = Self::try_new(node_count)?;
        for (u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), SolverError> {
        let n = self.node_count();
        for vertex in [u, v] {
            if vertex >= n {
                return Err(SolverError::OutOfRangeVertex {
                    vertex,
                    vertex_count: n,
                });
            }
        }
        self.forward[u].push(v);
        self.reverse[v].push(u);
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.forward.len()
    }

    pub fn edge_count(&self) -> usize {
        self.forward.iter().map(|v| v.len()).sum()
    }

    pub fn successors(&self, u: usize) -> &[usize] {
        &self.forward[u]
    }

    pub fn predecessors(&self, v: usize) -> &[usize] {
        &self.reverse[v]
    }

    pub fn forward(&self) -> &[Vec<usize>] {
        &self.forward
    }

    pub fn reverse(&self) -> &[Vec<usize>] {
        &self.reverse
    }
}

/// Component labeling produced by an [`SccDecomposer`](crate::domain::traits::SccDecomposer).
///
/// Component ids follow discovery order of the labeling pass: id 0 is the
/// first component found, and ids increase along a topological order of the
/// condensation DAG.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SccResult {
    pub component_of: Vec<usize>,
    pub components: Vec<Vec<usize>>,
    pub cyclic_component: Vec<bool>,
}

impl SccResult {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn component_sizes(&self) -> Vec<usize> {
        self.components.iter().map(|c| c.len()).collect()
    }

    pub fn same_component(&self, u: usize, v: usize) -> bool {
        self.component_of[u] == self.component_of[v]
    }

    /// Sizes of the `k` largest components, descending, zero-padded to `k`.
    pub fn largest_component_sizes(&self, k: usize) -> Vec<usize> {
        let mut sizes = self.component_sizes();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.resize(k, 0);
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_keeps_reverse_as_transpose() {
        let mut g = DirectedGraph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        g.add_edge(2, 1).unwrap();
        g.add_edge(0, 1).unwrap();

        assert_eq!(g.successors(0), &[1, 2, 1]);
        assert_eq!(g.predecessors(1), &[0, 2, 0]);
        assert_eq!(g.predecessors(2), &[0]);
        assert!(g.predecessors(0).is_empty());
        assert_eq!(g.edge_count(), 4);

        for (u, outs) in g.forward().iter().enumerate() {
            for &v in outs {
                assert!(g.reverse()[v].contains(&u));
            }
        }
    }

    #[test]
    fn add_edge_rejects_out_of_range_and_leaves_graph_untouched() {
        let mut g = DirectedGraph::new(2);
        let err = g.add_edge(0, 2).unwrap_err();
        assert_eq!(
            err,
            SolverError::OutOfRangeVertex {
                vertex: 2,
                vertex_count: 2
            }
        );
        assert_eq!(g.edge_count(), 0);
        assert!(g.predecessors(0).is_empty());
    }

    #[test]
    fn zero_vertex_graph_is_allowed() {
        let g = DirectedGraph::new(0);
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn try_new_reports_unallocatable_vertex_counts() {
        assert_eq!(
            DirectedGraph::try_new(usize::MAX).unwrap_err(),
            SolverError::TooManyVertices {
                requested: usize::MAX
            }
        );
        assert_eq!(DirectedGraph::try_new(3).expect("alloc"), DirectedGraph::new(3));
    }

    #[test]
    fn from_edges_stops_at_first_bad_edge() {
        let err = DirectedGraph::from_edges(3, [(0, 1), (5, 0), (1, 2)]).unwrap_err();
        assert!(matches!(err, SolverError::OutOfRangeVertex { vertex: 5, .. }));
    }

    #[test]
    fn largest_component_sizes_sorts_truncates_and_pads() {
        let scc = SccResult {
            component_of: vec![0, 0, 1, 2, 2, 2],
            components: vec![vec![0, 1], vec![2], vec![3, 4, 5]],
            cyclic_component: vec![true, false, true],
        };
        assert_eq!(scc.largest_component_sizes(2), vec![3, 2]);
        assert_eq!(scc.largest_component_sizes(5), vec![3, 2, 1, 0, 0]);
        assert!(scc.same_component(3, 5));
        assert!(!scc.same_component(1, 2));
    }
}
