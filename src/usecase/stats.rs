use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SolveStats {
    pub instances: usize,
    pub satisfiable: usize,
    pub unsatisfiable: usize,
    pub graph_nodes: usize,
    pub graph_edges: usize,
    pub components: usize,
}

impl SolveStats {
    pub fn absorb(&mut self, other: &SolveStats) {
        self.instances += other.instances;
        self.satisfiable += other.satisfiable;
        self.unsatisfiable += other.unsatisfiable;
        self.graph_nodes += other.graph_nodes;
        self.graph_edges += other.graph_edges;
        self.components += other.components;
    }
}
