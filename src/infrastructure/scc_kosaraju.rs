use crate::domain::graph::{DirectedGraph, SccResult};
use crate::domain::traits::SccDecomposer;

/// Kosaraju's two-pass SCC decomposition with explicit stacks, so traversal
/// depth never touches the call stack.
pub struct KosarajuSccDecomposer;

impl SccDecomposer for KosarajuSccDecomposer {
    fn decompose(&self, graph: &DirectedGraph) -> SccResult {
        kosaraju_scc(graph)
    }
}

fn kosaraju_scc(graph: &DirectedGraph) -> SccResult {
    let n = graph.node_count();

    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut discovered = vec![false; n];

    for start in 0..n {
        if discovered[start] {
            continue;
        }
        iterative_finish_order(start, graph.forward(), &mut discovered, &mut order);
    }

    let mut component_of = vec![usize::MAX; n];
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();

    // Decreasing finishing time: each unlabeled vertex roots a source
    // component of what remains of the condensation.
    for &v in order.iter().rev() {
        if component_of[v] != usize::MAX {
            continue;
        }

        let cid = components.len();
        component_of[v] = cid;
        stack.push(v);
        let mut comp = Vec::new();

        while let Some(x) = stack.pop() {
            comp.push(x);
            for &p in graph.predecessors(x) {
                if component_of[p] == usize::MAX {
                    component_of[p] = cid;
                    stack.push(p);
                }
            }
        }

        comp.sort_unstable();
        components.push(comp);
    }

    let mut cyclic_component = vec![false; components.len()];

    for (cid, comp) in components.iter().enumerate() {
        if comp.len() > 1 {
            cyclic_component[cid] = true;
            continue;
        }
        let only = comp[0];
        if graph.successors(only).contains(&only) {
            cyclic_component[cid] = true;
        }
    }

    SccResult {
        component_of,
        components,
        cyclic_component,
    }
}

/// Appends every vertex reachable from `start` to `order` once all of its
/// out-edges have been followed. Frames are `(vertex, next out-edge index)`.
fn iterative_finish_order(
    start: usize,
    edges: &[Vec<usize>],
    discovered: &mut [bool],
    order: &mut Vec<usize>,
) {
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    discovered[start] = true;

    while let Some((v, next_i)) = stack.pop() {
        if next_i < edges[v].len() {
            let to = edges[v][next_i];
            stack.push((v, next_i + 1));
            if !discovered[to] {
                discovered[to] = true;
                stack.push((to, 0));
            }
            continue;
        }

        order.push(v);
    }
}
