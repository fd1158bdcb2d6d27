use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use scc_two_sat::domain::graph::DirectedGraph;
use scc_two_sat::domain::traits::SccDecomposer;
use scc_two_sat::infrastructure::scc_kosaraju::KosarajuSccDecomposer;

fn graph(n: usize, edges: &[(usize, usize)]) -> DirectedGraph {
    DirectedGraph::from_edges(n, edges.iter().copied()).expect("graph")
}

fn reachable_from(g: &DirectedGraph, start: usize) -> Vec<bool> {
    let mut seen = vec![false; g.node_count()];
    let mut stack = vec![start];
    seen[start] = true;
    while let Some(u) = stack.pop() {
        for &v in g.successors(u) {
            if !seen[v] {
                seen[v] = true;
                stack.push(v);
            }
        }
    }
    seen
}

#[test]
fn kosaraju_detects_self_loop_as_cyclic() {
    // 0 -> 0
    let g = graph(1, &[(0, 0)]);

    let scc = KosarajuSccDecomposer.decompose(&g);

    assert_eq!(scc.components.len(), 1);
    assert_eq!(scc.components[0], vec![0]);
    assert_eq!(scc.cyclic_component, vec![true]);
}

#[test]
fn kosaraju_detects_two_node_cycle() {
    // 0 <-> 1
    let g = graph(2, &[(0, 1), (1, 0)]);

    let scc = KosarajuSccDecomposer.decompose(&g);

    assert_eq!(scc.components.len(), 1);
    assert_eq!(scc.components[0], vec![0, 1]);
    assert_eq!(scc.cyclic_component, vec![true]);
}

#[test]
fn kosaraju_produces_singletons_for_dag() {
    // 0 -> 1 -> 2
    let g = graph(3, &[(0, 1), (1, 2)]);

    let scc = KosarajuSccDecomposer.decompose(&g);

    assert_eq!(scc.components.len(), 3);
    for comp in scc.components.iter() {
        assert_eq!(comp.len(), 1);
    }
    assert!(scc.cyclic_component.iter().all(|&b| !b));
    // Discovery order follows the chain from its source.
    assert_eq!(scc.component_of, vec![0, 1, 2]);
}

#[test]
fn single_isolated_vertex_is_one_component() {
    let scc = KosarajuSccDecomposer.decompose(&DirectedGraph::new(1));
    assert_eq!(scc.component_sizes(), vec![1]);
    assert_eq!(scc.cyclic_component, vec![false]);
}

#[test]
fn directed_cycle_is_one_component() {
    let k = 6;
    let edges: Vec<(usize, usize)> = (0..k).map(|i| (i, (i + 1) % k)).collect();
    let scc = KosarajuSccDecomposer.decompose(&graph(k, &edges));
    assert_eq!(scc.component_sizes(), vec![k]);
}

#[test]
fn self_loop_does_not_merge_neighbours() {
    // 0 -> 0, 0 -> 1, 1 -> 1
    let scc = KosarajuSccDecomposer.decompose(&graph(2, &[(0, 0), (0, 1), (1, 1)]));
    assert_eq!(scc.component_count(), 2);
    assert!(!scc.same_component(0, 1));
    assert_eq!(scc.cyclic_component, vec![true, true]);
}

#[test]
fn parallel_edges_do_not_change_partition() {
    let a = KosarajuSccDecomposer.decompose(&graph(3, &[(0, 1), (1, 0), (1, 2)]));
    let b = KosarajuSccDecomposer.decompose(&graph(
        3,
        &[(0, 1), (0, 1), (1, 0), (1, 2), (1, 2), (1, 0)],
    ));
    assert_eq!(a.components, b.components);
}

fn five_component_graph() -> DirectedGraph {
    let mut edges = Vec::new();
    // 7-cycle on 0..7, 3-cycles on 7..10 and 10..13, singletons 13 and 14.
    for (start, len) in [(0, 7), (7, 3), (10, 3)] {
        for i in 0..len {
            edges.push((start + i, start + (i + 1) % len));
        }
    }
    edges.extend([(6, 7), (9, 10), (12, 13), (13, 14)]);
    graph(15, &edges)
}

#[test]
fn largest_components_query() {
    let scc = KosarajuSccDecomposer.decompose(&five_component_graph());
    assert_eq!(scc.largest_component_sizes(5), vec![7, 3, 3, 1, 1]);
    assert_eq!(scc.largest_component_sizes(3), vec![7, 3, 3]);
    assert_eq!(scc.largest_component_sizes(7), vec![7, 3, 3, 1, 1, 0, 0]);
}

#[test]
fn disconnected_pieces_are_all_covered() {
    // Two 2-cycles with no edges between them, plus an isolated vertex.
    let scc = KosarajuSccDecomposer.decompose(&graph(5, &[(0, 1), (1, 0), (3, 4), (4, 3)]));
    assert_eq!(scc.component_count(), 3);
    assert!(scc.component_of.iter().all(|&c| c != usize::MAX));
    assert!(scc.same_component(3, 4));
    assert!(!scc.same_component(1, 3));
}

#[test]
fn decomposition_is_deterministic() {
    let g = five_component_graph();
    let a = KosarajuSccDecomposer.decompose(&g);
    let b = KosarajuSccDecomposer.decompose(&g);
    assert_eq!(a, b);
}

#[test]
fn labeling_matches_brute_force_mutual_reachability() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);

    for _ in 0..300 {
        let n = rng.gen_range(1..=10);
        let m = rng.gen_range(0..=2 * n);
        let edges: Vec<(usize, usize)> = (0..m)
            .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
            .collect();
        let g = graph(n, &edges);

        let scc = KosarajuSccDecomposer.decompose(&g);
        let reach: Vec<Vec<bool>> = (0..n).map(|u| reachable_from(&g, u)).collect();

        for u in 0..n {
            for v in 0..n {
                let mutual = reach[u][v] && reach[v][u];
                assert_eq!(
                    scc.same_component(u, v),
                    mutual,
                    "u={u} v={v} edges={edges:?}"
                );
            }
        }

        // Component ids follow a topological order of the condensation.
        for &(u, v) in &edges {
            assert!(scc.component_of[u] <= scc.component_of[v], "edges={edges:?}");
        }

        let covered: usize = scc.component_sizes().iter().sum();
        assert_eq!(covered, n);
    }
}

#[test]
fn long_chain_does_not_overflow_the_stack() {
    let n = 200_000;
    let edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
    let scc = KosarajuSccDecomposer.decompose(&graph(n, &edges));
    assert_eq!(scc.component_count(), n);
    assert_eq!(scc.component_of[0], 0);
    assert_eq!(scc.component_of[n - 1], n - 1);
}

#[test]
fn long_cycle_is_a_single_component() {
    let n = 200_000;
    let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    let scc = KosarajuSccDecomposer.decompose(&graph(n, &edges));
    assert_eq!(scc.largest_component_sizes(2), vec![n, 0]);
}
