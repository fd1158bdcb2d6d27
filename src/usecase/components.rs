use crate::domain::error::SolverError;
use crate::domain::graph::DirectedGraph;
use crate::domain::model::GraphInstance;
use crate::domain::traits::SccDecomposer;
use crate::usecase::event::{emit, AppEvent};
use anyhow::{Context, Result};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentsOutcome {
    pub vertices: usize,
    pub edges: usize,
    pub components: usize,
    pub cyclic_components: usize,
    /// Sizes of the `k` largest components, descending, zero-padded.
    pub largest: Vec<usize>,
}

/// Builds the forward/reverse graph from 1-based input edges.
pub fn build_graph(instance: &GraphInstance) -> Result<DirectedGraph, SolverError> {
    let n = instance.vertices;
    let mut g = DirectedGraph::try_new(n)?;
    for &(u, v) in &instance.edges {
        for vertex in [u, v] {
            if vertex == 0 || vertex > n {
                return Err(SolverError::OutOfRangeVertex {
                    vertex,
                    vertex_count: n,
                });
            }
        }
        g.add_edge(u - 1, v - 1)?;
    }
    Ok(g)
}

pub async fn largest_components(
    source: &str,
    instance: &GraphInstance,
    decomposer: &dyn SccDecomposer,
    k: usize,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<ComponentsOutcome> {
    emit(
        &sink,
        AppEvent::GraphLoaded {
            source: source.to_string(),
            vertices: instance.vertices,
            edges: instance.edges.len(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "build_graph".into(),
        },
    )
    .await;
    let graph = build_graph(instance).with_context(|| format!("building graph for {source}"))?;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "build_graph".into(),
        },
    )
    .await;

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let scc = decomposer.decompose(&graph);
    let cyclic_components = scc.cyclic_component.iter().filter(|&&b| b).count();
    emit(
        &sink,
        AppEvent::SccComputed {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components: scc.component_count(),
            cyclic_components,
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    let largest = scc.largest_component_sizes(k);
    emit(
        &sink,
        AppEvent::LargestComponents {
            source: source.to_string(),
            sizes: largest.clone(),
        },
    )
    .await;

    Ok(ComponentsOutcome {
        vertices: graph.node_count(),
        edges: graph.edge_count(),
        components: scc.component_count(),
        cyclic_components,
        largest,
    })
}
