pub mod check;
pub mod reduce;

use crate::domain::error::SolverError;
use crate::domain::graph::{DirectedGraph, SccResult};
use crate::domain::model::{SatOutcome, TwoSatInstance};
use crate::domain::traits::{AssignmentSearch, SccDecomposer};
use crate::infrastructure::papadimitriou::PapadimitriouSearch;
use crate::usecase::event::{emit, AppEvent};
use crate::usecase::stats::SolveStats;
use anyhow::{anyhow, Context, Result};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Implication graph + SCC decomposition; exact.
    #[default]
    Kosaraju,
    /// Randomized local search; "unsatisfiable" only means no assignment was found.
    LocalSearch,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Kosaraju => "kosaraju",
            Strategy::LocalSearch => "local-search",
        }
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "kosaraju" | "scc" => Ok(Strategy::Kosaraju),
            "local-search" | "papadimitriou" => Ok(Strategy::LocalSearch),
            other => Err(anyhow!("unknown strategy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    pub want_assignment: bool,
    pub strategy: Strategy,
    pub seed: u64,
    pub trials: Option<usize>,
}

impl SolveOptions {
    fn local_search(&self) -> PapadimitriouSearch {
        let search = PapadimitriouSearch::new(self.seed);
        match self.trials {
            Some(t) => search.with_trials(t),
            None => search,
        }
    }
}

/// Solves one instance without emitting events.
pub fn solve_instance(
    instance: &TwoSatInstance,
    decomposer: &dyn SccDecomposer,
    options: &SolveOptions,
) -> Result<(SatOutcome, SolveStats)> {
    let mut stats = SolveStats {
        instances: 1,
        ..SolveStats::default()
    };

    let outcome = match options.strategy {
        Strategy::Kosaraju => {
            let graph = reduce::build_implication_graph(instance)?;
            let scc = decompose(&graph, decomposer, &mut stats);
            decide(instance, &scc, options)?
        }
        Strategy::LocalSearch => local_search_outcome(instance, options)?,
    };

    record_decision(&mut stats, outcome.satisfiable);
    Ok((outcome, stats))
}

/// Solves one instance, emitting progress events to `sink`.
pub async fn solve_two_sat(
    source: &str,
    instance: &TwoSatInstance,
    decomposer: &dyn SccDecomposer,
    options: &SolveOptions,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(SatOutcome, SolveStats)> {
    emit(
        &sink,
        AppEvent::InstanceLoaded {
            source: source.to_string(),
            variables: instance.variables,
            clauses: instance.clauses.len(),
        },
    )
    .await;

    if options.strategy == Strategy::LocalSearch {
        emit(&sink, phase_started("local_search")).await;
        let (outcome, stats) = solve_instance(instance, decomposer, options)
            .with_context(|| format!("solving {source}"))?;
        emit(&sink, phase_finished("local_search")).await;
        finish(&sink, source, &outcome, &stats).await;
        return Ok((outcome, stats));
    }

    let mut stats = SolveStats {
        instances: 1,
        ..SolveStats::default()
    };

    emit(&sink, phase_started("reduce")).await;
    let graph = reduce::build_implication_graph(instance)
        .with_context(|| format!("building implication graph for {source}"))?;
    emit(&sink, phase_finished("reduce")).await;

    emit(&sink, phase_started("scc")).await;
    let scc = decompose(&graph, decomposer, &mut stats);
    emit(
        &sink,
        AppEvent::SccComputed {
            nodes: stats.graph_nodes,
            edges: stats.graph_edges,
            components: stats.components,
            cyclic_components: scc.cyclic_component.iter().filter(|&&b| b).count(),
        },
    )
    .await;
    emit(&sink, phase_finished("scc")).await;
    drop(graph);

    emit(&sink, phase_started("check")).await;
    let (positive, negative) = check::split_labeling(&scc.component_of, instance.variables)?;
    if let Some(variable) = check::contradiction(positive, negative) {
        emit(&sink, AppEvent::ContradictionFound { variable }).await;
    }
    let outcome =
        decide(instance, &scc, options).with_context(|| format!("checking {source}"))?;
    if outcome.assignment.is_some() {
        emit(
            &sink,
            AppEvent::AssignmentVerified {
                variables: instance.variables,
                clauses: instance.clauses.len(),
            },
        )
        .await;
    }
    emit(&sink, phase_finished("check")).await;

    record_decision(&mut stats, outcome.satisfiable);
    finish(&sink, source, &outcome, &stats).await;
    Ok((outcome, stats))
}

/// Solves independent instances concurrently, one blocking task each.
///
/// Results keep input order. Every task is awaited before the batch returns,
/// so a failure never leaves instances running in the background; the first
/// failure in input order fails the batch.
pub async fn solve_batch<D>(
    instances: Vec<(String, TwoSatInstance)>,
    decomposer: Arc<D>,
    options: SolveOptions,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(Vec<(String, SatOutcome)>, SolveStats)>
where
    D: SccDecomposer + Send + Sync + 'static,
{
    emit(&sink, phase_started("solve_batch")).await;

    let mut handles = Vec::with_capacity(instances.len());
    for (source, instance) in instances {
        let decomposer = Arc::clone(&decomposer);
        handles.push(tokio::task::spawn_blocking(move || {
            let res = solve_instance(&instance, decomposer.as_ref(), &options)
                .with_context(|| format!("solving {source}"));
            (source, res)
        }));
    }

    let mut joined = Vec::with_capacity(handles.len());
    for handle in handles {
        joined.push(handle.await);
    }

    let mut results = Vec::with_capacity(joined.len());
    let mut total = SolveStats::default();
    for res in joined {
        let (source, res) = res?;
        let (outcome, stats) = res?;
        emit(
            &sink,
            AppEvent::InstanceDecided {
                source: source.clone(),
                satisfiable: outcome.satisfiable,
            },
        )
        .await;
        total.absorb(&stats);
        results.push((source, outcome));
    }

    emit(&sink, phase_finished("solve_batch")).await;
    emit(
        &sink,
        AppEvent::Finished {
            stats: total.clone(),
        },
    )
    .await;
    Ok((results, total))
}

fn decompose(
    graph: &DirectedGraph,
    decomposer: &dyn SccDecomposer,
    stats: &mut SolveStats,
) -> SccResult {
    let scc = decomposer.decompose(graph);
    stats.graph_nodes = graph.node_count();
    stats.graph_edges = graph.edge_count();
    stats.components = scc.component_count();
    scc
}

/// Reads the decision off the labeling; any derived assignment is checked
/// against every clause before it is returned.
fn decide(
    instance: &TwoSatInstance,
    scc: &SccResult,
    options: &SolveOptions,
) -> Result<SatOutcome, SolverError> {
    let outcome = check::check(&scc.component_of, instance.variables, options.want_assignment)?;
    if let Some(assignment) = outcome.assignment.as_ref() {
        check::verify_assignment(&instance.clauses, assignment)?;
    }
    Ok(outcome)
}

fn local_search_outcome(
    instance: &TwoSatInstance,
    options: &SolveOptions,
) -> Result<SatOutcome, SolverError> {
    reduce::validate_clauses(instance)?;
    match options.local_search().search(instance) {
        Some(assignment) => {
            check::verify_assignment(&instance.clauses, &assignment)?;
            Ok(SatOutcome {
                satisfiable: true,
                assignment: options.want_assignment.then_some(assignment),
            })
        }
        None => Ok(SatOutcome::unsatisfiable()),
    }
}

fn record_decision(stats: &mut SolveStats, satisfiable: bool) {
    if satisfiable {
        stats.satisfiable += 1;
    } else {
        stats.unsatisfiable += 1;
    }
}

async fn finish(
    sink: &Option<mpsc::Sender<AppEvent>>,
    source: &str,
    outcome: &SatOutcome,
    stats: &SolveStats,
) {
    emit(
        sink,
        AppEvent::InstanceDecided {
            source: source.to_string(),
            satisfiable: outcome.satisfiable,
        },
    )
    .await;
    emit(
        sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
}

fn phase_started(name: &str) -> AppEvent {
    AppEvent::PhaseStarted { name: name.into() }
}

fn phase_finished(name: &str) -> AppEvent {
    AppEvent::PhaseFinished { name: name.into() }
}
