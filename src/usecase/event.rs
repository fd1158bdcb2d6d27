use crate::usecase::stats::SolveStats;
use serde::Serialize;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    InstanceLoaded {
        source: String,
        variables: usize,
        clauses: usize,
    },

    GraphLoaded {
        source: String,
        vertices: usize,
        edges: usize,
    },

    SccComputed {
        nodes: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
    },

    ContradictionFound {
        variable: usize,
    },

    AssignmentVerified {
        variables: usize,
        clauses: usize,
    },

    InstanceDecided {
        source: String,
        satisfiable: bool,
    },

    LargestComponents {
        source: String,
        sizes: Vec<usize>,
    },

    Finished {
        stats: SolveStats,
    },
}

pub(crate) async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
