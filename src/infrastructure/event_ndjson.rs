use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::InstanceLoaded {
            source,
            variables,
            clauses,
        } => {
            json!({"type":"instance_loaded","source":source,"variables":variables,"clauses":clauses})
        }
        AppEvent::GraphLoaded {
            source,
            vertices,
            edges,
        } => {
            json!({"type":"graph_loaded","source":source,"vertices":vertices,"edges":edges})
        }
        AppEvent::SccComputed {
            nodes,
            edges,
            components,
            cyclic_components,
        } => {
            json!({"type":"scc_computed","nodes":nodes,"edges":edges,"components":components,"cyclic_components":cyclic_components})
        }
        AppEvent::ContradictionFound { variable } => {
            json!({"type":"contradiction_found","variable":variable})
        }
        AppEvent::AssignmentVerified { variables, clauses } => {
            json!({"type":"assignment_verified","variables":variables,"clauses":clauses})
        }
        AppEvent::InstanceDecided {
            source,
            satisfiable,
        } => {
            json!({"type":"instance_decided","source":source,"satisfiable":satisfiable})
        }
        AppEvent::LargestComponents { source, sizes } => {
            json!({"type":"largest_components","source":source,"sizes":sizes})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
