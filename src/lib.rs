//! Strongly-connected components (Kosaraju) and 2-SAT satisfiability.
//!
//! Layers:
//! - domain: graph, instances, errors and ports
//! - usecase: reduction, satisfiability check, orchestration + progress events
//! - infrastructure: Kosaraju / local-search implementations, file formats, NDJSON
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
