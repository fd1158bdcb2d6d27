use crate::domain::model::{GraphInstance, TwoSatInstance};
use crate::infrastructure::serde_json_adapter::{read_graph_json_file, read_two_sat_json_file};
use crate::infrastructure::text_instance::{read_edge_list_text_file, read_two_sat_text_file};
use anyhow::Result;
use std::path::Path;

fn is_json(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Reads a 2-SAT instance, as JSON when the path ends in `.json`, as text otherwise.
pub async fn read_two_sat_file(path: &str) -> Result<TwoSatInstance> {
    if is_json(path) {
        read_two_sat_json_file(path).await
    } else {
        read_two_sat_text_file(path).await
    }
}

/// Reads a directed graph, as JSON when the path ends in `.json`, as an edge list otherwise.
pub async fn read_graph_file(path: &str) -> Result<GraphInstance> {
    if is_json(path) {
        read_graph_json_file(path).await
    } else {
        read_edge_list_text_file(path).await
    }
}
