use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static TWO_SAT_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/two_sat_instance_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid 2-SAT instance schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile 2-SAT instance schema")
});

static GRAPH_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/graph_instance_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid graph instance schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile graph instance schema")
});

/// Validate a JSON 2-SAT instance document against the instance schema
pub fn validate_two_sat_document(doc: &Value) -> Result<()> {
    validate_with(&TWO_SAT_SCHEMA, doc, "2-SAT instance")
}

/// Validate a JSON directed-graph document against the graph schema
pub fn validate_graph_document(doc: &Value) -> Result<()> {
    validate_with(&GRAPH_SCHEMA, doc, "Graph instance")
}

fn validate_with(schema: &JSONSchema, doc: &Value, what: &str) -> Result<()> {
    match schema.validate(doc) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!("{what} validation failed:\n{}", error_list.join("\n")))
        }
    }
}
