use crate::domain::model::{Clause, GraphInstance, TwoSatInstance};
use anyhow::{anyhow, Context, Result};
use tokio::fs;

/// Parses a 2-SAT instance: the first non-blank line holds the variable
/// count, each following non-blank line holds one clause `"a b"`.
pub fn parse_two_sat_text(raw: &str) -> Result<TwoSatInstance> {
    let mut lines = raw
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| anyhow!("missing variable count line"))?;
    let variables: usize = header
        .parse()
        .with_context(|| format!("line {header_no}: invalid variable count: {header}"))?;

    let mut clauses = Vec::new();
    for (no, line) in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [a, b] = fields[..] else {
            return Err(anyhow!("line {no}: expected two literals, got: {line}"));
        };
        let a: i32 = a
            .parse()
            .with_context(|| format!("line {no}: invalid literal: {a}"))?;
        let b: i32 = b
            .parse()
            .with_context(|| format!("line {no}: invalid literal: {b}"))?;
        clauses.push(Clause::new(a, b));
    }

    Ok(TwoSatInstance { variables, clauses })
}

/// Parses a directed edge list: one `"u v"` pair of 1-based vertex ids per
/// non-blank line; extra columns are ignored. The vertex count is the
/// largest id seen.
pub fn parse_edge_list_text(raw: &str) -> Result<GraphInstance> {
    let mut edges = Vec::new();
    let mut vertices = 0usize;

    for (i, line) in raw.lines().enumerate() {
        let no = i + 1;
        let mut fields = line.split_whitespace();
        let Some(u) = fields.next() else {
            continue;
        };
        let v = fields
            .next()
            .ok_or_else(|| anyhow!("line {no}: expected two vertex ids, got: {}", line.trim()))?;

        let u = parse_vertex(u, no)?;
        let v = parse_vertex(v, no)?;
        vertices = vertices.max(u).max(v);
        edges.push((u, v));
    }

    Ok(GraphInstance { vertices, edges })
}

fn parse_vertex(field: &str, line_no: usize) -> Result<usize> {
    let id: usize = field
        .parse()
        .with_context(|| format!("line {line_no}: invalid vertex id: {field}"))?;
    if id == 0 {
        return Err(anyhow!("line {line_no}: vertex ids are 1-based, got 0"));
    }
    Ok(id)
}

pub async fn read_two_sat_text_file(path: &str) -> Result<TwoSatInstance> {
    let raw = fs::read_to_string(path).await?;
    parse_two_sat_text(&raw)
}

pub async fn read_edge_list_text_file(path: &str) -> Result<GraphInstance> {
    let raw = fs::read_to_string(path).await?;
    parse_edge_list_text(&raw)
}
