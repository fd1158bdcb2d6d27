use crate::domain::model::{Clause, GraphInstance, TwoSatInstance};
use crate::infrastructure::schema_validator::{validate_graph_document, validate_two_sat_document};
use crate::usecase::stats::SolveStats;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TwoSatInstanceDto {
    pub variables: usize,

    #[serde(default)]
    pub clauses: Vec<[i32; 2]>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl From<TwoSatInstanceDto> for TwoSatInstance {
    fn from(dto: TwoSatInstanceDto) -> Self {
        TwoSatInstance::new(
            dto.variables,
            dto.clauses.into_iter().map(|[a, b]| Clause::new(a, b)),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GraphInstanceDto {
    pub vertices: usize,

    /// 1-based `[from, to]` pairs.
    #[serde(default)]
    pub edges: Vec<[usize; 2]>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl From<GraphInstanceDto> for GraphInstance {
    fn from(dto: GraphInstanceDto) -> Self {
        GraphInstance {
            vertices: dto.vertices,
            edges: dto.edges.into_iter().map(|[u, v]| (u, v)).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InstanceReportDto {
    pub source: String,
    pub satisfiable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment: Option<Vec<bool>>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct SolveReportDto {
    pub strategy: String,
    pub result: String,
    pub instances: Vec<InstanceReportDto>,
    pub stats: SolveStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ComponentsReportDto {
    pub source: String,
    pub vertices: usize,
    pub edges: usize,
    pub components: usize,
    pub largest: Vec<usize>,
}

pub async fn read_two_sat_json_file(path: &str) -> Result<TwoSatInstance> {
    let raw = fs::read_to_string(path).await?;
    let value: Value = serde_json::from_str(&raw)?;
    validate_two_sat_document(&value)?;
    let dto: TwoSatInstanceDto = serde_json::from_value(value)?;
    Ok(dto.into())
}

pub async fn read_graph_json_file(path: &str) -> Result<GraphInstance> {
    let raw = fs::read_to_string(path).await?;
    let value: Value = serde_json::from_str(&raw)?;
    validate_graph_document(&value)?;
    let dto: GraphInstanceDto = serde_json::from_value(value)?;
    Ok(dto.into())
}

pub async fn write_report_file<T: Serialize>(path: &str, report: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(report)?;
    fs::write(path, pretty).await?;
    Ok(())
}
