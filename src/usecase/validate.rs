use crate::domain::model::{GraphInstance, TwoSatInstance};
use crate::usecase::components::build_graph;
use crate::usecase::two_sat::reduce::validate_clauses;
use anyhow::Result;

/// Semantic checks on a parsed 2-SAT instance, without solving it.
pub fn validate_two_sat_instance(instance: &TwoSatInstance) -> Result<()> {
    validate_clauses(instance)?;
    Ok(())
}

/// Semantic checks on a parsed graph instance, without decomposing it.
pub fn validate_graph_instance(instance: &GraphInstance) -> Result<()> {
    build_graph(instance)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Clause;

    #[test]
    fn two_sat_validation_surfaces_solver_error_text() {
        let inst = TwoSatInstance::new(2, [Clause::new(1, 5)]);
        let err = validate_two_sat_instance(&inst).unwrap_err().to_string();
        assert!(err.contains("literal 5"), "{err}");

        assert!(validate_two_sat_instance(&TwoSatInstance::new(2, [Clause::new(-2, 1)])).is_ok());
    }

    #[test]
    fn graph_validation_checks_edge_bounds() {
        let ok = GraphInstance {
            vertices: 2,
            edges: vec![(1, 2), (2, 2)],
        };
        assert!(validate_graph_instance(&ok).is_ok());

        let bad = GraphInstance {
            vertices: 2,
            edges: vec![(4, 1)],
        };
        assert!(validate_graph_instance(&bad).is_err());
    }
}
