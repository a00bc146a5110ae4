// src/config/validate.rs

use std::str::FromStr;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::WiringFile;
use crate::engine::FailurePolicy;
use crate::errors::{FormdagError, Result};

/// Run semantic validation against a loaded wiring file.
///
/// This checks:
/// - there is at least one field
/// - `failure_policy` is valid ("propagate" or "continue")
/// - all `after` dependencies refer to declared fields
/// - no field depends on itself
/// - the dependency graph has no cycles
///
/// The runtime engine stays permissive (unknown keys no-op, cycles fall back
/// to a safe traversal order); static wiring is where mistakes get rejected
/// eagerly.
pub fn validate_wiring(wiring: &WiringFile) -> Result<()> {
    ensure_has_fields(wiring)?;
    validate_failure_policy(wiring)?;
    validate_dependencies(wiring)?;
    validate_dag(wiring)?;
    Ok(())
}

fn ensure_has_fields(wiring: &WiringFile) -> Result<()> {
    if wiring.field.is_empty() {
        return Err(FormdagError::Config(
            "wiring must contain at least one [field.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_failure_policy(wiring: &WiringFile) -> Result<()> {
    FailurePolicy::from_str(&wiring.config.failure_policy)
        .map_err(|e| FormdagError::Config(format!("invalid [config].failure_policy: {e}")))?;
    Ok(())
}

fn validate_dependencies(wiring: &WiringFile) -> Result<()> {
    for (name, field) in wiring.field.iter() {
        for dep in field.after.iter() {
            if !wiring.field.contains_key(dep) {
                return Err(FormdagError::Config(format!(
                    "field '{name}' has unknown dependency '{dep}' in `after`"
                )));
            }
            if dep == name {
                return Err(FormdagError::Config(format!(
                    "field '{name}' cannot depend on itself in `after`"
                )));
            }
        }
    }
    Ok(())
}

fn validate_dag(wiring: &WiringFile) -> Result<()> {
    // Build a petgraph graph from the fields and their dependencies.
    //
    // Edge direction: dep -> field
    // For:
    //   [field.salary_range]
    //   after = ["task_list"]
    // we add edge task_list -> salary_range.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in wiring.field.keys() {
        graph.add_node(name.as_str());
    }

    for (name, field) in wiring.field.iter() {
        for dep in field.after.iter() {
            graph.add_edge(dep.as_str(), name.as_str(), ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(FormdagError::DagCycle(format!(
                "cycle in field wiring involving '{node}'"
            )))
        }
    }
}
