// src/schedule/topo.rs

//! Topological ordering of tasks for display/export.
//!
//! The scheduler deliberately does *not* use this routine (it keeps its
//! weaker partition ordering); this one exists so exports list every
//! predecessor before its dependents.

use std::collections::{HashMap, HashSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::errors::{GanttplanError, Result};
use crate::schedule::task::Task;

/// Order tasks so that every resolvable predecessor appears before its
/// dependents.
///
/// Depth-first over each predecessor chain, driven by the input collection in
/// its original order. A visited-set guard makes re-entry idempotent, which
/// also silently truncates cycles instead of erroring: the second-encountered
/// member of a cycle is treated as already visited. Dangling predecessor
/// references are skipped.
pub fn topo_order(tasks: &[Task]) -> Vec<Task> {
    let by_id: HashMap<&str, &Task> = tasks.iter().map(|t| (t.id.as_str(), t)).collect();

    let mut visited: HashSet<&str> = HashSet::new();
    let mut ordered: Vec<Task> = Vec::with_capacity(tasks.len());

    for root in tasks {
        if visited.contains(root.id.as_str()) {
            continue;
        }

        // Walk up the predecessor chain, collecting unvisited ancestors.
        let mut chain: Vec<&Task> = Vec::new();
        let mut cursor = Some(root);

        while let Some(task) = cursor {
            if !visited.insert(task.id.as_str()) {
                // Already ordered earlier, or a cycle closed back into this
                // chain; either way, stop climbing.
                break;
            }
            chain.push(task);
            cursor = task
                .predecessor
                .as_deref()
                .and_then(|id| by_id.get(id).copied());
        }

        // Deepest ancestor first.
        for task in chain.into_iter().rev() {
            ordered.push(task.clone());
        }
    }

    ordered
}

/// Strict variant of [`topo_order`]: rejects cyclic predecessor chains with
/// [`GanttplanError::CyclicDependency`] instead of truncating them.
///
/// Opt-in capability; the lenient routine stays the default everywhere.
pub fn topo_order_strict(tasks: &[Task]) -> Result<Vec<Task>> {
    ensure_acyclic(tasks)?;
    Ok(topo_order(tasks))
}

/// Verify that the resolvable predecessor references form a DAG.
///
/// Dangling references are ignored; they degrade to the week-1 fallback
/// elsewhere and cannot form a cycle.
pub fn ensure_acyclic(tasks: &[Task]) -> Result<()> {
    let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();

    // Edge direction: predecessor -> task.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for task in tasks {
        graph.add_node(task.id.as_str());
    }

    for task in tasks {
        if let Some(pred) = task.predecessor.as_deref() {
            if pred == task.id {
                return Err(GanttplanError::CyclicDependency(task.id.clone()));
            }
            if ids.contains(pred) {
                graph.add_edge(pred, task.id.as_str(), ());
            } else {
                warn!(
                    task = %task.id,
                    predecessor = %pred,
                    "dangling predecessor reference ignored by cycle check"
                );
            }
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(GanttplanError::CyclicDependency(
            cycle.node_id().to_string(),
        )),
    }
}
