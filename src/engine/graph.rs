// src/engine/graph.rs

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use tracing::warn;

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone, Default)]
struct FieldNode {
    /// Direct dependencies: fields this one is recomputed from.
    deps: Vec<String>,
    /// Direct dependents: fields recomputed when this one changes.
    dependents: Vec<String>,
}

/// In-memory dependency graph keyed by field name.
///
/// This is intentionally lightweight; edges are registered incrementally by
/// the host (or by [`crate::wiring::build_default_graph`]) and the graph is
/// read-only during notification. Statically wired graphs are validated for
/// acyclicity in `config::validate`; graphs built at runtime may contain
/// cycles, which traversal must tolerate (see [`DepGraph::affected_order`]).
#[derive(Debug, Clone, Default)]
pub struct DepGraph {
    nodes: HashMap<String, FieldNode>,
}

impl DepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `key` exists as a node. Idempotent.
    pub fn add_node(&mut self, key: &str) {
        self.nodes.entry(key.to_string()).or_default();
    }

    /// Add a directed edge `source -> target`, registering both nodes if
    /// absent. Idempotent; self-loops register the node but no edge.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        if source == target {
            self.add_node(source);
            warn!(field = %source, "ignoring self-dependency");
            return;
        }

        let src = self.nodes.entry(source.to_string()).or_default();
        if src.dependents.iter().any(|d| d == target) {
            return;
        }
        src.dependents.push(target.to_string());

        let tgt = self.nodes.entry(target.to_string()).or_default();
        tgt.deps.push(source.to_string());
    }

    /// True if `key` is a registered node.
    pub fn contains(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    /// Return all field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    /// Immediate dependencies of a field.
    pub fn dependencies_of(&self, key: &str) -> &[String] {
        self.nodes
            .get(key)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependents of a field.
    pub fn dependents_of(&self, key: &str) -> &[String] {
        self.nodes
            .get(key)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// All fields transitively reachable from `key` via outgoing edges,
    /// excluding `key` itself.
    ///
    /// Set-based BFS, so a cyclic graph cannot cause non-termination.
    pub fn descendants(&self, key: &str) -> HashSet<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(key);

        while let Some(current) = queue.pop_front() {
            for dep in self.dependents_of(current) {
                if dep != key && seen.insert(dep.clone()) {
                    queue.push_back(dep);
                }
            }
        }

        seen
    }

    /// The descendant set of `changed`, ordered for processing.
    ///
    /// Order is a topological sort of the subgraph induced by the descendants
    /// (Kahn's algorithm, alphabetical tiebreak so the result is fully
    /// deterministic). If that subgraph is cyclic, a topological order does
    /// not exist; we fall back to plain sorted order so notification still
    /// terminates and visits every affected field exactly once.
    pub fn affected_order(&self, changed: &str) -> Vec<String> {
        let affected = self.descendants(changed);
        if affected.is_empty() {
            return Vec::new();
        }

        // In-degree counting only edges whose both ends are affected; edges
        // from `changed` itself (or anything outside the set) do not gate
        // processing order.
        let mut indegree: HashMap<&str, usize> = HashMap::new();
        for node in &affected {
            let within = self
                .dependencies_of(node)
                .iter()
                .filter(|d| affected.contains(d.as_str()))
                .count();
            indegree.insert(node.as_str(), within);
        }

        let mut ready: BTreeSet<&str> = indegree
            .iter()
            .filter(|(_, deg)| **deg == 0)
            .map(|(n, _)| *n)
            .collect();

        let mut order: Vec<String> = Vec::with_capacity(affected.len());
        while let Some(node) = ready.pop_first() {
            order.push(node.to_string());
            for dep in self.dependents_of(node) {
                if let Some(deg) = indegree.get_mut(dep.as_str()) {
                    *deg -= 1;
                    if *deg == 0 {
                        ready.insert(dep.as_str());
                    }
                }
            }
        }

        if order.len() < affected.len() {
            warn!(
                changed = %changed,
                affected = affected.len(),
                ordered = order.len(),
                "cycle among affected fields; falling back to sorted order"
            );
            let mut sorted: Vec<String> = affected.into_iter().collect();
            sorted.sort();
            return sorted;
        }

        order
    }
}
