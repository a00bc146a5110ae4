// src/engine/trigger.rs

use std::collections::HashMap;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, error, trace};

use crate::config::model::WiringFile;
use crate::engine::graph::DepGraph;
use crate::errors::{FormdagError, Result};
use crate::state::FieldState;

/// Callback that recomputes one field from the shared state.
///
/// Processors read whatever inputs they need from `state` and write their own
/// target field(s) back. By convention they must not overwrite a field the
/// user already filled in (check [`FieldState::is_filled`] and return early).
/// A processor that needs extra context (a suggestion client, tuning
/// parameters) binds it via a closure; the engine always calls with the state
/// alone.
pub type Processor = Box<dyn Fn(&mut FieldState) -> anyhow::Result<()> + Send + Sync>;

/// What to do when a processor returns an error during notification.
///
/// - `Propagate` (default): abort the notification and return the error to
///   the caller, wrapped with the failing field's name.
/// - `Continue`: log the error and keep processing the remaining affected
///   fields, so one failing suggestion does not block independent siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    #[default]
    Propagate,
    Continue,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "propagate" => Ok(FailurePolicy::Propagate),
            "continue" => Ok(FailurePolicy::Continue),
            other => Err(format!(
                "invalid failure_policy: {other} (expected \"propagate\" or \"continue\")"
            )),
        }
    }
}

/// Dependency graph plus processor registry for one wizard session.
///
/// The engine is synchronous and single-threaded: every operation runs to
/// completion on the calling thread, and `notify_change` is a pure
/// traversal-and-dispatch step with no internal queueing or reentrancy
/// guard. One engine per independent session/state; the shared state is
/// always passed in explicitly, never stored.
pub struct TriggerEngine {
    graph: DepGraph,
    processors: HashMap<String, Processor>,
    failure_policy: FailurePolicy,
}

impl Default for TriggerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerEngine {
    pub fn new() -> Self {
        Self {
            graph: DepGraph::new(),
            processors: HashMap::new(),
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Construct an engine from a validated [`WiringFile`].
    ///
    /// Registers every declared field and its `after` edges; processors are
    /// bound separately by the host (or
    /// [`register_all_processors`](crate::processors::register_all_processors)).
    pub fn from_wiring(wiring: &WiringFile) -> Result<Self> {
        let failure_policy = FailurePolicy::from_str(&wiring.config.failure_policy)
            .map_err(|e| FormdagError::Config(format!("invalid [config].failure_policy: {e}")))?;

        let mut engine = Self::new();
        engine.set_failure_policy(failure_policy);

        for (name, field) in wiring.field.iter() {
            engine.register_node(name);
            for dep in field.after.iter() {
                engine.register_dependency(dep, name);
            }
        }

        Ok(engine)
    }

    /// Read access to the dependency graph, for diagnostics.
    pub fn graph(&self) -> &DepGraph {
        &self.graph
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    pub fn set_failure_policy(&mut self, policy: FailurePolicy) {
        self.failure_policy = policy;
    }

    /// Ensure `key` exists in the graph. Idempotent.
    pub fn register_node(&mut self, key: &str) {
        self.graph.add_node(key);
    }

    /// Declare that `target` depends on `source` (edge `source -> target`).
    ///
    /// Both keys are registered as nodes if absent. Re-registering an
    /// existing edge is a no-op; self-dependencies are ignored.
    pub fn register_dependency(&mut self, source: &str, target: &str) {
        self.graph.add_edge(source, target);
    }

    /// Bulk variant of [`register_dependency`](Self::register_dependency).
    pub fn register_dependencies<'a, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (source, target) in pairs {
            self.register_dependency(source, target);
        }
    }

    /// Bind `processor` as the recomputation callback for `key`, replacing
    /// any previous binding. `key` does not need to exist in the graph yet.
    pub fn register_processor(&mut self, key: &str, processor: Processor) {
        if self.processors.insert(key.to_string(), processor).is_some() {
            debug!(field = %key, "replacing existing processor binding");
        }
    }

    /// Notify the engine that `changed_key` was updated and run every
    /// processor whose field transitively depends on it.
    ///
    /// Affected fields are visited in topological order of the dependency
    /// subgraph (deterministic; see [`DepGraph::affected_order`]), so a field
    /// recomputed from another affected field sees that field's fresh value.
    /// Unknown keys and affected fields without a processor are skipped
    /// silently. Processor errors follow the configured [`FailurePolicy`].
    pub fn notify_change(&self, changed_key: &str, state: &mut FieldState) -> Result<()> {
        if !self.graph.contains(changed_key) {
            trace!(field = %changed_key, "change notification for unknown field; nothing to do");
            return Ok(());
        }

        let order = self.graph.affected_order(changed_key);
        if order.is_empty() {
            trace!(field = %changed_key, "no dependents; nothing to do");
            return Ok(());
        }
        debug!(
            field = %changed_key,
            affected = order.len(),
            "propagating field change"
        );

        for field in &order {
            let Some(processor) = self.processors.get(field) else {
                trace!(field = %field, "affected field has no processor; skipping");
                continue;
            };

            debug!(field = %field, "running processor");
            if let Err(source) = processor(state) {
                match self.failure_policy {
                    FailurePolicy::Propagate => {
                        return Err(FormdagError::Processor {
                            field: field.clone(),
                            source,
                        });
                    }
                    FailurePolicy::Continue => {
                        error!(
                            field = %field,
                            error = %source,
                            "processor failed; continuing with remaining fields"
                        );
                    }
                }
            }
        }

        Ok(())
    }
}
