// src/wiring.rs

//! Default dependency wiring for the recruiting wizard.
//!
//! The edge set here is configuration, not engine logic; hosts with different
//! forms register their own pairs instead. An edge `(A, B)` means "when A
//! changes, recompute B".

use std::sync::Arc;

use tracing::debug;

use crate::engine::TriggerEngine;
use crate::keys;
use crate::processors::register_all_processors;
use crate::suggest::SuggestionProvider;

/// Canonical dependency pairs of the wizard.
pub const DEFAULT_DEPENDENCY_PAIRS: &[(&str, &str)] = &[
    // Job title triggers task suggestions; industry context refines them.
    (keys::JOB_TITLE, keys::TASK_LIST),
    (keys::INDUSTRY_EXPERIENCE, keys::TASK_LIST),
    // Tasks influence must-have skills; must-haves lead to nice-to-haves.
    (keys::TASK_LIST, keys::MUST_HAVE_SKILLS),
    (keys::MUST_HAVE_SKILLS, keys::NICE_TO_HAVE_SKILLS),
    // Role scope and required skills influence salary; an initial parse
    // triggers an estimate when the ad only says "competitive".
    (keys::TASK_LIST, keys::SALARY_RANGE),
    (keys::MUST_HAVE_SKILLS, keys::SALARY_RANGE),
    (keys::PARSED_DATA_RAW, keys::SALARY_RANGE),
    // Remote policy affects publication channels.
    (keys::REMOTE_WORK_POLICY, keys::DESIRED_PUBLICATION_CHANNELS),
    // Seniority may entail a bonus; sales titles get a commission structure.
    (keys::JOB_LEVEL, keys::BONUS_SCHEME),
    (keys::JOB_TITLE, keys::COMMISSION_STRUCTURE),
    // Language needs drive the translation flag.
    (keys::LANGUAGE_REQUIREMENTS, keys::TRANSLATION_REQUIRED),
];

/// Populate `engine` with the canonical dependency graph.
///
/// Edge registration is idempotent, so calling this on an engine that already
/// carries the default graph changes nothing.
pub fn build_default_graph(engine: &mut TriggerEngine) {
    engine.register_dependencies(DEFAULT_DEPENDENCY_PAIRS.iter().copied());
    debug!(
        edges = DEFAULT_DEPENDENCY_PAIRS.len(),
        "registered default dependency graph"
    );
}

/// Fresh engine with the default graph and all default processors bound.
pub fn default_engine(provider: Arc<dyn SuggestionProvider>) -> TriggerEngine {
    let mut engine = TriggerEngine::new();
    build_default_graph(&mut engine);
    register_all_processors(&mut engine, provider);
    engine
}
