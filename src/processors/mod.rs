// src/processors/mod.rs

//! Default field processors for the recruiting wizard.
//!
//! - [`suggest`] holds processors that derive text from the completion
//!   backend (task list, skills, salary range).
//! - [`rules`] holds pure rule-based processors (publication channels, bonus
//!   scheme, commission structure, translation flag).
//!
//! Every processor honours the "don't overwrite user input" convention via
//! [`FieldState::is_filled`](crate::state::FieldState::is_filled) and returns
//! early when its inputs are missing.

use std::sync::Arc;

use crate::engine::TriggerEngine;
use crate::keys;
use crate::suggest::SuggestionProvider;

pub mod rules;
pub mod suggest;

/// Bind every default processor to its target field.
///
/// Calling this twice on the same engine re-binds the same processors, which
/// is harmless (last-write-wins).
pub fn register_all_processors(engine: &mut TriggerEngine, provider: Arc<dyn SuggestionProvider>) {
    engine.register_processor(keys::TASK_LIST, suggest::task_list(provider.clone()));
    engine.register_processor(
        keys::MUST_HAVE_SKILLS,
        suggest::must_have_skills(provider.clone()),
    );
    engine.register_processor(
        keys::NICE_TO_HAVE_SKILLS,
        suggest::nice_to_have_skills(provider.clone()),
    );
    engine.register_processor(keys::SALARY_RANGE, suggest::salary_range(provider));

    engine.register_processor(
        keys::DESIRED_PUBLICATION_CHANNELS,
        Box::new(rules::update_publication_channels),
    );
    engine.register_processor(keys::BONUS_SCHEME, Box::new(rules::update_bonus_scheme));
    engine.register_processor(
        keys::COMMISSION_STRUCTURE,
        Box::new(rules::update_commission_structure),
    );
    engine.register_processor(
        keys::TRANSLATION_REQUIRED,
        Box::new(rules::update_translation_required),
    );
}
