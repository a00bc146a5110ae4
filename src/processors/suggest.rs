// src/processors/suggest.rs

//! Suggestion-backed processors.
//!
//! Each constructor binds a [`SuggestionProvider`] into a boxed closure
//! matching the engine's [`Processor`] contract. Prompt phrasing is fixed
//! here so completions stay comparable across hosts and backends.

use std::sync::Arc;

use tracing::debug;

use crate::engine::Processor;
use crate::keys;
use crate::state::FieldState;
use crate::suggest::SuggestionProvider;

/// Auto-generate a general task list from the job title (and industry).
pub fn task_list(provider: Arc<dyn SuggestionProvider>) -> Processor {
    Box::new(move |state| {
        if state.is_filled(keys::TASK_LIST) {
            return Ok(());
        }
        let role = first_filled(state, &[keys::JOB_TITLE, keys::ROLE_DESCRIPTION]);
        let Some(role) = role else {
            // No context to generate tasks from.
            return Ok(());
        };

        let mut prompt = format!("List 5 key tasks or responsibilities for a {role}");
        if let Some(industry) =
            first_filled(state, &[keys::INDUSTRY_SECTOR, keys::INDUSTRY_EXPERIENCE])
        {
            prompt.push_str(&format!(" in the {industry} industry"));
        }
        prompt.push_str(".\n- ");

        let tasks = provider.complete(&prompt)?;
        if !tasks.trim().is_empty() {
            debug!(field = keys::TASK_LIST, "storing suggested task list");
            state.set(keys::TASK_LIST, tasks.trim());
        }
        Ok(())
    })
}

/// Auto-generate must-have skills based on the role (and tasks).
pub fn must_have_skills(provider: Arc<dyn SuggestionProvider>) -> Processor {
    Box::new(move |state| {
        if state.is_filled(keys::MUST_HAVE_SKILLS) {
            return Ok(());
        }
        if !state.is_filled(keys::JOB_TITLE) && !state.is_filled(keys::TASK_LIST) {
            return Ok(());
        }

        let role = first_filled(state, &[keys::JOB_TITLE])
            .unwrap_or_else(|| "this role".to_string());
        let mut prompt = format!("List 5 must-have skills or qualifications for {role}.");
        if state.is_filled(keys::TASK_LIST) {
            prompt.push_str(&format!(
                " Key tasks: {}",
                state.get_or_empty(keys::TASK_LIST)
            ));
        }
        prompt.push_str("\n- ");

        let skills = provider.complete(&prompt)?;
        if !skills.trim().is_empty() {
            state.set(keys::MUST_HAVE_SKILLS, skills.trim());
        }
        Ok(())
    })
}

/// Auto-generate nice-to-have skills complementing the must-haves.
pub fn nice_to_have_skills(provider: Arc<dyn SuggestionProvider>) -> Processor {
    Box::new(move |state| {
        if state.is_filled(keys::NICE_TO_HAVE_SKILLS) {
            return Ok(());
        }
        if !state.is_filled(keys::MUST_HAVE_SKILLS) {
            return Ok(());
        }

        let role = first_filled(state, &[keys::JOB_TITLE])
            .unwrap_or_else(|| "this role".to_string());
        let prompt = format!(
            "List 3 nice-to-have skills for {role} (additional beneficial skills beyond \
             the must-haves). Must-have skills already listed: {}\n- ",
            state.get_or_empty(keys::MUST_HAVE_SKILLS)
        );

        let skills = provider.complete(&prompt)?;
        if !skills.trim().is_empty() {
            state.set(keys::NICE_TO_HAVE_SKILLS, skills.trim());
        }
        Ok(())
    })
}

/// Estimate a salary range (EUR) based on role, location, tasks and skills.
///
/// `"competitive"` counts as a placeholder, so an ad parsed with that wording
/// gets a concrete estimate while a user-entered range is left alone.
pub fn salary_range(provider: Arc<dyn SuggestionProvider>) -> Processor {
    Box::new(move |state| {
        if state.is_filled(keys::SALARY_RANGE) {
            return Ok(());
        }

        let role = first_filled(state, &[keys::JOB_TITLE, keys::ROLE_DESCRIPTION])
            .unwrap_or_else(|| "this position".to_string());
        let city = state.get(keys::CITY).filter(|c| !c.is_empty()).unwrap_or("N/A");
        let tasks = state.get(keys::TASK_LIST).filter(|t| !t.is_empty()).unwrap_or("-");
        let skills = state
            .get(keys::MUST_HAVE_SKILLS)
            .filter(|s| !s.is_empty())
            .unwrap_or("-");

        let prompt = format!(
            "Estimate a fair annual salary range in EUR for the following position in the \
             given city.\nJob title: {role}\nCity: {city}\nKey tasks: {tasks}\n\
             Must-have skills: {skills}\nAnswer only in the format \"MIN – MAX EUR\"."
        );

        let estimate = provider.complete(&prompt)?;
        if !estimate.trim().is_empty() {
            debug!(field = keys::SALARY_RANGE, "storing estimated salary range");
            state.set(keys::SALARY_RANGE, estimate.trim());
        }
        Ok(())
    })
}

/// First key in `candidates` whose value is meaningfully filled.
fn first_filled(state: &FieldState, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find(|k| state.is_filled(k))
        .map(|k| state.get_or_empty(k).to_string())
}
