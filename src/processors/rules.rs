// src/processors/rules.rs

//! Rule-based processors that need no external backend.

use anyhow::Result;

use crate::keys;
use crate::state::FieldState;

const REMOTE_TRIGGER_POLICIES: &[&str] = &["hybrid", "full remote"];

const BONUS_ELIGIBLE_LEVELS: &[&str] =
    &["mid-level", "senior", "director", "c-level", "executive"];

const SALES_TITLE_TERMS: &[&str] = &[
    "sales",
    "business development",
    "account executive",
    "account manager",
];

/// Recommend publication channels for remote-friendly policies.
///
/// Only `hybrid` / `full remote` policies produce a recommendation; on-site
/// roles leave the field untouched.
pub fn update_publication_channels(state: &mut FieldState) -> Result<()> {
    let policy = state.get_or_empty(keys::REMOTE_WORK_POLICY).to_lowercase();
    if REMOTE_TRIGGER_POLICIES.contains(&policy.as_str()) {
        state.set(
            keys::DESIRED_PUBLICATION_CHANNELS,
            "LinkedIn Remote Jobs; WeWorkRemotely",
        );
    }
    Ok(())
}

/// Suggest a bonus scheme for mid-to-senior level roles.
pub fn update_bonus_scheme(state: &mut FieldState) -> Result<()> {
    if state.is_filled(keys::BONUS_SCHEME) {
        return Ok(());
    }
    let level = state.get_or_empty(keys::JOB_LEVEL).to_lowercase();
    if BONUS_ELIGIBLE_LEVELS.contains(&level.as_str()) {
        state.set(
            keys::BONUS_SCHEME,
            "Eligible for an annual performance bonus.",
        );
    }
    Ok(())
}

/// Suggest a commission structure for sales-related roles.
pub fn update_commission_structure(state: &mut FieldState) -> Result<()> {
    if state.is_filled(keys::COMMISSION_STRUCTURE) {
        return Ok(());
    }
    let title = state.get_or_empty(keys::JOB_TITLE).to_lowercase();
    if SALES_TITLE_TERMS.iter().any(|term| title.contains(term)) {
        state.set(
            keys::COMMISSION_STRUCTURE,
            "Commission based on sales performance.",
        );
    }
    Ok(())
}

/// Flag whether the ad needs translating, by comparing the ad's language
/// against the required languages.
///
/// The flag is derived, not user-authored, so it is recomputed on every
/// notification rather than guarded by `is_filled`.
pub fn update_translation_required(state: &mut FieldState) -> Result<()> {
    let requirements = state.get_or_empty(keys::LANGUAGE_REQUIREMENTS).trim().to_string();
    if requirements.is_empty() {
        return Ok(());
    }

    let ad_language = {
        let lang = state.get_or_empty(keys::LANGUAGE_OF_AD).trim();
        if lang.is_empty() { "English" } else { lang }
    }
    .to_lowercase();

    let required: Vec<String> = requirements
        .split(',')
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let needed = !required.iter().any(|l| *l == ad_language);
    state.set(
        keys::TRANSLATION_REQUIRED,
        if needed { "Yes" } else { "No" },
    );
    Ok(())
}
