// src/state.rs

//! Shared wizard state passed through every engine call.
//!
//! The engine never owns or snapshots this state; it hands the same mutable
//! reference to each processor it invokes. The backing store (UI session,
//! test fixture, ...) belongs to the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder literals that count as "not really filled in".
///
/// Job ads love non-answers like `"competitive"` for the salary range; they
/// are centralised here so every processor applies the same rule instead of
/// re-deriving it per field.
const PLACEHOLDER_VALUES: &[&str] = &["competitive", "tbd", "n/a", "unknown"];

/// Returns true if `value` is empty, whitespace, or a known placeholder.
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || PLACEHOLDER_VALUES.contains(&trimmed.to_lowercase().as_str())
}

/// String-keyed map of current field values for one wizard session.
///
/// A `BTreeMap` keeps iteration deterministic, which matters for reproducible
/// logs and tests; the engine itself only ever does point lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldState {
    values: BTreeMap<String, String>,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field, or `None` if it was never set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Value of a field, defaulting to the empty string.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Set a field value, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Remove a field entirely.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// True if the field holds a meaningful, user-visible value.
    ///
    /// Processors use this to honour the "don't overwrite user input"
    /// convention: a field that is absent, empty, or a placeholder such as
    /// `"competitive"` is fair game for recomputation.
    pub fn is_filled(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !is_placeholder(v))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
