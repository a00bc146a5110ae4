// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Declarative field wiring as read from a TOML file.
///
/// ```toml
/// [config]
/// failure_policy = "propagate"
///
/// [field.job_title]
///
/// [field.task_list]
/// after = ["job_title", "industry_experience"]
///
/// [field.salary_range]
/// after = ["task_list", "must_have_skills"]
/// ```
///
/// A bare `[field.<name>]` section declares a field with no dependencies
/// (a wiring source). All sections are optional and have defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WiringFile {
    /// Global behaviour from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All fields from `[field.<name>]`, keyed by field name.
    #[serde(default)]
    pub field: BTreeMap<String, FieldConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// `"propagate"` or `"continue"`.
    ///
    /// - `"propagate"` (default): a failing processor aborts the
    ///   notification and the error reaches the caller.
    /// - `"continue"`: failing processors are logged and the remaining
    ///   affected fields are still processed.
    #[serde(default = "default_failure_policy")]
    pub failure_policy: String,
}

fn default_failure_policy() -> String {
    "propagate".to_string()
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            failure_policy: default_failure_policy(),
        }
    }
}

/// `[field.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldConfig {
    /// Dependency list: this field is recomputed when any field listed here
    /// changes. This is the TOML `after = ["job_title"]` field.
    #[serde(default)]
    pub after: Vec<String>,
}
