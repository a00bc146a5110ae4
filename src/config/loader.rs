// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::WiringFile;
use crate::config::validate::validate_wiring;
use crate::errors::Result;

/// Load a wiring file from a given path and return the raw `WiringFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (DAG correctness, etc.). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<WiringFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let wiring: WiringFile = toml::from_str(&contents)?;
    Ok(wiring)
}

/// Load a wiring file from path and run validation.
///
/// This is the recommended entry point for hosts:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for unknown `after` references, self-dependencies, cycles, and
///   basic global config sanity.
///
/// The result can be handed to
/// [`TriggerEngine::from_wiring`](crate::engine::TriggerEngine::from_wiring).
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<WiringFile> {
    let wiring = load_from_path(&path)?;
    validate_wiring(&wiring)?;
    Ok(wiring)
}
