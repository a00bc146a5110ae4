// src/config/mod.rs

//! Declarative wiring loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a wiring file from disk (`loader.rs`).
//! - Validate invariants like DAG correctness (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ConfigSection, FieldConfig, WiringFile};
pub use validate::validate_wiring;
