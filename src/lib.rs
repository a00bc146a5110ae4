// src/lib.rs

//! Field-dependency trigger engine for multi-step form wizards.
//!
//! A wizard holds dozens of named fields where editing one field should
//! refresh others: changing the job title suggests a task list, changing the
//! task list re-estimates the salary range, and so on. `formdag` models those
//! relationships as a directed graph of field keys plus a registry of
//! processor callbacks, and propagates change notifications across it.
//!
//! ```no_run
//! use std::sync::Arc;
//! use formdag::state::FieldState;
//! use formdag::suggest::StaticSuggestions;
//! use formdag::wiring::default_engine;
//!
//! # fn main() -> formdag::errors::Result<()> {
//! let provider = Arc::new(StaticSuggestions::new().with_fallback("..."));
//! let engine = default_engine(provider);
//!
//! let mut state = FieldState::new();
//! state.set("job_title", "Senior Data Scientist");
//! engine.notify_change("job_title", &mut state)?;
//! # Ok(())
//! # }
//! ```
//!
//! One engine per independent session; the shared state is owned by the
//! caller and passed into every `notify_change` call. Custom wiring can be
//! registered directly, or loaded from a TOML file via [`config`].

pub mod config;
pub mod engine;
pub mod errors;
pub mod keys;
pub mod logging;
pub mod processors;
pub mod state;
pub mod suggest;
pub mod wiring;

pub use engine::{DepGraph, FailurePolicy, Processor, TriggerEngine};
pub use errors::{FormdagError, Result};
pub use state::FieldState;
