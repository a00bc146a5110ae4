// src/engine/mod.rs

//! Dependency trigger engine.
//!
//! - [`graph`] holds a simple directed graph of field keys.
//! - [`trigger`] contains the engine that maps change notifications to
//!   processor invocations over the affected subgraph.

pub mod graph;
pub mod trigger;

pub use graph::DepGraph;
pub use trigger::{FailurePolicy, Processor, TriggerEngine};
