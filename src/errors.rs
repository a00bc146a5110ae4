// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormdagError {
    #[error("Wiring configuration error: {0}")]
    Config(String),

    #[error("Cycle detected in field dependency graph: {0}")]
    DagCycle(String),

    #[error("Processor for field '{field}' failed")]
    Processor {
        field: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FormdagError>;
