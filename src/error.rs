//! Errors raised at the engine's I/O edges
//!
//! Mutation, rendering and hit-testing never fail. Only reading records and
//! configuration from text or disk can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid template record: {0}")]
    Record(#[from] serde_json::Error),

    #[error("invalid render config: {0}")]
    Config(#[from] toml::de::Error),
}
