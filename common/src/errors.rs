//! Error types shared by the configuration and search layers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure of a search, stored in shared state as the rejected outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum SearchError {
    #[error("service error: {message}")]
    Service { status: Option<u16>, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid search payload: {0}")]
    InvalidPayload(String),
    #[error("missing configuration: {0}")]
    ConfigResolution(String),
}
