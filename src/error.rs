//! Errors raised while validating input at the frontend boundary.
//!
//! The generators themselves are total; only the JSON/wasm surface can fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("tile count must be non-negative, got {0}")]
    NegativeCount(i64),

    #[error("invalid item list: {0}")]
    InvalidItems(String),

    #[error("unknown layout '{0}'")]
    UnknownLayout(String),
}

impl From<serde_json::Error> for LayoutError {
    fn from(e: serde_json::Error) -> Self {
        LayoutError::InvalidItems(e.to_string())
    }
}
