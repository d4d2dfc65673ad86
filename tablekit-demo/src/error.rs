//! Demo error types.

use std::path::PathBuf;

use tablekit::{DecorateError, RegistryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid table document {path}: {source}")]
    Document {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("no column {0}")]
    NoColumn(usize),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Decorate(#[from] DecorateError),

    #[error("logging: {0}")]
    Logging(String),
}
