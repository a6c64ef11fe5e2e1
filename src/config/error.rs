use std::path::PathBuf;
use thiserror::Error;

use crate::core::{ParseError, SchemaError};

/// Errors that can occur while loading a controller configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// File content is not valid VDF.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// File is valid VDF but not a usable controller configuration.
    #[error("Invalid controller configuration: {0}")]
    Schema(#[from] SchemaError),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
