//! Error types for the fixture-gen CLI.

use fixture_core::GeneratorError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running a CLI command.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid limits or name pool.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Failed to read an input file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create an output file.
    #[error("Failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
