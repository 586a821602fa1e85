//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
///
/// Only conditions that must stop the run live here. Remote fetch failures
/// and unrecognized files are logged and absorbed by the stage that sees them.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The README to patch does not exist
    #[error("Document not found: {}. Please create it first.", .path.display())]
    DocumentMissing { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A section pattern failed to compile
    #[error("Invalid section pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] cf_http_client::CfError),
}
