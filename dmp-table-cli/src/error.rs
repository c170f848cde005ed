//! CLI error type

use std::path::PathBuf;

use dmp_table_lib::error::{DocumentError, PageError};

/// Errors that end a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The table document could not be loaded.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// The page arguments are invalid.
    #[error(transparent)]
    Page(#[from] PageError),

    /// The log file could not be created.
    #[error("Failed to create log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A logger was already installed.
    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
