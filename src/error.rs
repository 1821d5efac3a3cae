//! Error handling for the autoreadme application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for autoreadme operations.
///
/// This enum represents all possible errors that can occur while scanning a project
/// and rendering its README. It implements the standard Error trait through
/// thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// The project root or one of its manifests could not be read or parsed
    #[error("Failed to scan project '{root}': {reason}.")]
    ScanFailure { root: String, reason: String },

    /// Neither the requested template nor the default one exists
    #[error("Template '{name}' not found in '{templates_dir}' and no default template is available.")]
    TemplateNotFound { name: String, templates_dir: String },

    /// The rendered output could not be written
    #[error("Cannot write output to '{path}'. Original error: {source}")]
    WriteFailure {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to serialize project metadata. Original error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to read git configuration. Original error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
