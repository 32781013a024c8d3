//! Error handling for the promptforge application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error as ThisError;

/// Custom error types for promptforge operations.
///
/// This enum represents all possible errors that can occur within the
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents a build request for a target the configuration does not declare
    #[error("Unknown target: '{name}' is not declared in the configuration.")]
    UnknownTargetError { name: String },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
