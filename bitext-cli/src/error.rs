//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// The Chinese sentence argument is not a JSON array of strings
    InvalidChineseJson(String),
    /// The English paragraph could not be read
    InputError(String),
    /// Configuration file error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidChineseJson(msg) => {
                write!(f, "Chinese sentences must be a JSON array of strings: {msg}")
            }
            CliError::InputError(msg) => write!(f, "Input error: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
