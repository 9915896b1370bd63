//! Error types for ivn

use std::io;
use thiserror::Error;

/// Main error type for ivn
#[derive(Error, Debug)]
pub enum IvnError {
    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User registry error: {0}")]
    Registry(String),

    #[error("Command error: {0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for ivn operations
pub type Result<T> = std::result::Result<T, IvnError>;

impl From<String> for IvnError {
    fn from(s: String) -> Self {
        IvnError::Other(s)
    }
}

impl From<&str> for IvnError {
    fn from(s: &str) -> Self {
        IvnError::Other(s.to_string())
    }
}

impl From<serde_json::Error> for IvnError {
    fn from(e: serde_json::Error) -> Self {
        IvnError::Config(format!("JSON error: {}", e))
    }
}
