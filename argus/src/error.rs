// argus/src/error.rs

use std::fmt;
use std::io;

/// Custom error type for argus operations
#[derive(Debug)]
pub enum ArgusError {
    /// IO-related errors
    IoError(io::Error),
    /// Note storage errors
    StorageError(String),
    /// Record export/serialization errors
    ExportError(String),
    /// Configuration errors
    ConfigError(String),
    /// Dashboard feed errors
    FeedError(String),
}

impl fmt::Display for ArgusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgusError::IoError(e) => write!(f, "IO error: {}", e),
            ArgusError::StorageError(e) => write!(f, "Storage error: {}", e),
            ArgusError::ExportError(e) => write!(f, "Export error: {}", e),
            ArgusError::ConfigError(e) => write!(f, "Config error: {}", e),
            ArgusError::FeedError(e) => write!(f, "Feed error: {}", e),
        }
    }
}

impl std::error::Error for ArgusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgusError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ArgusError {
    fn from(err: io::Error) -> Self {
        ArgusError::IoError(err)
    }
}

impl From<serde_json::Error> for ArgusError {
    fn from(err: serde_json::Error) -> Self {
        ArgusError::ExportError(format!("JSON serialization error: {}", err))
    }
}

impl From<String> for ArgusError {
    fn from(err: String) -> Self {
        ArgusError::StorageError(err)
    }
}

impl From<&str> for ArgusError {
    fn from(err: &str) -> Self {
        ArgusError::StorageError(err.to_string())
    }
}

/// Result type for argus operations
pub type Result<T> = std::result::Result<T, ArgusError>;
