//! Error types shared across the ChakraVue client crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for storage, serialization, and configuration faults.
///
/// Remote read paths never surface this type: list and detail fetches fold
/// their failures into empty values at the API seam. It covers the local
/// side of the system (settings storage, path resolution) and internal
/// invariant violations.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ChakraError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error (paths, base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data access error (settings storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChakraError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }
}

impl From<std::io::Error> for ChakraError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ChakraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias defaulting the error to [`ChakraError`].
pub type Result<T, E = ChakraError> = std::result::Result<T, E>;
