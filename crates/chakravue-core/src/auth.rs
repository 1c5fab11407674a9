//! Login identity and authentication error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The doctor identity decoded from a successful login response.
///
/// All three fields are required in the wire payload; a response missing any
/// of them is treated as undecodable rather than defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Structured error body returned by the backend on a rejected request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

/// Failures of the login path.
///
/// `Display` carries the user-facing message: for `Rejected` it is exactly
/// the backend's `detail` string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The backend declined the credentials with a structured error body.
    #[error("{0}")]
    Rejected(String),

    /// Transport or decoding failure before a structured answer was read.
    #[error("{0}")]
    Connection(String),

    /// A login attempt was already submitting.
    #[error("login already in progress")]
    InProgress,

    /// The session could not be persisted after a successful exchange.
    #[error("{0}")]
    Storage(String),
}

impl AuthError {
    /// Wraps a transport-level failure, falling back to a generic message
    /// when the underlying error has none.
    pub fn connection(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self::Connection("Connection failed".to_string())
        } else {
            Self::Connection(message)
        }
    }
}
