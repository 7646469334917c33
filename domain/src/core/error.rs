//! Domain error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single URL's fetch/decode/extract pipeline.
///
/// Every variant is isolated per URL: it is logged and turned into an
/// empty outcome, never propagated to the rest of the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, DNS, TLS, timeout or body read failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("HTTP {code} {reason}")]
    Status { code: u16, reason: String },

    /// The body is not valid JSON
    #[error("Invalid JSON body: {0}")]
    Decode(String),

    /// The body is valid JSON but not an array of strings
    #[error("Unexpected payload shape: {0}")]
    Shape(String),

    /// Anything that does not fit the known kinds (e.g. a panicking fetch)
    #[error("Unclassified failure: {0}")]
    Unclassified(String),
}

impl FetchError {
    pub fn status(code: u16, reason: impl Into<String>) -> Self {
        FetchError::Status {
            code,
            reason: reason.into(),
        }
    }

    /// Classifier used in logs and summaries
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Transport(_) => FailureKind::Transport,
            FetchError::Status { .. } => FailureKind::Status,
            FetchError::Decode(_) => FailureKind::Decode,
            FetchError::Shape(_) => FailureKind::Shape,
            FetchError::Unclassified(_) => FailureKind::Unclassified,
        }
    }

    /// HTTP status code, when the failure carries one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Diagnostic detail without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            FetchError::Transport(msg)
            | FetchError::Decode(msg)
            | FetchError::Shape(msg)
            | FetchError::Unclassified(msg) => msg,
            FetchError::Status { reason, .. } => reason,
        }
    }
}

/// Tag of a [`FetchError`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Transport,
    Status,
    Decode,
    Shape,
    Unclassified,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Status => "status",
            FailureKind::Decode => "decode",
            FailureKind::Shape => "shape",
            FailureKind::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
