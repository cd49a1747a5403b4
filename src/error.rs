//! Error types for encoding and negotiation.

use thiserror::Error;

/// How an error should be treated by the caller's top-level handler.
///
/// A [`Fatal`](Severity::Fatal) error means the response body could not be
/// produced and the handler should emit a generic 500-class response. A
/// [`Recoverable`](Severity::Recoverable) error is a configuration mistake
/// that surfaces before any request is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The caller can correct the condition (bad configuration value).
    Recoverable,
    /// The response cannot be produced; escalate to a generic failure.
    Fatal,
}

/// Errors that can occur when encoding a response body.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode XML: {0}")]
    Xml(#[from] quick_xml::SeError),

    #[error("invalid format identifier '{0}': expected \"json\" or \"xml\"")]
    InvalidFormat(String),
}

impl EncodeError {
    /// Classify this error for the caller's top-level handler.
    ///
    /// Marshal failures are fatal: the body bytes do not exist, so the only
    /// reasonable reply is a generic server error. An invalid format
    /// identifier is recoverable: it is rejected while parsing
    /// configuration, before any request reaches an encoder.
    pub fn severity(&self) -> Severity {
        match self {
            EncodeError::Json(_) | EncodeError::Xml(_) => Severity::Fatal,
            EncodeError::InvalidFormat(_) => Severity::Recoverable,
        }
    }

    /// Check whether this error should abort response production.
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}
