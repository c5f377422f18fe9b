//! Protocol error types
//!
//! Every failure the codec can report. All violations are detected at the
//! point they occur and surfaced immediately; nothing is retried or
//! silently recovered.

use thiserror::Error;

/// Errors that can occur during encode, decode, verification, or inference
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Tag key violates charset or length rules
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Header version or timestamp out of range
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Value tree cannot be represented (heterogeneous vector, unsupported
    /// kind, oversized container, excessive nesting on encode/inference)
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Raw bytes are structurally impossible (truncated buffer, unknown
    /// type tag, negative tag count, excessive nesting on decode)
    #[error("malformed data: {0}")]
    MalformedData(String),

    /// Key at the current position disagrees with the scheme's expected key
    #[error("scheme mismatch: expected key {expected:?}, got {actual:?}")]
    SchemeMismatch { expected: String, actual: String },

    /// Scheme and payload disagree in container or vector length
    #[error("scheme shape mismatch: scheme has {expected} entries, payload has {actual}")]
    SchemeShapeMismatch { expected: usize, actual: usize },

    /// A value's runtime kind disagrees with its scheme descriptor
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl ProtocolError {
    /// Create an invalid key error
    #[inline]
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        Self::InvalidKey(msg.into())
    }

    /// Create an invalid header error
    #[inline]
    pub fn invalid_header(msg: impl Into<String>) -> Self {
        Self::InvalidHeader(msg.into())
    }

    /// Create an invalid value error
    #[inline]
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Create a malformed data error
    #[inline]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedData(msg.into())
    }

    /// Create a malformed data error for a truncated buffer
    #[inline]
    pub fn too_short(expected: usize, actual: usize) -> Self {
        Self::MalformedData(format!(
            "buffer too short: need {expected} bytes, have {actual}"
        ))
    }

    /// Create a scheme mismatch error
    #[inline]
    pub fn scheme_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::SchemeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a scheme shape mismatch error
    #[inline]
    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::SchemeShapeMismatch { expected, actual }
    }

    /// Create a type mismatch error
    #[inline]
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch { expected, actual }
    }
}
