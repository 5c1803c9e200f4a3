//! Unified error types for the introspection library.
//!
//! Document accessors and the introspection engine share one error type so
//! that a failing accessor can be captured by the engine and rendered as an
//! error stub without any conversion layer.
use thiserror::Error;

/// Main error type for pptx-introspect operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A field selector path could not be parsed
    #[error("Malformed field path '{path}': {reason}")]
    MalformedFieldPath { path: String, reason: String },

    /// An access path could not be parsed
    #[error("Malformed access path '{path}': {reason}")]
    MalformedAccessPath { path: String, reason: String },

    /// Property is not available for this object's sub-type
    #[error("Property '{property}' is unavailable: {reason}")]
    PropertyUnavailable {
        property: &'static str,
        reason: String,
    },

    /// A value was outside its permitted range
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for [`Error::PropertyUnavailable`].
    pub(crate) fn unavailable(property: &'static str, reason: impl Into<String>) -> Self {
        Error::PropertyUnavailable {
            property,
            reason: reason.into(),
        }
    }
}

/// Result type for pptx-introspect operations.
pub type Result<T> = std::result::Result<T, Error>;
