//! Errors shared by all line-cable toolkit crates.

/// Errors produced by the line-cable toolkit.
///
/// One variant per failure kind; the payload carries enough structural
/// context (cable id, layer index, frequency index) to locate the offending
/// element.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LcError {
    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    #[error("invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("math domain error in {context}")]
    Domain { context: String },

    #[error("numerical failure at frequency index {freq_index}: {reason}")]
    Numerical { freq_index: usize, reason: String },

    #[error("'{key}' not found")]
    NotFound { key: String },

    #[error("'{key}' already exists")]
    Duplicate { key: String },

    #[error("i/o failure: {reason}")]
    Io { reason: String },
}

impl LcError {
    /// Shorthand for an [`LcError::InvalidGeometry`] with a formatted reason.
    pub fn geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`LcError::InvalidValue`].
    pub fn value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`LcError::InvalidInput`].
    pub fn input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Convenience result type for line-cable toolkit operations.
pub type LcResult<T> = Result<T, LcError>;
