use content::ContentError;

/// Unified error type for the wellness crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WellnessError {
    /// Invalid input provided by the caller.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A referenced record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// The request conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ContentError> for WellnessError {
    fn from(err: ContentError) -> Self {
        WellnessError::InvalidInput(err.to_string())
    }
}

/// Result type alias using [`WellnessError`].
pub type WellnessResult<T> = Result<T, WellnessError>;
