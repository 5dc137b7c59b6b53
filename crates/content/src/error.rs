#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown resource kind: {0}")]
    UnknownResourceKind(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

pub type Result<T> = std::result::Result<T, ContentError>;
