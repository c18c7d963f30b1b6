use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BookmarkerError {
    #[error("Page not found: {0}")]
    NotFound(Uuid),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Another import is still in progress")]
    ImportInProgress,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl BookmarkerError {
    /// Domain failures are reported to the user as notifications; everything
    /// else is an environmental fault that aborts the operation.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            BookmarkerError::NotFound(_)
                | BookmarkerError::Format(_)
                | BookmarkerError::Validation(_)
                | BookmarkerError::ImportInProgress
        )
    }
}

pub type Result<T> = std::result::Result<T, BookmarkerError>;
