#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),

    #[error("Todo with id '{0}' not found")]
    NotFound(String),

    /// Reserve arm of the status contract, mapped to 500. Nothing in the
    /// in-memory path raises it.
    #[error("{0}")]
    Internal(String),
}

impl TodoError {
    pub fn blank_title() -> Self {
        Self::Validation("Title is required and must be a non-empty string".into())
    }
}
