use thiserror::Error;

use crate::domain::StoreError;

pub(crate) const TITLE_REQUIRED: &str = "title is required";
pub(crate) const ID_REQUIRED: &str = "id is required";

/// Outcome classification for every use case. The controller picks the HTTP
/// status from the variant, never from the message.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TodoError {
    pub fn validation(message: impl Into<String>) -> Self {
        TodoError::Validation(message.into())
    }
}
