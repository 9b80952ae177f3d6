use std::sync::Arc;

use tracing::{info, warn};

use super::require_existing;
use crate::domain::{StoreError, TodoRepository};
use crate::error::TodoError;

#[derive(Clone)]
pub struct DeleteTodo {
    repository: Arc<dyn TodoRepository>,
}

impl DeleteTodo {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Remove the todo. Returns `true` on success; a second delete of the same
    /// id is [`TodoError::NotFound`].
    pub async fn execute(&self, id: &str) -> Result<bool, TodoError> {
        require_existing(self.repository.as_ref(), id).await?;

        match self.repository.delete(id).await {
            Ok(true) => {
                info!(id, "deleted todo");
                Ok(true)
            }
            Ok(false) | Err(StoreError::InvalidId(_)) => {
                warn!(id, "todo disappeared before delete");
                Err(TodoError::NotFound)
            }
            Err(err) => Err(err.into()),
        }
    }
}
