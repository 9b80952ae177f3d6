use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use super::require_existing;
use crate::domain::{StoreError, Todo, TodoChanges, TodoRepository};
use crate::error::TodoError;

/// Request body for updating a todo. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Keep only the "truthy" fields: blank strings and `completed: false`
    /// count as not supplied, so they never overwrite a stored value.
    pub fn into_changes(self) -> TodoChanges {
        TodoChanges {
            title: self.title.filter(|title| !title.is_empty()),
            description: self.description.filter(|description| !description.is_empty()),
            completed: self.completed.filter(|completed| *completed),
        }
    }
}

#[derive(Clone)]
pub struct UpdateTodo {
    repository: Arc<dyn TodoRepository>,
}

impl UpdateTodo {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str, patch: TodoPatch) -> Result<Todo, TodoError> {
        let existing = require_existing(self.repository.as_ref(), id).await?;

        let changes = patch.into_changes();
        if changes.is_empty() {
            return Ok(existing);
        }

        match self.repository.update(id, changes).await {
            Ok(Some(todo)) => {
                info!(id, "updated todo");
                Ok(todo)
            }
            // Removed between the lookup and the write.
            Ok(None) | Err(StoreError::InvalidId(_)) => {
                warn!(id, "todo disappeared before update");
                Err(TodoError::NotFound)
            }
            Err(err) => Err(err.into()),
        }
    }
}
