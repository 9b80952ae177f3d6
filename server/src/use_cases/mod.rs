//! One type per application operation. Each holds only the repository handle
//! and is built once at startup by [`AppContext`](crate::AppContext).

mod create;
mod delete;
mod get_all;
mod update;

pub use create::{CreateTodo, CreateTodoInput};
pub use delete::DeleteTodo;
pub use get_all::GetAllTodos;
pub use update::{TodoPatch, UpdateTodo};

use tracing::warn;

use crate::domain::{StoreError, Todo, TodoRepository};
use crate::error::{TodoError, ID_REQUIRED};

/// Load the todo that an update or delete targets. A malformed id cannot name
/// a stored record, so it is reported as not found.
async fn require_existing(repository: &dyn TodoRepository, id: &str) -> Result<Todo, TodoError> {
    if id.is_empty() {
        return Err(TodoError::validation(ID_REQUIRED));
    }
    match repository.find_by_id(id).await {
        Ok(Some(todo)) => Ok(todo),
        Ok(None) | Err(StoreError::InvalidId(_)) => {
            warn!(id, "todo not found");
            Err(TodoError::NotFound)
        }
        Err(err) => Err(err.into()),
    }
}
