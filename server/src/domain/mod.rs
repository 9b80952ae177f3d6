//! Todo entity and the persistence contract the use cases depend on.

mod repository;
mod todo;

pub use repository::{StoreError, TodoRepository};
pub use todo::{NewTodo, Todo, TodoChanges};
