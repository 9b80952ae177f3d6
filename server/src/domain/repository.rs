use async_trait::async_trait;
use thiserror::Error;

use super::todo::{NewTodo, Todo, TodoChanges};

/// Failures reported by a [`TodoRepository`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id is not a well-formed identifier for the backing store.
    #[error("invalid todo id `{0}`")]
    InvalidId(String),

    #[error("title is required")]
    MissingTitle,

    /// The store was unreachable or rejected the operation.
    #[error("store failure: {0}")]
    Backend(String),
}

/// Persistence boundary for todos.
///
/// Implementations translate between the store's native document shape and
/// [`Todo`]; nothing above this trait knows how ids or fields are stored.
/// Absence is reported as `None`/`false`, never as an error.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// All todos in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StoreError>;

    /// Persist a new todo. Rejects an empty title with [`StoreError::MissingTitle`].
    async fn create(&self, data: NewTodo) -> Result<Todo, StoreError>;

    /// Write the present fields of `changes` and return the stored result.
    async fn update(&self, id: &str, changes: TodoChanges) -> Result<Option<Todo>, StoreError>;

    /// Returns whether a record was actually removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
