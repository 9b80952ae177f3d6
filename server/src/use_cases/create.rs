use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::domain::{NewTodo, StoreError, Todo, TodoRepository};
use crate::error::{TodoError, TITLE_REQUIRED};

/// Request body for creating a todo. `completed` is not accepted; new todos
/// always start open.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone)]
pub struct CreateTodo {
    repository: Arc<dyn TodoRepository>,
}

impl CreateTodo {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: CreateTodoInput) -> Result<Todo, TodoError> {
        let title = match input.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(TodoError::validation(TITLE_REQUIRED)),
        };

        let data = NewTodo {
            title,
            description: input.description,
            completed: false,
        };
        let todo = self.repository.create(data).await.map_err(|err| match err {
            StoreError::MissingTitle => TodoError::validation(TITLE_REQUIRED),
            other => TodoError::Store(other),
        })?;

        info!(id = %todo.id, "created todo");
        Ok(todo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTodoRepository;

    fn setup() -> (Arc<MemoryTodoRepository>, CreateTodo) {
        let repo = Arc::new(MemoryTodoRepository::new());
        let use_case = CreateTodo::new(repo.clone());
        (repo, use_case)
    }

    #[tokio::test]
    async fn creates_open_todo_with_generated_id() {
        let (_, use_case) = setup();
        let todo = use_case
            .execute(CreateTodoInput {
                title: Some("Test Todo".to_string()),
                description: Some("Test Description".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(todo.title, "Test Todo");
        assert_eq!(todo.description.as_deref(), Some("Test Description"));
        assert!(!todo.completed);
        assert!(!todo.id.is_empty());
    }

    #[tokio::test]
    async fn missing_title_is_rejected_without_writing() {
        let (repo, use_case) = setup();
        let err = use_case
            .execute(CreateTodoInput {
                title: None,
                description: Some("Test Description".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, TodoError::Validation(ref msg) if msg == "title is required"));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_title_is_rejected() {
        let (repo, use_case) = setup();
        let err = use_case
            .execute(CreateTodoInput {
                title: Some(String::new()),
                description: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, TodoError::Validation(_)));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn description_is_optional() {
        let (_, use_case) = setup();
        let todo = use_case
            .execute(CreateTodoInput {
                title: Some("Only title".to_string()),
                description: None,
            })
            .await
            .unwrap();
        assert!(todo.description.is_none());
    }
}
