use std::sync::Arc;

use crate::domain::{Todo, TodoRepository};
use crate::error::TodoError;

#[derive(Clone)]
pub struct GetAllTodos {
    repository: Arc<dyn TodoRepository>,
}

impl GetAllTodos {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.repository.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTodoRepository;
    use crate::use_cases::test_support::UnreachableStore;

    #[tokio::test]
    async fn empty_store_yields_empty_list() {
        let use_case = GetAllTodos::new(Arc::new(MemoryTodoRepository::new()));
        assert!(use_case.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let use_case = GetAllTodos::new(Arc::new(UnreachableStore));
        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(err, TodoError::Store(_)));
    }
}
