use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::parse_object_id;
use crate::domain::{NewTodo, StoreError, Todo, TodoChanges, TodoRepository};

type Records = Arc<RwLock<Vec<Todo>>>;

/// Process-local store. Records are kept in insertion order.
#[derive(Clone, Default)]
pub struct MemoryTodoRepository {
    records: Records,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for MemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        let id = parse_object_id(id)?.to_hex();
        let records = self.records.read().await;
        Ok(records.iter().find(|todo| todo.id == id).cloned())
    }

    async fn create(&self, data: NewTodo) -> Result<Todo, StoreError> {
        if data.title.is_empty() {
            return Err(StoreError::MissingTitle);
        }
        let todo = Todo {
            id: ObjectId::new().to_hex(),
            title: data.title,
            description: data.description,
            completed: data.completed,
            created_at: Utc::now(),
        };
        self.records.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: &str, changes: TodoChanges) -> Result<Option<Todo>, StoreError> {
        let id = parse_object_id(id)?.to_hex();
        let mut records = self.records.write().await;
        let Some(todo) = records.iter_mut().find(|todo| todo.id == id) else {
            return Ok(None);
        };
        changes.apply_to(todo);
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let id = parse_object_id(id)?.to_hex();
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|todo| todo.id != id);
        Ok(records.len() < before)
    }
}
