use std::sync::Arc;

use axum::Router;

use crate::controller::TodoController;
use crate::domain::TodoRepository;
use crate::routes::routes;
use crate::use_cases::{CreateTodo, DeleteTodo, GetAllTodos, UpdateTodo};

/// Everything a request needs, wired once at startup from a single repository.
#[derive(Clone)]
pub struct AppContext {
    controller: Arc<TodoController>,
}

impl AppContext {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        let controller = TodoController::new(
            CreateTodo::new(Arc::clone(&repository)),
            GetAllTodos::new(Arc::clone(&repository)),
            UpdateTodo::new(Arc::clone(&repository)),
            DeleteTodo::new(repository),
        );
        Self {
            controller: Arc::new(controller),
        }
    }

    pub fn router(&self) -> Router {
        routes(Arc::clone(&self.controller))
    }
}
