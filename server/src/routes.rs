use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controller::{self, TodoController};

pub fn routes(controller: Arc<TodoController>) -> Router {
    Router::new()
        .route(
            "/api/todos",
            get(controller::get_all_todos).post(controller::create_todo),
        )
        .route(
            "/api/todos/{id}",
            put(controller::update_todo).delete(controller::delete_todo),
        )
        .fallback(controller::unmatched)
        .method_not_allowed_fallback(controller::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(controller)
}
