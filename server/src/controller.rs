//! HTTP handlers for `/api/todos`.
//!
//! Each handler calls exactly one use case and maps its outcome to a status
//! code. Failures always carry a `{ "message": ... }` body.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::TodoError;
use crate::use_cases::{CreateTodo, CreateTodoInput, DeleteTodo, GetAllTodos, TodoPatch, UpdateTodo};

pub const DELETED_MESSAGE: &str = "Todo deleted";

/// Body of every non-entity response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// JSON request body whose parse failures answer 400 with a message body.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(BodyRejection))]
pub struct JsonBody<T>(pub T);

pub struct BodyRejection(JsonRejection);

impl From<JsonRejection> for BodyRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection)
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(MessageBody::new(self.0.body_text()))).into_response()
    }
}

/// The four todo use cases, shared by every request.
pub struct TodoController {
    create_todo: CreateTodo,
    get_all_todos: GetAllTodos,
    update_todo: UpdateTodo,
    delete_todo: DeleteTodo,
}

impl TodoController {
    pub fn new(
        create_todo: CreateTodo,
        get_all_todos: GetAllTodos,
        update_todo: UpdateTodo,
        delete_todo: DeleteTodo,
    ) -> Self {
        Self {
            create_todo,
            get_all_todos,
            update_todo,
            delete_todo,
        }
    }
}

fn failure(status: StatusCode, err: TodoError) -> Response {
    if status.is_server_error() {
        error!(%status, "{err}");
    } else {
        info!(%status, "{err}");
    }
    (status, Json(MessageBody::new(err.to_string()))).into_response()
}

fn no_route(status: StatusCode, method: Method, uri: Uri) -> Response {
    info!(%status, "{method} {uri}: no route");
    let message = format!("Cannot {method} {}", uri.path());
    (status, Json(MessageBody::new(message))).into_response()
}

/// Fallback for paths no route matches.
pub async fn unmatched(method: Method, uri: Uri) -> Response {
    no_route(StatusCode::NOT_FOUND, method, uri)
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    no_route(StatusCode::METHOD_NOT_ALLOWED, method, uri)
}

/// GET /api/todos
pub async fn get_all_todos(State(controller): State<Arc<TodoController>>) -> Response {
    info!("GET /api/todos");

    match controller.get_all_todos.execute().await {
        Ok(todos) => (StatusCode::OK, Json(todos)).into_response(),
        Err(err) => failure(StatusCode::INTERNAL_SERVER_ERROR, err),
    }
}

/// POST /api/todos
///
/// Every failure here is a 400, store failures included.
pub async fn create_todo(
    State(controller): State<Arc<TodoController>>,
    JsonBody(input): JsonBody<CreateTodoInput>,
) -> Response {
    info!("POST /api/todos");

    match controller.create_todo.execute(input).await {
        Ok(todo) => (StatusCode::CREATED, Json(todo)).into_response(),
        Err(err) => failure(StatusCode::BAD_REQUEST, err),
    }
}

/// PUT /api/todos/{id}
pub async fn update_todo(
    State(controller): State<Arc<TodoController>>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<TodoPatch>,
) -> Response {
    info!("PUT /api/todos/{id}");

    match controller.update_todo.execute(&id, patch).await {
        Ok(todo) => (StatusCode::OK, Json(todo)).into_response(),
        Err(err) => {
            let status = match err {
                TodoError::Validation(_) => StatusCode::BAD_REQUEST,
                TodoError::NotFound => StatusCode::NOT_FOUND,
                TodoError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            failure(status, err)
        }
    }
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(controller): State<Arc<TodoController>>,
    Path(id): Path<String>,
) -> Response {
    info!("DELETE /api/todos/{id}");

    match controller.delete_todo.execute(&id).await {
        Ok(_) => (StatusCode::OK, Json(MessageBody::new(DELETED_MESSAGE))).into_response(),
        Err(err) => {
            let status = match err {
                TodoError::Validation(_) => StatusCode::BAD_REQUEST,
                TodoError::NotFound => StatusCode::NOT_FOUND,
                TodoError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            failure(status, err)
        }
    }
}
