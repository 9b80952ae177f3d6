//! Todo CRUD service over HTTP.
//!
//! Requests flow router → [`controller`] → [`use_cases`] → [`TodoRepository`]
//! → store. The repository is chosen at startup ([`store`]) and injected
//! through [`AppContext`]; nothing below the controller knows about HTTP and
//! nothing above the repository knows about the store's document format.

pub mod config;
pub mod context;
pub mod controller;
pub mod domain;
pub mod error;
pub mod routes;
pub mod store;
pub mod telemetry;
pub mod use_cases;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

pub use context::AppContext;
pub use controller::MessageBody;
pub use domain::{Todo, TodoRepository};
pub use error::TodoError;
pub use store::{MemoryTodoRepository, MongoTodoRepository};

/// Build the router for the given repository.
pub fn app(repository: Arc<dyn TodoRepository>) -> Router {
    AppContext::new(repository).router()
}

pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}
