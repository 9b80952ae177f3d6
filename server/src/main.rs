use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use todo_server::config::{Config, StoreKind};
use todo_server::{telemetry, AppContext, MemoryTodoRepository, MongoTodoRepository, TodoRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` may carry RUST_LOG, so it is loaded before the subscriber.
    dotenvy::dotenv().ok();
    telemetry::init();

    let config = Config::from_env()?;
    let repository: Arc<dyn TodoRepository> = match config.store {
        StoreKind::MongoDb => {
            info!(database = %config.mongodb_database, "connecting to MongoDB");
            Arc::new(MongoTodoRepository::connect(&config.mongodb_uri, &config.mongodb_database).await?)
        }
        StoreKind::Memory => {
            info!("using in-memory store");
            Arc::new(MemoryTodoRepository::new())
        }
    };
    let context = AppContext::new(repository);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    todo_server::run(listener, context.router()).await?;
    Ok(())
}
