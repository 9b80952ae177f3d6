//! Concrete [`TodoRepository`](crate::domain::TodoRepository) adapters.
//!
//! Both adapters use MongoDB ObjectId hex strings as todo ids, so the HTTP
//! layer sees the same id rules regardless of which one is configured.

mod memory;
mod mongo;

pub use memory::MemoryTodoRepository;
pub use mongo::MongoTodoRepository;

use mongodb::bson::oid::ObjectId;

use crate::domain::StoreError;

fn parse_object_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}
