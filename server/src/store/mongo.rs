use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::parse_object_id;
use crate::domain::{NewTodo, StoreError, Todo, TodoChanges, TodoRepository};

const COLLECTION: &str = "todos";

/// Stored shape of a todo in the `todos` collection.
#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    completed: bool,
    #[serde(rename = "createdAt")]
    created_at: BsonDateTime,
}

impl TodoDocument {
    fn into_todo(self) -> Result<Todo, StoreError> {
        let id = self
            .id
            .ok_or_else(|| StoreError::Backend("todo document without _id".to_string()))?;
        Ok(Todo {
            id: id.to_hex(),
            title: self.title,
            description: self.description,
            completed: self.completed,
            created_at: to_utc(self.created_at),
        })
    }
}

fn to_utc(value: BsonDateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

fn set_document(changes: TodoChanges) -> Document {
    let mut set = Document::new();
    if let Some(title) = changes.title {
        set.insert("title", title);
    }
    if let Some(description) = changes.description {
        set.insert("description", description);
    }
    if let Some(completed) = changes.completed {
        set.insert("completed", completed);
    }
    set
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// Todo repository backed by a MongoDB collection.
///
/// The driver's `Client` pools connections internally; one repository is
/// created at startup and shared by every request.
#[derive(Clone)]
pub struct MongoTodoRepository {
    collection: Collection<TodoDocument>,
}

impl MongoTodoRepository {
    /// Connect to `uri`, verify the deployment answers a `ping`, and bind to
    /// the `todos` collection of `database`.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(database);
        database.run_command(doc! { "ping": 1 }).await?;
        info!(database = database.name(), "connected to MongoDB");
        Ok(Self::new(&database))
    }

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl TodoRepository for MongoTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let documents: Vec<TodoDocument> = self.collection.find(doc! {}).await?.try_collect().await?;
        documents.into_iter().map(TodoDocument::into_todo).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        let oid = parse_object_id(id)?;
        self.collection
            .find_one(doc! { "_id": oid })
            .await?
            .map(TodoDocument::into_todo)
            .transpose()
    }

    async fn create(&self, data: NewTodo) -> Result<Todo, StoreError> {
        if data.title.is_empty() {
            return Err(StoreError::MissingTitle);
        }
        let mut document = TodoDocument {
            id: None,
            title: data.title,
            description: data.description,
            completed: data.completed,
            created_at: BsonDateTime::from_millis(Utc::now().timestamp_millis()),
        };
        let result = self.collection.insert_one(&document).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Backend(format!("unexpected inserted id {}", result.inserted_id)))?;
        debug!(%id, "inserted todo document");
        document.id = Some(id);
        document.into_todo()
    }

    async fn update(&self, id: &str, changes: TodoChanges) -> Result<Option<Todo>, StoreError> {
        let oid = parse_object_id(id)?;
        let set = set_document(changes);
        if set.is_empty() {
            return self.find_by_id(id).await;
        }
        self.collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?
            .map(TodoDocument::into_todo)
            .transpose()
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let oid = parse_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_uses_mongo_field_names() {
        let document = TodoDocument {
            id: None,
            title: "Buy milk".to_string(),
            description: None,
            completed: false,
            created_at: BsonDateTime::from_millis(0),
        };
        let bson = mongodb::bson::to_document(&document).unwrap();
        assert!(!bson.contains_key("_id"));
        assert!(!bson.contains_key("description"));
        assert!(bson.contains_key("createdAt"));
        assert_eq!(bson.get_str("title").unwrap(), "Buy milk");
    }

    #[test]
    fn document_maps_object_id_to_hex() {
        let oid = ObjectId::new();
        let todo = TodoDocument {
            id: Some(oid),
            title: "t".to_string(),
            description: Some("d".to_string()),
            completed: true,
            created_at: BsonDateTime::from_millis(1_700_000_000_000),
        }
        .into_todo()
        .unwrap();
        assert_eq!(todo.id, oid.to_hex());
        assert_eq!(todo.created_at.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn set_document_only_contains_present_fields() {
        let set = set_document(TodoChanges {
            title: Some("new".to_string()),
            description: None,
            completed: Some(true),
        });
        assert_eq!(set, doc! { "title": "new", "completed": true });
        assert!(set_document(TodoChanges::default()).is_empty());
    }
}
