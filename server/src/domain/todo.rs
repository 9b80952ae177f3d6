use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted todo item as seen by the use cases and serialized to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Data for a todo that has not been stored yet. The store assigns `id` and
/// `created_at`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Field replacements for an existing todo. `None` leaves the stored value
/// untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    /// Apply the present fields to `todo` in place.
    pub fn apply_to(self, todo: &mut Todo) {
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(description) = self.description {
            todo.description = Some(description);
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Todo {
        Todo {
            id: "65f1c0ffee0000000000beef".to_string(),
            title: "Test".to_string(),
            description: None,
            completed: false,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn todo_serializes_with_camel_case_timestamp() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "65f1c0ffee0000000000beef");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
        assert_eq!(json["createdAt"], "2023-11-14T22:13:20Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn absent_description_is_omitted() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("description").is_none());
    }

    #[test]
    fn empty_changes_leave_todo_untouched() {
        let mut todo = sample();
        let changes = TodoChanges::default();
        assert!(changes.is_empty());
        changes.apply_to(&mut todo);
        assert_eq!(todo, sample());
    }

    #[test]
    fn changes_replace_only_present_fields() {
        let mut todo = sample();
        TodoChanges {
            title: None,
            description: Some("Details".to_string()),
            completed: Some(true),
        }
        .apply_to(&mut todo);
        assert_eq!(todo.title, "Test");
        assert_eq!(todo.description.as_deref(), Some("Details"));
        assert!(todo.completed);
    }
}
