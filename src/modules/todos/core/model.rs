use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Stamps `created_at` and `updated_at` with the same instant.
    pub fn new(title: String, description: String, completed: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7().to_string(),
            title,
            description,
            completed,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod todo_model_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_stamp_equal_timestamps_on_creation() {
        let todo = Todo::new("Buy milk".into(), String::new(), false);
        assert_eq!(todo.created_at, todo.updated_at);
        assert!(!todo.completed);
    }

    #[rstest]
    fn it_should_generate_a_unique_id_per_record() {
        let a = Todo::new("a".into(), String::new(), false);
        let b = Todo::new("b".into(), String::new(), false);
        assert_ne!(a.id, b.id);
    }

    #[rstest]
    fn it_should_refresh_updated_at_on_touch() {
        let mut todo = Todo::new("Buy milk".into(), String::new(), false);
        let created = todo.created_at;
        todo.touch();
        assert!(todo.updated_at >= created);
        assert_eq!(todo.created_at, created);
    }

    #[rstest]
    fn it_should_serialize_with_camel_case_timestamps() {
        let todo = Todo::new("Buy milk".into(), "2%".into(), false);
        let json = serde_json::to_value(&todo).expect("serialize failed");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["description"], "2%");
    }
}
