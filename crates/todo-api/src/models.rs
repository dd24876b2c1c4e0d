//! Task Models
//!
//! Data structures matching the server's JSON records.

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier
pub type TaskId = u32;

/// A task as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    /// ISO-8601, display only
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    /// ISO-8601, display only
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<String>,
}

impl Task {
    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}

/// Body of `POST /api/todos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

/// Body of `PUT /api/todos/{id}`. Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_from_camel_case() {
        let task: Task = serde_json::from_value(json!({
            "id": 7,
            "title": "Buy milk",
            "completed": false,
            "createdAt": "2024-05-01T09:00:00Z",
            "updatedAt": "2024-05-02T10:30:00Z"
        }))
        .unwrap();

        assert_eq!(task.id, 7);
        assert!(task.is_pending());
        assert_eq!(task.created_at.as_deref(), Some("2024-05-01T09:00:00Z"));
        assert_eq!(task.updated_at.as_deref(), Some("2024-05-02T10:30:00Z"));
    }

    #[test]
    fn test_task_accepts_snake_case_and_missing_timestamps() {
        let task: Task = serde_json::from_value(json!({
            "id": 1,
            "title": "A",
            "completed": true,
            "created_at": "2024-05-01T09:00:00Z"
        }))
        .unwrap();

        assert!(task.completed);
        assert_eq!(task.created_at.as_deref(), Some("2024-05-01T09:00:00Z"));
        assert!(task.updated_at.is_none());
    }

    #[test]
    fn test_patch_omits_absent_fields() {
        let body = serde_json::to_value(TaskPatch::completed(true)).unwrap();
        assert_eq!(body, json!({ "completed": true }));

        let body = serde_json::to_value(TaskPatch::title("New")).unwrap();
        assert_eq!(body, json!({ "title": "New" }));
    }

    #[test]
    fn test_new_task_body() {
        let body = serde_json::to_value(NewTask::new("B")).unwrap();
        assert_eq!(body, json!({ "title": "B" }));
    }
}
