//! Wire types for the task-tracker REST API
//!
//! Field names are camelCase on the wire. Patches omit absent fields so the
//! server leaves them untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use taskdeck_core::Priority;

/// Payload for `POST /api/tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Payload for `PATCH /api/tasks/{id}`.
///
/// Every field is optional; only present fields are updated. Completion
/// toggling is a patch carrying just `completed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch carrying only a completion flag
    pub fn completion(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_serializes_camel_case() {
        let req = CreateTaskRequest {
            title: "Water the plants".to_string(),
            priority: Priority::Low,
            description: None,
            due_date: Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["title"], "Water the plants");
        assert_eq!(json["priority"], "low");
        assert_eq!(json["dueDate"], "2026-03-01");
        // Absent description is omitted entirely
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_patch_omits_absent_fields() {
        let patch = TaskPatch {
            title: Some("New title".to_string()),
            ..TaskPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["title"], "New title");
        assert!(json.get("priority").is_none());
        assert!(json.get("completed").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_completion_patch_carries_only_completed() {
        let json = serde_json::to_value(TaskPatch::completion(true)).unwrap();
        assert_eq!(json, serde_json::json!({ "completed": true }));
    }
}
