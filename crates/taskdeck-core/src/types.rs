//! Task domain types
//!
//! These mirror the shape of tasks as served by the remote tracker. The
//! canonical collection is owned by the server; this layer never creates or
//! destroys a task locally, it only renders snapshots and emits mutation
//! intents.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Maximum accepted task title length, in characters
pub const TITLE_MAX_LEN: usize = 200;

/// Opaque unique task identifier, stable for the task's lifetime
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Sort weight: high > medium > low
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// Capitalized display label
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Lowercase wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parse a wire value. Returns `None` for anything outside the three
    /// known levels.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    /// Next level for selector controls (wraps around)
    pub fn next(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Previous level for selector controls (wraps around)
    pub fn prev(self) -> Self {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task as served by the remote tracker.
///
/// `priority` is kept as the raw wire string: the server has been observed to
/// hand out values outside the three known levels, and those are resolved to
/// medium for display and sorting only -- the stored value is never corrected
/// or written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// The task's priority resolved to a known level. Unrecognized or missing
    /// values fall back to [`Priority::Medium`].
    pub fn priority_level(&self) -> Priority {
        Priority::parse(&self.priority).unwrap_or_default()
    }

    /// Capitalized priority label. Unrecognized values keep their own text
    /// (capitalized); only the color mapping falls back to medium.
    pub fn priority_label(&self) -> String {
        if self.priority.is_empty() {
            return Priority::Medium.label().to_string();
        }
        let mut chars = self.priority.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// Which subset of the canonical collection is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All Tasks",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }

    /// Cycle to the next filter (All -> Active -> Completed -> All)
    pub fn next(self) -> Self {
        match self {
            TaskFilter::All => TaskFilter::Active,
            TaskFilter::Active => TaskFilter::Completed,
            TaskFilter::Completed => TaskFilter::All,
        }
    }

    /// UX copy shown when the derived list is empty
    pub fn empty_message(&self) -> &'static str {
        match self {
            TaskFilter::Completed => "You haven't completed any tasks yet. Keep going!",
            TaskFilter::Active => "Great job! You've completed all your active tasks.",
            TaskFilter::All => "Get started by creating your first task.",
        }
    }
}

/// Ordering applied to the visible subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first by creation time
    #[default]
    Date,
    /// Descending by priority weight
    Priority,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Date => "Sort by Date",
            SortKey::Priority => "Sort by Priority",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            SortKey::Date => SortKey::Priority,
            SortKey::Priority => SortKey::Date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn task_with_priority(priority: &str) -> Task {
        Task {
            id: TaskId::from("t1"),
            title: "Buy milk".to_string(),
            description: None,
            priority: priority.to_string(),
            completed: false,
            created_at: Utc.with_ymd_and_hms(2026, 1, 2, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 2, 9, 0, 0).unwrap(),
            due_date: None,
        }
    }

    #[test]
    fn test_priority_weight_ordering() {
        assert!(Priority::High.weight() > Priority::Medium.weight());
        assert!(Priority::Medium.weight() > Priority::Low.weight());
    }

    #[test]
    fn test_priority_parse_known_values() {
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse("high"), Some(Priority::High));
    }

    #[test]
    fn test_priority_parse_rejects_unknown() {
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(Priority::parse("HIGH"), None);
        assert_eq!(Priority::parse(""), None);
    }

    #[test]
    fn test_priority_cycling_wraps() {
        assert_eq!(Priority::Low.next(), Priority::Medium);
        assert_eq!(Priority::High.next(), Priority::Low);
        assert_eq!(Priority::Low.prev(), Priority::High);
    }

    #[test]
    fn test_unrecognized_priority_resolves_to_medium() {
        let task = task_with_priority("urgent");
        assert_eq!(task.priority_level(), Priority::Medium);
        // The stored value is untouched
        assert_eq!(task.priority, "urgent");
    }

    #[test]
    fn test_unrecognized_priority_label_keeps_raw_text() {
        let task = task_with_priority("urgent");
        assert_eq!(task.priority_label(), "Urgent");
    }

    #[test]
    fn test_missing_priority_labels_as_medium() {
        let task = task_with_priority("");
        assert_eq!(task.priority_label(), "Medium");
        assert_eq!(task.priority_level(), Priority::Medium);
    }

    #[test]
    fn test_filter_matches() {
        let active = task_with_priority("low");
        let mut done = task_with_priority("low");
        done.completed = true;

        assert!(TaskFilter::All.matches(&active));
        assert!(TaskFilter::All.matches(&done));
        assert!(TaskFilter::Active.matches(&active));
        assert!(!TaskFilter::Active.matches(&done));
        assert!(TaskFilter::Completed.matches(&done));
        assert!(!TaskFilter::Completed.matches(&active));
    }

    #[test]
    fn test_filter_cycle_covers_all_variants() {
        let f = TaskFilter::All;
        assert_eq!(f.next(), TaskFilter::Active);
        assert_eq!(f.next().next(), TaskFilter::Completed);
        assert_eq!(f.next().next().next(), TaskFilter::All);
    }

    #[test]
    fn test_task_serde_uses_camel_case() {
        let task = task_with_priority("high");
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_task_deserializes_without_priority() {
        let json = r#"{
            "id": "7",
            "title": "No priority set",
            "completed": false,
            "createdAt": "2026-01-02T09:00:00Z",
            "updatedAt": "2026-01-02T09:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, "");
        assert_eq!(task.priority_level(), Priority::Medium);
    }
}
