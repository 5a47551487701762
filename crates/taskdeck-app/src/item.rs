//! Per-task UI state machine
//!
//! Each displayed task is in exactly one of three modes: viewing, editing, or
//! confirming deletion. Modeling this as a tagged union makes the impossible
//! combinations (editing while confirming, two open buffers for one card)
//! unrepresentable.

use taskdeck_client::TaskPatch;
use taskdeck_core::{Priority, Task};

/// Transient UI state of a single task card.
///
/// The default (and the state of any task without an entry in the state map)
/// is `Viewing`. `Editing` owns the edit buffer; it is seeded on entry and
/// discarded on save or cancel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ItemUiState {
    #[default]
    Viewing,
    Editing(EditBuffer),
    ConfirmingDelete,
}

impl ItemUiState {
    pub fn is_editing(&self) -> bool {
        matches!(self, ItemUiState::Editing(_))
    }

    pub fn is_confirming_delete(&self) -> bool {
        matches!(self, ItemUiState::ConfirmingDelete)
    }
}

/// Unsaved field values for a task being edited, plus which field the
/// keyboard is focused on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub focus: EditField,
}

impl EditBuffer {
    /// Seed the buffer from the task's current fields. An unrecognized
    /// priority seeds as medium, same as the display fallback.
    pub fn seed(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority_level(),
            focus: EditField::Title,
        }
    }

    /// The partial update a save emits. All three edited fields are sent;
    /// an empty description is omitted rather than sent as empty (the server
    /// leaves an omitted field untouched).
    pub fn to_patch(&self) -> TaskPatch {
        TaskPatch {
            title: Some(self.title.clone()),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            priority: Some(self.priority),
            completed: None,
        }
    }
}

/// Focusable fields of the edit view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Title,
    Description,
    Priority,
}

impl EditField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Priority,
            Self::Priority => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Priority,
            Self::Description => Self::Title,
            Self::Priority => Self::Description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_client::test_utils::test_task_full;

    #[test]
    fn test_seed_copies_task_fields() {
        let mut task = test_task_full("1", "Buy milk", "high", false);
        task.description = Some("2 liters".to_string());

        let buffer = EditBuffer::seed(&task);
        assert_eq!(buffer.title, "Buy milk");
        assert_eq!(buffer.description, "2 liters");
        assert_eq!(buffer.priority, Priority::High);
        assert_eq!(buffer.focus, EditField::Title);
    }

    #[test]
    fn test_seed_falls_back_to_medium_priority() {
        let task = test_task_full("1", "Buy milk", "whenever", false);
        let buffer = EditBuffer::seed(&task);
        assert_eq!(buffer.priority, Priority::Medium);
    }

    #[test]
    fn test_patch_omits_empty_description() {
        let task = test_task_full("1", "Buy milk", "low", false);
        let buffer = EditBuffer::seed(&task);
        let patch = buffer.to_patch();
        assert_eq!(patch.title.as_deref(), Some("Buy milk"));
        assert!(patch.description.is_none());
        assert_eq!(patch.priority, Some(Priority::Low));
        assert!(patch.completed.is_none());
    }

    #[test]
    fn test_edit_field_cycle_wraps() {
        assert_eq!(EditField::Title.next(), EditField::Description);
        assert_eq!(EditField::Priority.next(), EditField::Title);
        assert_eq!(EditField::Title.prev(), EditField::Priority);
    }
}
