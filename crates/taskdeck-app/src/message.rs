//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use taskdeck_core::{Task, TaskId};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // List View Messages
    // ─────────────────────────────────────────────────────────
    /// Move selection down one card
    SelectNext,
    /// Move selection up one card
    SelectPrev,
    /// Jump selection to the first card
    SelectFirst,
    /// Jump selection to the last card
    SelectLast,
    /// Cycle filter (all -> active -> completed)
    CycleFilter,
    /// Toggle sort key (date <-> priority)
    ToggleSort,
    /// Re-fetch the canonical task collection
    Refresh,

    // ─────────────────────────────────────────────────────────
    // Item Intents
    // ─────────────────────────────────────────────────────────
    /// Set a task's completion flag (checkbox/switch)
    ToggleCompletion { id: TaskId, completed: bool },
    /// Enter edit mode on the selected card
    StartEdit,
    /// Character input into the focused edit field
    EditInput { c: char },
    /// Backspace in the focused edit field
    EditBackspace,
    /// Move edit focus to the next field
    EditNextField,
    /// Move edit focus to the previous field
    EditPrevField,
    /// Cycle the edit buffer's priority forward
    EditPriorityNext,
    /// Cycle the edit buffer's priority backward
    EditPriorityPrev,
    /// Save the edit buffer (emits an update intent)
    SaveEdit,
    /// Discard the edit buffer
    CancelEdit,
    /// Ask for delete confirmation on the selected card
    RequestDelete,
    /// Confirm deletion (emits a delete intent)
    ConfirmDelete,
    /// Dismiss the delete confirmation
    CancelDelete,

    // ─────────────────────────────────────────────────────────
    // Creation Form Messages
    // ─────────────────────────────────────────────────────────
    /// Expand the creation form
    OpenForm,
    /// Discard the draft and collapse the form
    CancelForm,
    /// Character input into the focused form field
    FormInput { c: char },
    /// Backspace in the focused form field
    FormBackspace,
    /// Move form focus to the next field
    FormNextField,
    /// Move form focus to the previous field
    FormPrevField,
    /// Cycle the draft priority forward
    FormPriorityNext,
    /// Cycle the draft priority backward
    FormPriorityPrev,
    /// Validate and submit the draft
    SubmitForm,

    // ─────────────────────────────────────────────────────────
    // Service Completion Messages
    // ─────────────────────────────────────────────────────────
    /// Canonical collection fetched
    TasksLoaded { tasks: Vec<Task> },
    /// Canonical fetch failed
    TasksLoadFailed { error: String },
    /// Create succeeded
    CreateCompleted { task: Task },
    /// Create failed
    CreateFailed { error: String },
    /// Update succeeded
    UpdateCompleted { id: TaskId },
    /// Update failed
    UpdateFailed { id: TaskId, error: String },
    /// Delete succeeded
    DeleteCompleted { id: TaskId },
    /// Delete failed
    DeleteFailed { id: TaskId, error: String },
    /// Completion toggle succeeded
    ToggleCompleted { id: TaskId },
    /// Completion toggle failed
    ToggleFailed { id: TaskId, error: String },
}
