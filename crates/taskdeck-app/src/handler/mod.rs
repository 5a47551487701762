//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers routed by the focused component's mode
//! - `list`: List-level intents and service completion handling
//! - `item`: Per-card state machine handlers
//! - `form`: Creation form handlers

pub(crate) mod form;
pub(crate) mod item;
pub(crate) mod keys;
pub(crate) mod list;
pub(crate) mod update;


use taskdeck_client::{CreateTaskRequest, TaskPatch};
use taskdeck_core::TaskId;

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Fetch the canonical task collection
    LoadTasks,

    /// Create a task from a validated draft
    CreateTask { request: CreateTaskRequest },

    /// Apply a partial update to a task
    UpdateTask { id: TaskId, patch: TaskPatch },

    /// Delete a task
    DeleteTask { id: TaskId },

    /// Set a task's completion flag
    ToggleTask { id: TaskId, completed: bool },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
