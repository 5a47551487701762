//! The async service seam between the UI and the remote tracker
//!
//! The app crate orchestrates exclusively against this trait, so the HTTP
//! client can be swapped for the in-memory fake in tests without touching
//! any handler code.

use taskdeck_core::{Result, Task, TaskId};

use crate::protocol::{CreateTaskRequest, TaskPatch};

/// Asynchronous CRUD contract with the external task tracker.
///
/// Every call is a single request/response exchange: no retries, no
/// timeouts, no cancellation at this layer. Failures surface as
/// [`taskdeck_core::Error`] values and are handled at the call site.
#[trait_variant::make(TaskService: Send)]
pub trait LocalTaskService {
    /// Fetch the canonical task collection.
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Create a new task from a draft.
    async fn create_task(&self, request: CreateTaskRequest) -> Result<Task>;

    /// Apply a partial update to an existing task.
    async fn update_task(&self, id: &TaskId, patch: TaskPatch) -> Result<Task>;

    /// Delete a task.
    async fn delete_task(&self, id: &TaskId) -> Result<()>;

    /// Set a task's completion flag.
    async fn toggle_task(&self, id: &TaskId, completed: bool) -> Result<Task>;
}
