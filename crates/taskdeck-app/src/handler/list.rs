//! List-level handlers: mutation intents and service completion messages
//!
//! Every mutation intent follows the same discipline: mark the task busy,
//! clear the list-level error, hand the work to the event loop. Every
//! completion clears the busy flag regardless of outcome; success triggers a
//! canonical refresh, failure surfaces a fixed message and logs the cause.

use tracing::error;

use taskdeck_client::TaskPatch;
use taskdeck_core::{Task, TaskId};

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{UpdateAction, UpdateResult};

/// Fixed message shown when a completion toggle fails
pub const TOGGLE_FAILED_MSG: &str = "Failed to update task status. Please try again.";
/// Fixed message shown when an update fails
pub const UPDATE_FAILED_MSG: &str = "Failed to update task. Please try again.";
/// Fixed message shown when a delete fails
pub const DELETE_FAILED_MSG: &str = "Failed to delete task. Please try again.";
/// Fixed message shown when the list fetch fails
pub const LOAD_FAILED_MSG: &str = "Failed to load tasks. Please try again.";

pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    state.refreshing = true;
    UpdateResult::action(UpdateAction::LoadTasks)
}

pub fn handle_tasks_loaded(state: &mut AppState, tasks: Vec<Task>) -> UpdateResult {
    state.refreshing = false;
    if state.phase == AppPhase::Initializing {
        state.phase = AppPhase::Running;
    }

    // Prune ephemeral per-task state for ids the canonical collection no
    // longer contains (deleted tasks, external removals).
    let ids: std::collections::HashSet<&TaskId> = tasks.iter().map(|t| &t.id).collect();
    state.item_ui.retain(|id, _| ids.contains(id));
    state.loading.retain(|id| ids.contains(id));

    state.tasks = Some(tasks);
    state.clamp_selection();
    UpdateResult::none()
}

pub fn handle_tasks_load_failed(state: &mut AppState, cause: &str) -> UpdateResult {
    error!("Error loading tasks: {cause}");
    state.refreshing = false;
    if state.phase == AppPhase::Initializing {
        state.phase = AppPhase::Running;
    }
    // Previous snapshot stays rendered
    state.last_error = Some(LOAD_FAILED_MSG.to_string());
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Mutation Intents
// ─────────────────────────────────────────────────────────

pub fn handle_toggle_intent(state: &mut AppState, id: TaskId, completed: bool) -> UpdateResult {
    if state.is_loading(&id) {
        return UpdateResult::none();
    }
    state.loading.insert(id.clone());
    state.last_error = None;
    UpdateResult::action(UpdateAction::ToggleTask { id, completed })
}

pub fn handle_update_intent(state: &mut AppState, id: TaskId, patch: TaskPatch) -> UpdateResult {
    if state.is_loading(&id) {
        return UpdateResult::none();
    }
    state.loading.insert(id.clone());
    state.last_error = None;
    UpdateResult::action(UpdateAction::UpdateTask { id, patch })
}

pub fn handle_delete_intent(state: &mut AppState, id: TaskId) -> UpdateResult {
    if state.is_loading(&id) {
        return UpdateResult::none();
    }
    state.loading.insert(id.clone());
    state.last_error = None;
    UpdateResult::action(UpdateAction::DeleteTask { id })
}

// ─────────────────────────────────────────────────────────
// Mutation Completions
// ─────────────────────────────────────────────────────────

/// Any mutation success: clear the busy flag, then re-fetch the canonical
/// collection
pub fn handle_mutation_completed(state: &mut AppState, id: &TaskId) -> UpdateResult {
    state.loading.remove(id);
    UpdateResult::message(Message::Refresh)
}

/// Any mutation failure: clear the busy flag, log the cause, show the fixed
/// per-operation message. The rendered list is left as it was.
pub fn handle_mutation_failed(
    state: &mut AppState,
    id: &TaskId,
    message: &str,
    cause: &str,
) -> UpdateResult {
    error!("Error mutating task {id}: {cause}");
    state.loading.remove(id);
    state.last_error = Some(message.to_string());
    UpdateResult::none()
}
