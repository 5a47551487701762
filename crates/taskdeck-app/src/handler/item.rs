//! Per-card state machine handlers
//!
//! Transitions operate on the selected card. The state map is keyed by task
//! id, so a card that is not selected keeps whatever buffer it had -- moving
//! the cursor never discards an edit in progress.

use taskdeck_core::TaskId;

use crate::item::{EditBuffer, EditField, ItemUiState};
use crate::state::AppState;

use super::{list, UpdateResult};

/// Id of the selected task, when mutating it is currently allowed
fn selected_actionable(state: &AppState) -> Option<TaskId> {
    let task = state.selected_task()?;
    if state.is_loading(&task.id) {
        return None;
    }
    Some(task.id.clone())
}

pub fn handle_start_edit(state: &mut AppState) -> UpdateResult {
    let Some(task) = state.selected_task() else {
        return UpdateResult::none();
    };
    if state.is_loading(&task.id) {
        return UpdateResult::none();
    }
    let id = task.id.clone();
    let buffer = EditBuffer::seed(task);
    state.item_ui.insert(id, ItemUiState::Editing(buffer));
    UpdateResult::none()
}

pub fn handle_save_edit(state: &mut AppState) -> UpdateResult {
    let Some(task) = state.selected_task() else {
        return UpdateResult::none();
    };
    let id = task.id.clone();
    if !state.item_state(&id).is_editing() {
        return UpdateResult::none();
    }

    // Leave edit mode immediately; the buffer becomes the update payload.
    let Some(ItemUiState::Editing(buffer)) = state.item_ui.remove(&id) else {
        return UpdateResult::none();
    };
    list::handle_update_intent(state, id, buffer.to_patch())
}

pub fn handle_cancel_edit(state: &mut AppState) -> UpdateResult {
    if let Some(task) = state.selected_task() {
        let id = task.id.clone();
        state.item_ui.remove(&id);
    }
    UpdateResult::none()
}

pub fn handle_request_delete(state: &mut AppState) -> UpdateResult {
    if let Some(id) = selected_actionable(state) {
        state.item_ui.insert(id, ItemUiState::ConfirmingDelete);
    }
    UpdateResult::none()
}

pub fn handle_confirm_delete(state: &mut AppState) -> UpdateResult {
    // The card stays in its confirm state; it disappears once the canonical
    // collection no longer contains the id. A failed delete clears the busy
    // flag so the card can be retried or cancelled.
    match selected_actionable(state) {
        Some(id) => list::handle_delete_intent(state, id),
        None => UpdateResult::none(),
    }
}

pub fn handle_cancel_delete(state: &mut AppState) -> UpdateResult {
    if let Some(task) = state.selected_task() {
        let id = task.id.clone();
        state.item_ui.remove(&id);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Edit Buffer Input
// ─────────────────────────────────────────────────────────

/// Mutable access to the selected card's edit buffer, if it is editing
fn selected_buffer(state: &mut AppState) -> Option<&mut EditBuffer> {
    let id = state.selected_task()?.id.clone();
    match state.item_ui.get_mut(&id) {
        Some(ItemUiState::Editing(buffer)) => Some(buffer),
        _ => None,
    }
}

pub fn handle_edit_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(buffer) = selected_buffer(state) {
        match buffer.focus {
            EditField::Title => buffer.title.push(c),
            EditField::Description => buffer.description.push(c),
            EditField::Priority => {}
        }
    }
    UpdateResult::none()
}

pub fn handle_edit_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(buffer) = selected_buffer(state) {
        match buffer.focus {
            EditField::Title => {
                buffer.title.pop();
            }
            EditField::Description => {
                buffer.description.pop();
            }
            EditField::Priority => {}
        }
    }
    UpdateResult::none()
}

pub fn handle_edit_next_field(state: &mut AppState) -> UpdateResult {
    if let Some(buffer) = selected_buffer(state) {
        buffer.focus = buffer.focus.next();
    }
    UpdateResult::none()
}

pub fn handle_edit_prev_field(state: &mut AppState) -> UpdateResult {
    if let Some(buffer) = selected_buffer(state) {
        buffer.focus = buffer.focus.prev();
    }
    UpdateResult::none()
}

pub fn handle_edit_priority_next(state: &mut AppState) -> UpdateResult {
    if let Some(buffer) = selected_buffer(state) {
        buffer.priority = buffer.priority.next();
    }
    UpdateResult::none()
}

pub fn handle_edit_priority_prev(state: &mut AppState) -> UpdateResult {
    if let Some(buffer) = selected_buffer(state) {
        buffer.priority = buffer.priority.prev();
    }
    UpdateResult::none()
}
