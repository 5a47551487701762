//! Creation form handlers

use tracing::error;

use crate::form::{FormField, FormState, CREATE_FAILED_MSG};
use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_open_form(state: &mut AppState) -> UpdateResult {
    if !state.form.is_open() {
        state.form.open();
    }
    UpdateResult::none()
}

pub fn handle_cancel_form(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.form.as_open() {
        // Cancel is disabled while the create request is in flight
        if form.submitting {
            return UpdateResult::none();
        }
        state.form.collapse();
    }
    UpdateResult::none()
}

pub fn handle_submit_form(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.form.as_open_mut() else {
        return UpdateResult::none();
    };
    if form.submitting {
        return UpdateResult::none();
    }
    match form.validate() {
        Some(request) => {
            form.submitting = true;
            form.error = None;
            UpdateResult::action(UpdateAction::CreateTask { request })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_create_completed(state: &mut AppState) -> UpdateResult {
    // Draft resets to defaults and the form collapses; the new task shows up
    // with the refreshed canonical collection.
    state.form = FormState::Collapsed;
    UpdateResult::message(Message::Refresh)
}

pub fn handle_create_failed(state: &mut AppState, cause: &str) -> UpdateResult {
    error!("Error creating task: {cause}");
    if let Some(form) = state.form.as_open_mut() {
        // Entered values are retained so the user can retry
        form.submitting = false;
        form.error = Some(CREATE_FAILED_MSG.to_string());
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Draft Input
// ─────────────────────────────────────────────────────────

pub fn handle_form_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(form) = state.form.as_open_mut() {
        match form.focus {
            FormField::Title => form.draft.title.push(c),
            FormField::DueDate => form.draft.due_date.push(c),
            FormField::Description => form.draft.description.push(c),
            FormField::Priority => {}
        }
    }
    UpdateResult::none()
}

pub fn handle_form_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.form.as_open_mut() {
        match form.focus {
            FormField::Title => {
                form.draft.title.pop();
            }
            FormField::DueDate => {
                form.draft.due_date.pop();
            }
            FormField::Description => {
                form.draft.description.pop();
            }
            FormField::Priority => {}
        }
    }
    UpdateResult::none()
}

pub fn handle_form_next_field(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.form.as_open_mut() {
        form.focus = form.focus.next();
    }
    UpdateResult::none()
}

pub fn handle_form_prev_field(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.form.as_open_mut() {
        form.focus = form.focus.prev();
    }
    UpdateResult::none()
}

pub fn handle_form_priority_next(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.form.as_open_mut() {
        form.draft.priority = form.draft.priority.next();
    }
    UpdateResult::none()
}

pub fn handle_form_priority_prev(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.form.as_open_mut() {
        form.draft.priority = form.draft.priority.prev();
    }
    UpdateResult::none()
}
