//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `list`: list intents and service completions
//! - `item`: per-card state machine
//! - `form`: creation form
//! - `keys`: key-to-message routing

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{form, item, keys::handle_key, list, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // List View Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.select_next();
            UpdateResult::none()
        }
        Message::SelectPrev => {
            state.select_prev();
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.select_last();
            UpdateResult::none()
        }
        Message::CycleFilter => {
            state.filter = state.filter.next();
            state.select_first();
            UpdateResult::none()
        }
        Message::ToggleSort => {
            state.sort_key = state.sort_key.toggle();
            state.clamp_selection();
            UpdateResult::none()
        }
        Message::Refresh => list::handle_refresh(state),

        // ─────────────────────────────────────────────────────────
        // Item Intents
        // ─────────────────────────────────────────────────────────
        Message::ToggleCompletion { id, completed } => {
            list::handle_toggle_intent(state, id, completed)
        }
        Message::StartEdit => item::handle_start_edit(state),
        Message::EditInput { c } => item::handle_edit_input(state, c),
        Message::EditBackspace => item::handle_edit_backspace(state),
        Message::EditNextField => item::handle_edit_next_field(state),
        Message::EditPrevField => item::handle_edit_prev_field(state),
        Message::EditPriorityNext => item::handle_edit_priority_next(state),
        Message::EditPriorityPrev => item::handle_edit_priority_prev(state),
        Message::SaveEdit => item::handle_save_edit(state),
        Message::CancelEdit => item::handle_cancel_edit(state),
        Message::RequestDelete => item::handle_request_delete(state),
        Message::ConfirmDelete => item::handle_confirm_delete(state),
        Message::CancelDelete => item::handle_cancel_delete(state),

        // ─────────────────────────────────────────────────────────
        // Creation Form Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenForm => form::handle_open_form(state),
        Message::CancelForm => form::handle_cancel_form(state),
        Message::FormInput { c } => form::handle_form_input(state, c),
        Message::FormBackspace => form::handle_form_backspace(state),
        Message::FormNextField => form::handle_form_next_field(state),
        Message::FormPrevField => form::handle_form_prev_field(state),
        Message::FormPriorityNext => form::handle_form_priority_next(state),
        Message::FormPriorityPrev => form::handle_form_priority_prev(state),
        Message::SubmitForm => form::handle_submit_form(state),

        // ─────────────────────────────────────────────────────────
        // Service Completion Messages
        // ─────────────────────────────────────────────────────────
        Message::TasksLoaded { tasks } => list::handle_tasks_loaded(state, tasks),
        Message::TasksLoadFailed { error } => list::handle_tasks_load_failed(state, &error),

        Message::CreateCompleted { task: _ } => form::handle_create_completed(state),
        Message::CreateFailed { error } => form::handle_create_failed(state, &error),

        Message::UpdateCompleted { id } => list::handle_mutation_completed(state, &id),
        Message::UpdateFailed { id, error } => {
            list::handle_mutation_failed(state, &id, list::UPDATE_FAILED_MSG, &error)
        }
        Message::DeleteCompleted { id } => list::handle_mutation_completed(state, &id),
        Message::DeleteFailed { id, error } => {
            list::handle_mutation_failed(state, &id, list::DELETE_FAILED_MSG, &error)
        }
        Message::ToggleCompleted { id } => list::handle_mutation_completed(state, &id),
        Message::ToggleFailed { id, error } => {
            list::handle_mutation_failed(state, &id, list::TOGGLE_FAILED_MSG, &error)
        }
    }
}
