//! Key event handlers, routed by the focused component's mode
//!
//! The open creation form captures the keyboard first; otherwise keys are
//! routed by the selected card's state (viewing / editing / confirming
//! delete). Ctrl+C quits from anywhere.

use crate::input_key::InputKey;
use crate::item::{EditField, ItemUiState};
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on the current mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from any mode
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.form.is_open() {
        return handle_key_form(state, key);
    }

    match state.selected_item_state() {
        ItemUiState::Editing(buffer) => handle_key_edit(state, key, buffer.focus),
        ItemUiState::ConfirmingDelete => handle_key_confirm_delete(key),
        ItemUiState::Viewing => handle_key_list(state, key),
    }
}

/// Keys while browsing the list (selected card in view mode)
fn handle_key_list(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // Navigation
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrev),
        InputKey::Char('g') | InputKey::Home => Some(Message::SelectFirst),
        InputKey::Char('G') | InputKey::End => Some(Message::SelectLast),

        // View controls
        InputKey::Char('f') => Some(Message::CycleFilter),
        InputKey::Char('s') => Some(Message::ToggleSort),
        InputKey::Char('r') => Some(Message::Refresh),

        // Creation form
        InputKey::Char('a') | InputKey::Char('n') => Some(Message::OpenForm),

        // Card actions: the controls are disabled while the card is busy
        InputKey::Char(' ') => toggle_selected(state),
        InputKey::Char('e') | InputKey::Enter => {
            actionable_selected(state).map(|_| Message::StartEdit)
        }
        InputKey::Char('d') | InputKey::Delete => {
            actionable_selected(state).map(|_| Message::RequestDelete)
        }

        _ => None,
    }
}

/// Keys while the selected card is in edit mode
fn handle_key_edit(state: &AppState, key: InputKey, focus: EditField) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelEdit),
        InputKey::Enter => Some(Message::SaveEdit),

        InputKey::Tab | InputKey::Down => Some(Message::EditNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::EditPrevField),

        // The switch control stays reachable while editing
        InputKey::CharCtrl('t') => toggle_selected(state),

        InputKey::Left if focus == EditField::Priority => Some(Message::EditPriorityPrev),
        InputKey::Right if focus == EditField::Priority => Some(Message::EditPriorityNext),

        InputKey::Backspace => Some(Message::EditBackspace),
        InputKey::Char(c) => Some(Message::EditInput { c }),

        _ => None,
    }
}

/// Keys while the selected card asks for delete confirmation
fn handle_key_confirm_delete(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmDelete),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDelete),
        _ => None,
    }
}

/// Keys while the creation form is open
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.form.as_open().map(|form| form.focus)?;

    match key {
        InputKey::Esc => Some(Message::CancelForm),
        InputKey::Enter => Some(Message::SubmitForm),

        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPrevField),

        InputKey::Left if focus == crate::form::FormField::Priority => {
            Some(Message::FormPriorityPrev)
        }
        InputKey::Right if focus == crate::form::FormField::Priority => {
            Some(Message::FormPriorityNext)
        }

        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Char(c) => Some(Message::FormInput { c }),

        _ => None,
    }
}

/// Completion toggle for the selected card, unless it is busy
fn toggle_selected(state: &AppState) -> Option<Message> {
    let task = actionable_selected(state)?;
    Some(Message::ToggleCompletion {
        id: task.id.clone(),
        completed: !task.completed,
    })
}

/// The selected task, when mutating it is currently allowed
fn actionable_selected(state: &AppState) -> Option<&taskdeck_core::Task> {
    let task = state.selected_task()?;
    if state.is_loading(&task.id) {
        return None;
    }
    Some(task)
}
