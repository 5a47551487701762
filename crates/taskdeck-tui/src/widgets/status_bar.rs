//! Status bar widget
//!
//! Two rows: the list-level error (or the showing-count line) and
//! mode-sensitive key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use taskdeck_app::item::ItemUiState;
use taskdeck_app::state::AppState;

use crate::theme::styles;

/// Status bar showing errors, counts, and keybindings
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn info_line(&self) -> Line<'static> {
        if let Some(error) = &self.state.last_error {
            return Line::from(Span::styled(format!(" ✗ {error}"), styles::error()));
        }
        let (total, _, _) = self.state.stats();
        let shown = self.state.visible().len();
        let plural = if shown == 1 { "" } else { "s" };
        Line::from(Span::styled(
            format!(" Showing {shown} of {total} task{plural}"),
            styles::text_muted(),
        ))
    }

    fn hint_line(&self) -> Line<'static> {
        let hints = if self.state.form.is_open() {
            "Tab fields · ←/→ priority · Enter submit · Esc cancel"
        } else {
            match self.state.selected_item_state() {
                ItemUiState::Editing(_) => {
                    "Tab fields · ←/→ priority · Ctrl+T done · Enter save · Esc cancel"
                }
                ItemUiState::ConfirmingDelete => "y confirm delete · n cancel",
                ItemUiState::Viewing => {
                    "j/k move · Space done · e edit · d delete · a add · f filter · s sort · r refresh · q quit"
                }
            }
        };
        Line::from(Span::styled(format!(" {hints}"), styles::keybinding()))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_line(area.x, area.y, &self.info_line(), area.width);
        if area.height >= 2 {
            buf.set_line(area.x, area.y + 1, &self.hint_line(), area.width);
        }
    }
}
