//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use taskdeck_app::state::AppState;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function over the current state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let form_height = widgets::AddTaskForm::height(&state.form);
    let areas = layout::create(area, form_height);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);
    frame.render_widget(widgets::AddTaskForm::new(&state.form), areas.form);
    frame.render_widget(widgets::TaskList::new(state), areas.list);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
