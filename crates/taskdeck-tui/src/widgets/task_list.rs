//! The scrolling card list, including the empty state

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};

use taskdeck_app::state::AppState;

use crate::theme::styles;

use super::TaskCard;

/// The visible, ordered task cards
pub struct TaskList<'a> {
    state: &'a AppState,
}

impl<'a> TaskList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

/// First card index to draw so the selected card fits in the viewport
fn scroll_offset(heights: &[u16], selected: usize, viewport: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);
    let mut start = 0;
    let mut used: u32 = heights[..=selected].iter().map(|h| u32::from(*h)).sum();
    while used > u32::from(viewport) && start < selected {
        used -= u32::from(heights[start]);
        start += 1;
    }
    start
}

impl Widget for TaskList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = self.state.visible();

        if visible.is_empty() {
            render_empty_state(self.state, area, buf);
            return;
        }

        let heights: Vec<u16> = visible
            .iter()
            .map(|task| TaskCard::height(self.state.item_state(&task.id)))
            .collect();
        let offset = scroll_offset(&heights, self.state.selected, area.height);

        let mut y = area.y;
        for (index, task) in visible.iter().copied().enumerate().skip(offset) {
            let height = heights[index];
            if y + height > area.y + area.height {
                break;
            }
            let card_area = Rect::new(area.x, y, area.width, height);
            TaskCard::new(
                task,
                self.state.item_state(&task.id),
                index == self.state.selected,
                self.state.is_loading(&task.id),
            )
            .render(card_area, buf);
            y += height;
        }
    }
}

fn render_empty_state(state: &AppState, area: Rect, buf: &mut Buffer) {
    if area.height < 3 {
        return;
    }
    let middle = Rect::new(area.x, area.y + area.height / 2 - 1, area.width, 2);

    Paragraph::new("No tasks found")
        .alignment(Alignment::Center)
        .style(styles::text_primary())
        .render(Rect::new(middle.x, middle.y, middle.width, 1), buf);

    // UX copy keyed by the active filter
    Paragraph::new(state.filter.empty_message())
        .alignment(Alignment::Center)
        .style(styles::text_muted())
        .render(Rect::new(middle.x, middle.y + 1, middle.width, 1), buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        // Five view cards of height 5 in a 12-row viewport: only two fit
        let heights = [5, 5, 5, 5, 5];
        assert_eq!(scroll_offset(&heights, 0, 12), 0);
        assert_eq!(scroll_offset(&heights, 1, 12), 0);
        assert_eq!(scroll_offset(&heights, 2, 12), 1);
        assert_eq!(scroll_offset(&heights, 4, 12), 3);
    }

    #[test]
    fn test_scroll_offset_with_mixed_heights() {
        // An open editor card makes its row taller
        let heights = [5, 6, 5];
        assert_eq!(scroll_offset(&heights, 1, 11), 0);
        assert_eq!(scroll_offset(&heights, 2, 11), 1);
    }

    #[test]
    fn test_scroll_offset_empty_list() {
        assert_eq!(scroll_offset(&[], 0, 10), 0);
    }

    #[test]
    fn test_scroll_offset_selection_taller_than_viewport() {
        // Degenerate viewport: land on the selected card itself
        let heights = [5, 5, 5];
        assert_eq!(scroll_offset(&heights, 2, 3), 2);
    }
}
