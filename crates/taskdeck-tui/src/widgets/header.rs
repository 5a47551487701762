//! Header bar widget
//!
//! Shows the app title, stat tiles over the canonical collection, and the
//! active filter/sort selection.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use taskdeck_app::state::AppState;

use crate::theme::{palette, styles};

/// Main header showing app title, counts, and view controls
pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn title_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("  Taskdeck ", styles::accent_bold()),
            Span::styled("· task tracker", styles::text_muted()),
        ];
        if self.state.refreshing {
            spans.push(Span::styled("  refreshing…", styles::warning()));
        }
        Line::from(spans)
    }

    fn stats_line(&self) -> Line<'static> {
        let (total, completed, pending) = self.state.stats();
        Line::from(vec![
            Span::styled("  Total ", styles::text_secondary()),
            Span::styled(
                total.to_string(),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Done ", styles::text_secondary()),
            Span::styled(
                completed.to_string(),
                Style::default()
                    .fg(palette::STATUS_GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Pending ", styles::text_secondary()),
            Span::styled(
                pending.to_string(),
                Style::default()
                    .fg(palette::STATUS_YELLOW)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   │ ", styles::text_muted()),
            Span::styled(self.state.filter.label(), styles::accent()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(self.state.sort_key.label(), styles::accent()),
        ])
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        buf.set_line(inner.x, inner.y, &self.title_line(), inner.width);
        if inner.height >= 2 {
            buf.set_line(inner.x, inner.y + 1, &self.stats_line(), inner.width);
        }
    }
}
