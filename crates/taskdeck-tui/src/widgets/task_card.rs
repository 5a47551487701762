//! A single task card: view, edit, or delete-confirm rendering

use chrono::{DateTime, NaiveDate, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use taskdeck_app::item::{EditBuffer, EditField, ItemUiState};
use taskdeck_core::Task;

use crate::theme::{palette, styles};

/// Cursor marker appended to the focused text field
const CURSOR: &str = "▏";

/// Render-only date format, e.g. "Jan 2, 2026 14:05"
fn format_datetime(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %H:%M").to_string()
}

fn format_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// One task in the list, rendered according to its UI state
pub struct TaskCard<'a> {
    task: &'a Task,
    ui: &'a ItemUiState,
    selected: bool,
    loading: bool,
}

impl<'a> TaskCard<'a> {
    pub const VIEW_HEIGHT: u16 = 5;
    pub const EDIT_HEIGHT: u16 = 6;
    pub const CONFIRM_HEIGHT: u16 = 5;

    pub fn new(task: &'a Task, ui: &'a ItemUiState, selected: bool, loading: bool) -> Self {
        Self {
            task,
            ui,
            selected,
            loading,
        }
    }

    /// Height of a card in the given UI state, borders included
    pub fn height(ui: &ItemUiState) -> u16 {
        match ui {
            ItemUiState::Viewing => Self::VIEW_HEIGHT,
            ItemUiState::Editing(_) => Self::EDIT_HEIGHT,
            ItemUiState::ConfirmingDelete => Self::CONFIRM_HEIGHT,
        }
    }

    fn view_lines(&self) -> Vec<Line<'static>> {
        let task = self.task;

        let checkbox = if task.completed { "[x] " } else { "[ ] " };
        let title_style = if task.completed {
            styles::title_completed()
        } else {
            styles::title_active()
        };

        let mut head = vec![
            Span::styled(checkbox.to_string(), styles::text_secondary()),
            Span::styled(task.title.clone(), title_style),
            Span::raw("  "),
            // Unrecognized values keep their own label but take the medium color
            Span::styled(
                format!("●{}", task.priority_label()),
                styles::priority(task.priority_level()),
            ),
        ];
        if self.loading {
            head.push(Span::styled("  …", styles::warning()));
        }

        let description = Span::styled(
            format!(
                "    {}",
                task.description.clone().unwrap_or_default()
            ),
            styles::text_muted(),
        );

        let mut meta = vec![Span::styled(
            format!(
                "    Created: {} · Updated: {}",
                format_datetime(&task.created_at),
                format_datetime(&task.updated_at)
            ),
            styles::text_muted(),
        )];
        if let Some(due) = &task.due_date {
            meta.push(Span::styled(
                format!(" · Due: {}", format_date(due)),
                Style::default().fg(palette::DUE_DATE),
            ));
        }

        vec![Line::from(head), Line::from(description), Line::from(meta)]
    }

    fn edit_lines(&self, buffer: &EditBuffer) -> Vec<Line<'static>> {
        let field = |label: &str, value: &str, focused: bool| -> Line<'static> {
            let label_style = if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };
            let mut spans = vec![
                Span::styled(format!(" {label} "), label_style),
                Span::styled(value.to_string(), styles::text_primary()),
            ];
            if focused {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            Line::from(spans)
        };

        let priority_focused = buffer.focus == EditField::Priority;
        let priority_line = Line::from(vec![
            Span::styled(
                " Priority    ",
                if priority_focused {
                    styles::accent_bold()
                } else {
                    styles::text_secondary()
                },
            ),
            Span::styled(
                if priority_focused { "◀ " } else { "  " },
                styles::text_muted(),
            ),
            Span::styled(
                buffer.priority.label().to_string(),
                styles::priority(buffer.priority),
            ),
            Span::styled(
                if priority_focused { " ▶" } else { "  " },
                styles::text_muted(),
            ),
        ]);

        vec![
            field(
                "Title       ",
                &buffer.title,
                buffer.focus == EditField::Title,
            ),
            field(
                "Description ",
                &buffer.description,
                buffer.focus == EditField::Description,
            ),
            priority_line,
            Line::from(Span::styled(
                " Enter save · Esc cancel · Ctrl+T toggle done",
                styles::text_muted(),
            )),
        ]
    }

    fn confirm_lines(&self) -> Vec<Line<'static>> {
        // Long titles are clipped so the question stays on one line
        let mut title = self.task.title.clone();
        if title.width() > 40 {
            title = title.chars().take(37).collect::<String>() + "…";
        }
        vec![
            Line::from(Span::styled(" Delete Task?", styles::error())),
            Line::from(Span::styled(
                format!(" Are you sure you want to delete \"{title}\"? This action cannot be undone."),
                styles::text_secondary(),
            )),
            Line::from(vec![
                Span::styled(" [y] ", styles::error()),
                Span::styled("Delete   ", styles::text_secondary()),
                Span::styled("[n] ", styles::keybinding()),
                Span::styled("Cancel", styles::text_secondary()),
            ]),
        ]
    }
}

impl Widget for TaskCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.selected).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = match self.ui {
            ItemUiState::Viewing => self.view_lines(),
            ItemUiState::Editing(buffer) => self.edit_lines(buffer),
            ItemUiState::ConfirmingDelete => self.confirm_lines(),
        };

        for (row, line) in lines.iter().enumerate() {
            if row as u16 >= inner.height {
                break;
            }
            buf.set_line(inner.x, inner.y + row as u16, line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_client::test_utils::test_task_full;

    #[test]
    fn test_height_per_state() {
        let task = test_task_full("1", "a", "low", false);
        assert_eq!(TaskCard::height(&ItemUiState::Viewing), 5);
        assert_eq!(
            TaskCard::height(&ItemUiState::Editing(EditBuffer::seed(&task))),
            6
        );
        assert_eq!(TaskCard::height(&ItemUiState::ConfirmingDelete), 5);
    }

    #[test]
    fn test_view_shows_raw_label_for_unknown_priority() {
        let task = test_task_full("1", "a", "urgent", false);
        let ui = ItemUiState::Viewing;
        let card = TaskCard::new(&task, &ui, false, false);
        let lines = card.view_lines();
        let head: String = lines[0]
            .spans
            .iter()
            .map(|s| s.content.clone().into_owned())
            .collect();
        assert!(head.contains("●Urgent"));
    }

    #[test]
    fn test_loading_indicator_present_while_busy() {
        let task = test_task_full("1", "a", "low", false);
        let ui = ItemUiState::Viewing;
        let card = TaskCard::new(&task, &ui, false, true);
        let head: String = card.view_lines()[0]
            .spans
            .iter()
            .map(|s| s.content.clone().into_owned())
            .collect();
        assert!(head.contains('…'));
    }
}
