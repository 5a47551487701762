//! Collapsible creation form widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use taskdeck_app::form::{FormField, FormState, OpenForm};

use crate::theme::{palette, styles};

/// Cursor marker appended to the focused text field
const CURSOR: &str = "▏";

/// The creation form: a single invite row when collapsed, the full field set
/// when open
pub struct AddTaskForm<'a> {
    form: &'a FormState,
}

impl<'a> AddTaskForm<'a> {
    pub const COLLAPSED_HEIGHT: u16 = 3;
    pub const OPEN_HEIGHT: u16 = 9;

    pub fn new(form: &'a FormState) -> Self {
        Self { form }
    }

    /// Current widget height, borders included; drives the screen layout
    pub fn height(form: &FormState) -> u16 {
        if form.is_open() {
            Self::OPEN_HEIGHT
        } else {
            Self::COLLAPSED_HEIGHT
        }
    }

    fn open_lines(form: &OpenForm) -> Vec<Line<'static>> {
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

        let priority_focused = form.focus == FormField::Priority;
        let priority_line = Line::from(vec![
            Span::styled(
                " Priority *  ",
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
                form.draft.priority.label().to_string(),
                styles::priority(form.draft.priority),
            ),
            Span::styled(
                if priority_focused { " ▶" } else { "  " },
                styles::text_muted(),
            ),
        ]);

        // Field-level validation first, then the submit error
        let field_error = form
            .title_error
            .as_deref()
            .or(form.due_date_error.as_deref())
            .unwrap_or_default();
        let submit_error = form.error.as_deref().unwrap_or_default();

        let hint = if form.submitting {
            Line::from(Span::styled(" Adding…", styles::warning()))
        } else {
            Line::from(Span::styled(
                " Tab fields · Enter add task · Esc cancel",
                styles::text_muted(),
            ))
        };

        vec![
            field(
                "Title *     ",
                &form.draft.title,
                form.focus == FormField::Title,
            ),
            priority_line,
            field(
                "Due date    ",
                &form.draft.due_date,
                form.focus == FormField::DueDate,
            ),
            field(
                "Description ",
                &form.draft.description,
                form.focus == FormField::Description,
            ),
            Line::from(Span::styled(format!(" {field_error}"), styles::error())),
            Line::from(Span::styled(format!(" {submit_error}"), styles::error())),
            hint,
        ]
    }
}

impl Widget for AddTaskForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let open = self.form.as_open();
        let block = styles::card_block(open.is_some())
            .style(Style::default().bg(palette::CARD_BG));
        let block = match open {
            Some(_) => block.title(" New Task "),
            None => block,
        };
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match open {
            None => {
                let invite = Line::from(vec![
                    Span::styled(" + ", styles::accent_bold()),
                    Span::styled("Add New Task", styles::text_primary()),
                    Span::styled("  press a", styles::text_muted()),
                ]);
                buf.set_line(inner.x, inner.y, &invite, inner.width);
            }
            Some(form) => {
                for (row, line) in Self::open_lines(form).iter().enumerate() {
                    if row as u16 >= inner.height {
                        break;
                    }
                    buf.set_line(inner.x, inner.y + row as u16, line, inner.width);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_tracks_mode() {
        let mut form = FormState::Collapsed;
        assert_eq!(AddTaskForm::height(&form), AddTaskForm::COLLAPSED_HEIGHT);
        form.open();
        assert_eq!(AddTaskForm::height(&form), AddTaskForm::OPEN_HEIGHT);
    }

    #[test]
    fn test_open_lines_fit_widget_height() {
        let mut form = FormState::Collapsed;
        form.open();
        let lines = AddTaskForm::open_lines(form.as_open().unwrap());
        // Inner rows = height minus the two border rows
        assert_eq!(lines.len() as u16, AddTaskForm::OPEN_HEIGHT - 2);
    }
}
