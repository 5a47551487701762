//! Screen layout definitions for the TUI
//!
//! The creation form row grows when the form opens, so the layout takes its
//! current height as an input.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (title + stat tiles + view controls)
    pub header: Rect,

    /// Creation form (collapsed row or open field set)
    pub form: Rect,

    /// Task card list
    pub list: Rect,

    /// Status bar (error line + key hints)
    pub status: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `form_height` - Current height of the creation form widget
pub fn create(area: Rect, form_height: u16) -> ScreenAreas {
    let constraints = vec![
        Constraint::Length(4),           // Header (borders + title row + stats row)
        Constraint::Length(form_height), // Creation form
        Constraint::Min(3),              // Task list
        Constraint::Length(2),           // Status bar
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        form: chunks[1],
        list: chunks[2],
        status: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_collapsed_form() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, 3);

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.form.height, 3);
        assert_eq!(layout.status.height, 2);
        // List gets the remainder
        assert_eq!(layout.list.height, 24 - 4 - 3 - 2);
    }

    #[test]
    fn test_layout_with_open_form() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = create(area, 10);

        assert_eq!(layout.form.height, 10);
        assert_eq!(layout.list.height, 30 - 4 - 10 - 2);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, 3);

        assert_eq!(layout.form.y, layout.header.height);
        assert_eq!(layout.list.y, layout.form.y + layout.form.height);
        assert_eq!(layout.status.y, layout.list.y + layout.list.height);
    }
}
