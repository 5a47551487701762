//! Semantic style builders for the taskdeck theme

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use taskdeck_core::Priority;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// Completed-task title: struck through and dimmed
pub fn title_completed() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn title_active() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn success() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn warning() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Badge style for a resolved priority level. The caller resolves
/// unrecognized raw values to medium before asking for a style, so the
/// fallback color mapping lives in one place ([`Priority::parse`] plus
/// `Task::priority_level`).
pub fn priority(level: Priority) -> Style {
    let color = match level {
        Priority::Low => palette::PRIORITY_LOW,
        Priority::Medium => palette::PRIORITY_MEDIUM,
        Priority::High => palette::PRIORITY_HIGH,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Rounded bordered block used for cards and panels
pub fn card_block(selected: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if selected {
            border_active()
        } else {
            border_inactive()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_color_mapping() {
        assert_eq!(priority(Priority::Low).fg, Some(palette::PRIORITY_LOW));
        assert_eq!(
            priority(Priority::Medium).fg,
            Some(palette::PRIORITY_MEDIUM)
        );
        assert_eq!(priority(Priority::High).fg, Some(palette::PRIORITY_HIGH));
    }
}
