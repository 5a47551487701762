//! Color palette for the taskdeck theme

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused/selected borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Primary text
pub const TEXT_SECONDARY: Color = Color::Gray; // Secondary text
pub const TEXT_MUTED: Color = Color::DarkGray; // Muted text (timestamps, hints)

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Success/completed
pub const STATUS_RED: Color = Color::Red; // Errors/destructive
pub const STATUS_YELLOW: Color = Color::Yellow; // Warnings/pending

// --- Priority badges (low -> green, medium -> yellow, high -> red) ---
pub const PRIORITY_LOW: Color = Color::Green;
pub const PRIORITY_MEDIUM: Color = Color::Yellow;
pub const PRIORITY_HIGH: Color = Color::Red;

// --- Due date ---
pub const DUE_DATE: Color = Color::LightRed;
