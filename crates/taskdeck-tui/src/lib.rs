//! taskdeck-tui - Terminal UI for taskdeck
//!
//! This crate provides the ratatui-based terminal interface: terminal
//! lifecycle, event polling, layout, theme, widgets, and the run loop that
//! drives taskdeck-app's update function.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
