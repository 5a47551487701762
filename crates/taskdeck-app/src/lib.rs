//! taskdeck-app - Application state and orchestration for taskdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a [`Message`] enum, the [`handler::update`] function over
//! [`AppState`], and action dispatch that spawns the async service calls.
//! It stays independent of the terminal library; the TUI crate converts
//! crossterm events into [`InputKey`] at its boundary.

pub mod actions;
pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod item;
pub mod message;
pub mod process;
pub mod state;

// Re-export primary types
pub use actions::handle_action;
pub use config::Settings;
pub use form::{FormField, FormState, OpenForm, TaskDraft};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use item::{EditBuffer, EditField, ItemUiState};
pub use message::Message;
pub use process::process_message;
pub use state::{AppPhase, AppState};
