//! # taskdeck-client - Remote Tracker Access
//!
//! The data-access collaborator: everything that talks to the remote
//! task-tracking service lives here. The rest of the application only sees
//! the [`TaskService`] trait and the wire DTOs.
//!
//! Depends on [`taskdeck_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Service Seam
//! - [`TaskService`] - Async CRUD contract the app orchestrates against
//!
//! ### HTTP Implementation
//! - [`HttpTaskClient`] - `TaskService` over the tracker's REST endpoints
//!
//! ### Wire Types
//! - [`CreateTaskRequest`] - Payload for task creation
//! - [`TaskPatch`] - Partial-update payload (absent fields untouched)

pub mod http;
pub mod protocol;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use http::HttpTaskClient;
pub use protocol::{CreateTaskRequest, TaskPatch};
pub use service::TaskService;
