//! # taskdeck-core - Core Domain Types
//!
//! Foundation crate for taskdeck. Provides the task domain types, error
//! handling, list derivation, and logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Task`] - A task as served by the remote tracker
//! - [`TaskId`] - Opaque, stable task identifier
//! - [`Priority`] - Task priority (Low, Medium, High)
//! - [`TaskFilter`], [`SortKey`] - List view selection
//!
//! ### List Derivation (`list`)
//! - [`visible_tasks()`] - Pure filter + sort over a (possibly absent) snapshot
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use taskdeck_core::prelude::*;
//! ```

pub mod error;
pub mod list;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all taskdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use list::visible_tasks;
pub use types::{Priority, SortKey, Task, TaskFilter, TaskId, TITLE_MAX_LEN};
