//! Creation form state machine
//!
//! The form has two modes: collapsed (a single "add task" row) and open (the
//! full field set). The draft lives only while the form is open; a successful
//! submit or a cancel resets it to defaults.

use chrono::NaiveDate;

use taskdeck_client::CreateTaskRequest;
use taskdeck_core::{Priority, TITLE_MAX_LEN};

/// Fixed message shown when the create request fails
pub const CREATE_FAILED_MSG: &str = "Failed to create task. Please try again.";

const TITLE_REQUIRED_MSG: &str = "Title is required";
const TITLE_TOO_LONG_MSG: &str = "Title must be less than 200 characters";
const DUE_DATE_FORMAT_MSG: &str = "Due date must be YYYY-MM-DD";

/// Unsaved field values for a task that does not exist yet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Raw text buffer; parsed as `YYYY-MM-DD` on submit
    pub due_date: String,
}

/// Focusable fields of the open form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Priority,
    DueDate,
    Description,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Priority,
            Self::Priority => Self::DueDate,
            Self::DueDate => Self::Description,
            Self::Description => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Priority => Self::Title,
            Self::DueDate => Self::Priority,
            Self::Description => Self::DueDate,
        }
    }
}

/// The creation form while open
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpenForm {
    pub draft: TaskDraft,
    pub focus: FormField,
    /// Field-level validation message for the title
    pub title_error: Option<String>,
    /// Field-level validation message for the due date buffer
    pub due_date_error: Option<String>,
    /// Submit-level (server) error message
    pub error: Option<String>,
    /// A create request is in flight
    pub submitting: bool,
}

impl OpenForm {
    /// Validate the draft. On success returns the create request; on failure
    /// records the field errors and returns `None`.
    ///
    /// Title must be 1..=200 characters. A non-empty due-date buffer must
    /// parse as `YYYY-MM-DD`; description and an empty due date are
    /// unconstrained.
    pub fn validate(&mut self) -> Option<CreateTaskRequest> {
        self.title_error = None;
        self.due_date_error = None;

        if self.draft.title.is_empty() {
            self.title_error = Some(TITLE_REQUIRED_MSG.to_string());
        } else if self.draft.title.chars().count() > TITLE_MAX_LEN {
            self.title_error = Some(TITLE_TOO_LONG_MSG.to_string());
        }

        let due_date = if self.draft.due_date.is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(&self.draft.due_date, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    self.due_date_error = Some(DUE_DATE_FORMAT_MSG.to_string());
                    None
                }
            }
        };

        if self.title_error.is_some() || self.due_date_error.is_some() {
            return None;
        }

        Some(CreateTaskRequest {
            title: self.draft.title.clone(),
            priority: self.draft.priority,
            description: if self.draft.description.is_empty() {
                None
            } else {
                Some(self.draft.description.clone())
            },
            due_date,
        })
    }
}

/// Two-mode creation form component
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Collapsed,
    Open(OpenForm),
}

impl FormState {
    pub fn is_open(&self) -> bool {
        matches!(self, FormState::Open(_))
    }

    /// Open the form with a fresh draft. Clears any previous error.
    pub fn open(&mut self) {
        *self = FormState::Open(OpenForm::default());
    }

    /// Discard the draft and collapse.
    pub fn collapse(&mut self) {
        *self = FormState::Collapsed;
    }

    pub fn as_open_mut(&mut self) -> Option<&mut OpenForm> {
        match self {
            FormState::Open(form) => Some(form),
            FormState::Collapsed => None,
        }
    }

    pub fn as_open(&self) -> Option<&OpenForm> {
        match self {
            FormState::Open(form) => Some(form),
            FormState::Collapsed => None,
        }
    }
}
