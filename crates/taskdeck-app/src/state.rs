//! Application state (Model in TEA pattern)

use std::collections::{HashMap, HashSet};

use taskdeck_core::{visible_tasks, SortKey, Task, TaskFilter, TaskId};

use crate::config::Settings;
use crate::form::FormState;
use crate::item::ItemUiState;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// First fetch of the canonical collection has not completed yet
    #[default]
    Initializing,
    /// Normal interactive operation
    Running,
    /// Shutting down
    Quitting,
}

/// Complete application state.
///
/// The canonical task collection is owned by the server; `tasks` is only the
/// latest read-only snapshot (`None` until the first fetch settles). All
/// other fields are ephemeral view state.
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,

    /// Latest canonical snapshot; `None` = nothing fetched yet
    pub tasks: Option<Vec<Task>>,

    /// Which subset of tasks is shown
    pub filter: TaskFilter,
    /// Ordering of the visible subset
    pub sort_key: SortKey,
    /// Per-task busy flags; membership means a mutation is in flight
    pub loading: HashSet<TaskId>,
    /// List-level error message (toggle/update/delete/load failures)
    pub last_error: Option<String>,
    /// A list fetch is in flight
    pub refreshing: bool,

    /// Selection cursor into the visible list
    pub selected: usize,
    /// Per-task UI state; absent entry means `Viewing`
    pub item_ui: HashMap<TaskId, ItemUiState>,
    /// Creation form
    pub form: FormState,
}

const VIEWING: ItemUiState = ItemUiState::Viewing;

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            phase: AppPhase::default(),
            settings,
            tasks: None,
            filter: TaskFilter::default(),
            sort_key: SortKey::default(),
            loading: HashSet::new(),
            last_error: None,
            refreshing: false,
            selected: 0,
            item_ui: HashMap::new(),
            form: FormState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// The derived, ordered subset of tasks to render
    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(self.tasks.as_deref(), self.filter, self.sort_key)
    }

    /// The task under the selection cursor, if any
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible().get(self.selected).copied()
    }

    pub fn is_loading(&self, id: &TaskId) -> bool {
        self.loading.contains(id)
    }

    /// UI state of a task card; tasks without an entry are `Viewing`
    pub fn item_state(&self, id: &TaskId) -> &ItemUiState {
        self.item_ui.get(id).unwrap_or(&VIEWING)
    }

    /// UI state of the selected card
    pub fn selected_item_state(&self) -> &ItemUiState {
        match self.selected_task() {
            Some(task) => self.item_state(&task.id),
            None => &VIEWING,
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible().len().saturating_sub(1);
    }

    /// Keep the cursor inside the visible list after the list shrinks
    pub fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Stats over the canonical (unfiltered) collection: (total, completed, pending)
    pub fn stats(&self) -> (usize, usize, usize) {
        let tasks = self.tasks.as_deref().unwrap_or_default();
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        (total, completed, total - completed)
    }
}
