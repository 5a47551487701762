//! Test utilities for service-driven tests
//!
//! Provides a scriptable in-memory [`TaskService`] and task constructors so
//! orchestration tests can run without a server.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};

use taskdeck_core::{Error, Result, Task, TaskId};

use crate::protocol::{CreateTaskRequest, TaskPatch};
use crate::service::TaskService;

/// Creates a test task with basic defaults (active, low priority).
pub fn test_task(id: &str, title: &str) -> Task {
    test_task_full(id, title, "low", false)
}

/// Creates a test task with full control over priority and completion.
pub fn test_task_full(id: &str, title: &str, priority: &str, completed: bool) -> Task {
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
    Task {
        id: TaskId::from(id),
        title: title.to_string(),
        description: None,
        priority: priority.to_string(),
        completed,
        created_at: at,
        updated_at: at,
        due_date: None,
    }
}

#[derive(Debug, Default)]
struct FakeInner {
    tasks: Vec<Task>,
    queued_failures: VecDeque<String>,
    calls: Vec<String>,
    next_id: u64,
}

/// Scriptable in-memory `TaskService`.
///
/// Calls succeed against the in-memory collection unless a failure has been
/// queued with [`FakeTaskService::fail_next`], in which case the next call
/// consumes it and returns an API error.
#[derive(Debug, Clone, Default)]
pub struct FakeTaskService {
    inner: Arc<Mutex<FakeInner>>,
}

impl FakeTaskService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the canonical collection.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let service = Self::new();
        service.inner.lock().unwrap().tasks = tasks;
        service
    }

    /// Queue a failure; the next service call consumes it.
    pub fn fail_next(&self, message: impl Into<String>) {
        self.inner
            .lock()
            .unwrap()
            .queued_failures
            .push_back(message.into());
    }

    /// Names of the service methods invoked so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Snapshot of the in-memory collection.
    pub fn tasks(&self) -> Vec<Task> {
        self.inner.lock().unwrap().tasks.clone()
    }

    fn record(&self, call: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call.to_string());
        match inner.queued_failures.pop_front() {
            Some(message) => Err(Error::api(message)),
            None => Ok(()),
        }
    }
}

impl TaskService for FakeTaskService {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.record("list")?;
        Ok(self.tasks())
    }

    async fn create_task(&self, request: CreateTaskRequest) -> Result<Task> {
        self.record("create")?;
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let mut task = test_task(&format!("fake-{}", inner.next_id), &request.title);
        task.priority = request.priority.as_str().to_string();
        task.description = request.description;
        task.due_date = request.due_date;
        inner.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: &TaskId, patch: TaskPatch) -> Result<Task> {
        self.record("update")?;
        let mut inner = self.inner.lock().unwrap();
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| Error::api_status(404, "no such task"))?;
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = Some(description);
        }
        if let Some(priority) = patch.priority {
            task.priority = priority.as_str().to_string();
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &TaskId) -> Result<()> {
        self.record("delete")?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.tasks.len();
        inner.tasks.retain(|t| &t.id != id);
        if inner.tasks.len() == before {
            return Err(Error::api_status(404, "no such task"));
        }
        Ok(())
    }

    async fn toggle_task(&self, id: &TaskId, completed: bool) -> Result<Task> {
        self.record("toggle")?;
        let mut inner = self.inner.lock().unwrap();
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| Error::api_status(404, "no such task"))?;
        task.completed = completed;
        Ok(task.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_round_trip() {
        tokio_test::block_on(async {
            let service = FakeTaskService::with_tasks(vec![test_task("1", "Buy milk")]);

            let tasks = service.list_tasks().await.unwrap();
            assert_eq!(tasks.len(), 1);

            service
                .toggle_task(&TaskId::from("1"), true)
                .await
                .unwrap();
            assert!(service.tasks()[0].completed);

            service.delete_task(&TaskId::from("1")).await.unwrap();
            assert!(service.tasks().is_empty());

            assert_eq!(service.calls(), vec!["list", "toggle", "delete"]);
        });
    }

    #[test]
    fn test_queued_failure_is_consumed_once() {
        tokio_test::block_on(async {
            let service = FakeTaskService::with_tasks(vec![test_task("1", "Buy milk")]);
            service.fail_next("connection reset");

            let err = service.list_tasks().await.unwrap_err();
            assert!(err.to_string().contains("connection reset"));

            // Next call succeeds again
            assert!(service.list_tasks().await.is_ok());
        });
    }
}
