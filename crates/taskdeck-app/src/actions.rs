//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each action becomes one spawned service call whose outcome comes back as
//! a completion [`Message`]. A card that has disappeared by the time its
//! response settles simply has its message handled against the current state
//! (the flag prune on refresh makes that a no-op).

use tokio::sync::mpsc;
use tracing::warn;

use taskdeck_client::TaskService;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: S)
where
    S: TaskService + Send + Sync + 'static,
{
    match action {
        UpdateAction::LoadTasks => {
            tokio::spawn(async move {
                let msg = match service.list_tasks().await {
                    Ok(tasks) => Message::TasksLoaded { tasks },
                    Err(e) => Message::TasksLoadFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::CreateTask { request } => {
            tokio::spawn(async move {
                let msg = match service.create_task(request).await {
                    Ok(task) => Message::CreateCompleted { task },
                    Err(e) => Message::CreateFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::UpdateTask { id, patch } => {
            tokio::spawn(async move {
                let msg = match service.update_task(&id, patch).await {
                    Ok(_) => Message::UpdateCompleted { id },
                    Err(e) => Message::UpdateFailed {
                        id,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::DeleteTask { id } => {
            tokio::spawn(async move {
                let msg = match service.delete_task(&id).await {
                    Ok(()) => Message::DeleteCompleted { id },
                    Err(e) => Message::DeleteFailed {
                        id,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::ToggleTask { id, completed } => {
            tokio::spawn(async move {
                let msg = match service.toggle_task(&id, completed).await {
                    Ok(_) => Message::ToggleCompleted { id },
                    Err(e) => Message::ToggleFailed {
                        id,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        warn!("Message channel closed; dropping completion message");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_client::test_utils::{test_task, FakeTaskService};
    use taskdeck_core::TaskId;

    #[tokio::test]
    async fn test_load_tasks_sends_loaded_message() {
        let service = FakeTaskService::with_tasks(vec![test_task("1", "Buy milk")]);
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(UpdateAction::LoadTasks, tx, service);

        match rx.recv().await {
            Some(Message::TasksLoaded { tasks }) => assert_eq!(tasks.len(), 1),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_create_sends_create_failed() {
        let service = FakeTaskService::new();
        service.fail_next("boom");
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::CreateTask {
                request: taskdeck_client::CreateTaskRequest {
                    title: "Buy milk".to_string(),
                    priority: taskdeck_core::Priority::Medium,
                    description: None,
                    due_date: None,
                },
            },
            tx,
            service,
        );

        match rx.recv().await {
            Some(Message::CreateFailed { error }) => assert!(error.contains("boom")),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_toggle_reports_id_on_both_outcomes() {
        let service = FakeTaskService::with_tasks(vec![test_task("1", "Buy milk")]);
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::ToggleTask {
                id: TaskId::from("1"),
                completed: true,
            },
            tx.clone(),
            service.clone(),
        );
        match rx.recv().await {
            Some(Message::ToggleCompleted { id }) => assert_eq!(id, TaskId::from("1")),
            other => panic!("unexpected message: {other:?}"),
        }

        service.fail_next("offline");
        handle_action(
            UpdateAction::ToggleTask {
                id: TaskId::from("1"),
                completed: false,
            },
            tx,
            service,
        );
        match rx.recv().await {
            Some(Message::ToggleFailed { id, .. }) => assert_eq!(id, TaskId::from("1")),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
