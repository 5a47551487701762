//! Message processing loop glue
//!
//! Drives a message (and any follow-ups it produces) through the TEA update
//! function, dispatching resulting actions to the spawner. Follow-up
//! messages are processed synchronously so intermediate states are never
//! rendered.

use tokio::sync::mpsc;

use taskdeck_client::TaskService;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &S,
) where
    S: TaskService + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), service.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
