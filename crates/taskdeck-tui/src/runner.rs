//! Main run loop: terminal lifecycle, event polling, message processing

use tokio::sync::mpsc;

use taskdeck_app::{process_message, AppState, Message, Settings};
use taskdeck_client::TaskService;
use taskdeck_core::prelude::*;

use crate::{event, render, terminal};

/// Capacity of the completion-message channel
const MESSAGE_CHANNEL_SIZE: usize = 256;

/// Run the TUI against the given task service until the user quits.
pub async fn run<S>(settings: Settings, service: S) -> Result<()>
where
    S: TaskService + Clone + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    let result = run_loop(&mut term, settings, service).await;
    ratatui::restore();
    result
}

async fn run_loop<S>(
    term: &mut ratatui::DefaultTerminal,
    settings: Settings,
    service: S,
) -> Result<()>
where
    S: TaskService + Clone + Send + Sync + 'static,
{
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_SIZE);
    let mut state = AppState::new(settings);

    // Initial fetch of the canonical collection
    process_message(&mut state, Message::Refresh, &msg_tx, &service);

    loop {
        term.draw(|frame| render::view(frame, &state))?;

        if state.should_quit() {
            info!("Quit requested; leaving run loop");
            break;
        }

        // Terminal input (50ms poll; yields Tick on timeout)
        if let Some(message) = event::poll()? {
            process_message(&mut state, message, &msg_tx, &service);
        }

        // Drain completion messages from background service calls
        while let Ok(message) = msg_rx.try_recv() {
            process_message(&mut state, message, &msg_tx, &service);
        }
    }

    Ok(())
}
