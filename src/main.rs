//! taskdeck - a terminal client for a task-tracking service
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use taskdeck_app::Settings;
use taskdeck_client::HttpTaskClient;

/// taskdeck - a terminal client for a task-tracking service
#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(about = "A terminal client for a task-tracking service", long_about = None)]
struct Args {
    /// Base URL of the task tracker (overrides config and TASKDECK_SERVER)
    #[arg(long, value_name = "URL")]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    taskdeck_core::logging::init()?;

    let args = Args::parse();
    let settings = Settings::load();
    let server_url = settings.resolve_server_url(args.server.as_deref());

    tracing::info!("Using task tracker at {server_url}");
    let client = HttpTaskClient::new(&server_url)?;

    taskdeck_tui::run(settings, client).await?;
    Ok(())
}
