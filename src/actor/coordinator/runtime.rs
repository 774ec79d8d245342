use anyhow::{Context, Result};
use tokio::sync::mpsc;

use super::Coordinator;
use crate::actor::messages::CoordinatorMsg;
use crate::config::ViewerConfig;
use crate::core::request_shutdown;
use crate::display::{TerminalDisplay, spawn_input_reader};
use crate::loader::Loader;

/// Wire up the coordinator with the terminal collaborators and run it.
///
/// Returns once the user quits, stdin closes or Ctrl+C is pressed.
pub async fn run_watch(config: &ViewerConfig) -> Result<()> {
    let coordinator = Coordinator::new(
        Loader::from_config(config),
        TerminalDisplay::new(&config.display),
    );

    setup_shutdown_handler(coordinator.sender())?;
    // Detached: a blocked stdin read cannot be interrupted
    let _input = spawn_input_reader(coordinator.sender());

    crate::log!("config"; "using {}", config.source());
    crate::log!("select"; "enter a file path to watch (:q to quit)");
    let handle = tokio::spawn(coordinator.run());
    handle.await.context("coordinator task failed")?;

    Ok(())
}

/// Ctrl+C requests shutdown through the coordinator inbox.
fn setup_shutdown_handler(tx: mpsc::UnboundedSender<CoordinatorMsg>) -> Result<()> {
    ctrlc::set_handler(move || {
        request_shutdown();
        let _ = tx.send(CoordinatorMsg::Shutdown);
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}
