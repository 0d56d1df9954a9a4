//! Backend main event loop.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tokio::runtime::Runtime;
use tracing::{debug, info};

use super::handlers::{self, Flow};
use crate::api::ChannelsClient;
use crate::protocol::{BackendAction, GuiEvent};

/// Run the backend event loop on a tokio runtime.
///
/// Returns when a `Shutdown` action arrives or the UI drops its sender.
pub fn run_backend(action_rx: Receiver<BackendAction>, event_tx: Sender<GuiEvent>) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(GuiEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let mut client: Option<ChannelsClient> = None;

        loop {
            match action_rx.try_recv() {
                Ok(action) => {
                    if handlers::handle_backend_action(action, &mut client, &event_tx) == Flow::Stop {
                        info!("backend shutting down");
                        break;
                    }
                }
                Err(TryRecvError::Empty) => {
                    // Nothing queued, yield so spawned requests make progress
                    tokio::time::sleep(Duration::from_millis(20)).await;
                }
                Err(TryRecvError::Disconnected) => {
                    debug!("action channel closed");
                    break;
                }
            }
        }
    });
}
