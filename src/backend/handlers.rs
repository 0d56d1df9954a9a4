//! Backend action handling
//!
//! Each `UpdateChannel` runs as its own task on the backend runtime so a
//! slow request never holds up the actions queued behind it.

use crossbeam_channel::Sender;
use tracing::{debug, error, warn};

use crate::api::{ApiError, ChannelsClient};
use crate::protocol::{BackendAction, GuiEvent};

/// Whether the main loop keeps running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Route one UI action.
///
/// Must be called from within the backend's Tokio runtime.
pub fn handle_backend_action(
    action: BackendAction,
    client: &mut Option<ChannelsClient>,
    event_tx: &Sender<GuiEvent>,
) -> Flow {
    match action {
        BackendAction::Configure { base_url, token } => {
            match ChannelsClient::new(&base_url, token) {
                Ok(c) => {
                    debug!(%base_url, "channels API configured");
                    *client = Some(c);
                }
                Err(e) => {
                    error!("invalid API configuration: {}", e);
                    *client = None;
                    let _ = event_tx.send(GuiEvent::Error(e.to_string()));
                }
            }
            Flow::Continue
        }

        BackendAction::UpdateChannel {
            request_id,
            channel_id,
            server_id,
            update,
        } => {
            let client = client.clone();
            let event_tx = event_tx.clone();
            tokio::spawn(async move {
                let result = match &client {
                    Some(c) => c.update_channel(&channel_id, &server_id, &update).await,
                    None => Err(ApiError::NotConfigured),
                };
                if let Err(e) = &result {
                    warn!(request_id, channel = %channel_id, "channel update failed: {}", e);
                }
                let _ = event_tx.send(GuiEvent::ChannelUpdateFinished {
                    request_id,
                    channel_id,
                    server_id,
                    update,
                    result,
                });
            });
            Flow::Continue
        }

        BackendAction::Shutdown => Flow::Stop,
    }
}
