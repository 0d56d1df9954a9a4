use crate::api::ApiError;
use crate::model::ChannelUpdate;

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Point the client at a different API (base URL, optional bearer token)
    Configure {
        base_url: String,
        token: Option<String>,
    },
    /// PATCH a channel's name and type
    UpdateChannel {
        request_id: u64,
        channel_id: String,
        server_id: String,
        update: ChannelUpdate,
    },
    /// Stop the backend loop
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A channel update finished, successfully or not
    ChannelUpdateFinished {
        request_id: u64,
        channel_id: String,
        server_id: String,
        update: ChannelUpdate,
        result: Result<(), ApiError>,
    },
    /// Backend-level failure unrelated to a single request
    Error(String),
}
