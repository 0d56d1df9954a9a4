//! Dialog action types - dialogs return actions instead of mutating state directly.
//!
//! The app turns these into backend requests in its update loop.

use crate::model::ChannelUpdate;

/// Actions that dialogs can return to the main application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    // Edit channel
    UpdateChannel {
        request_id: u64,
        channel_id: String,
        server_id: String,
        update: ChannelUpdate,
    },
}
