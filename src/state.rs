//! Core application state, separated from UI logic.
//!
//! `ClientState` holds the cached servers and channels, the modal request,
//! and transient toasts. UI components receive it as a parameter rather
//! than owning it.

use std::time::Instant;

use chrono::Local;

use crate::modal::{ModalData, ModalKind, ModalState};
use crate::model::{ChannelUpdate, Server};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

/// A short-lived status message.
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub level: ToastLevel,
    /// Wall-clock time shown next to the text (HH:MM:SS).
    pub timestamp: String,
    created: Instant,
}

impl Toast {
    pub fn new(text: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            text: text.into(),
            level,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            created: Instant::now(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ClientState {
    /// Servers and their channels as last loaded.
    pub servers: Vec<Server>,

    /// Id of the server whose channels are shown.
    pub active_server: Option<String>,

    /// Which modal is open, and for what.
    pub modal: ModalState,

    /// Status toasts (auto-expire).
    pub toasts: Vec<Toast>,

    /// Bumped whenever the current view must re-read its data.
    pub view_revision: u64,
}

impl ClientState {
    pub fn new(servers: Vec<Server>, active_server: Option<String>) -> Self {
        let active_server = active_server
            .filter(|id| servers.iter().any(|s| &s.id == id))
            .or_else(|| servers.first().map(|s| s.id.clone()));
        Self {
            servers,
            active_server,
            ..Default::default()
        }
    }

    pub fn server(&self, server_id: &str) -> Option<&Server> {
        self.servers.iter().find(|s| s.id == server_id)
    }

    pub fn active_server(&self) -> Option<&Server> {
        self.active_server.as_deref().and_then(|id| self.server(id))
    }

    /// Switch the visible server. Unknown ids are ignored.
    pub fn select_server(&mut self, server_id: &str) {
        if self.server(server_id).is_some() {
            self.active_server = Some(server_id.to_string());
            self.refresh_view();
        }
    }

    /// Raise the Edit Channel modal for a cached channel.
    /// Returns false if the server or channel is unknown.
    pub fn open_edit_channel(&mut self, server_id: &str, channel_id: &str) -> bool {
        let Some(server) = self.server(server_id) else {
            return false;
        };
        let Some(channel) = server.channels.iter().find(|c| c.id == channel_id) else {
            return false;
        };
        let data = ModalData {
            channel: Some(channel.clone()),
            server: Some(server.clone()),
        };
        self.modal.open(ModalKind::EditChannel, data);
        true
    }

    /// Fold an accepted update into the cached data and refresh the view.
    pub fn apply_channel_update(&mut self, server_id: &str, channel_id: &str, update: &ChannelUpdate) -> bool {
        let updated = match self
            .servers
            .iter_mut()
            .find(|s| s.id == server_id)
            .and_then(|s| s.channel_mut(channel_id))
        {
            Some(channel) => {
                channel.apply(update);
                true
            }
            None => false,
        };
        self.refresh_view();
        updated
    }

    pub fn refresh_view(&mut self) {
        self.view_revision += 1;
    }

    pub fn push_toast(&mut self, text: impl Into<String>) {
        self.toasts.push(Toast::new(text, ToastLevel::Info));
    }

    pub fn push_error_toast(&mut self, text: impl Into<String>) {
        self.toasts.push(Toast::new(text, ToastLevel::Error));
    }

    /// Drop toasts older than the given age.
    pub fn purge_old_toasts(&mut self, max_age_secs: u64) {
        self.toasts
            .retain(|t| t.created.elapsed().as_secs() < max_age_secs);
    }
}
