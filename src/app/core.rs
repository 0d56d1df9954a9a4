//! Core GuildhallApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use std::thread;
use tracing::{info, warn};

use crate::backend::run_backend;
use crate::config::{clear_api_token, load_api_token, load_settings, save_settings, Settings};
use crate::dialog_manager::DialogManager;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ClientState;

pub struct GuildhallApp {
    // Servers, channels, modal state, toasts
    pub state: ClientState,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Dialogs - managed centrally by DialogManager
    pub dialogs: DialogManager,

    // Persisted preferences
    pub api_base_url: String,
    pub theme: String,
}

impl GuildhallApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings().unwrap_or_default();
        apply_theme(&cc.egui_ctx, &settings.theme);

        let app = Self::from_settings(settings);
        let _ = app.action_tx.send(BackendAction::Configure {
            base_url: app.api_base_url.clone(),
            token: load_api_token(),
        });
        app
    }

    /// Build the app state and spawn the backend thread, without touching
    /// the system keyring or any window.
    pub fn from_settings(settings: Settings) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        // Spawn the backend thread
        thread::spawn(move || {
            run_backend(action_rx, event_tx);
        });

        info!(api = %settings.api_base_url, servers = settings.servers.len(), "starting client");

        Self {
            state: ClientState::new(settings.servers, settings.active_server),
            action_tx,
            event_rx,
            dialogs: DialogManager::new(),
            api_base_url: settings.api_base_url,
            theme: settings.theme,
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            api_base_url: self.api_base_url.clone(),
            theme: self.theme.clone(),
            servers: self.state.servers.clone(),
            active_server: self.state.active_server.clone(),
        }
    }

    pub(super) fn persist_settings(&self) {
        if let Err(e) = save_settings(&self.settings()) {
            warn!("Failed to save settings: {}", e);
        }
    }

    /// Drop the stored token and reconnect the backend without one.
    pub(super) fn forget_api_token(&mut self) {
        if let Err(e) = clear_api_token() {
            warn!("Failed to clear API token: {}", e);
            return;
        }
        let _ = self.action_tx.send(BackendAction::Configure {
            base_url: self.api_base_url.clone(),
            token: None,
        });
        self.state.push_toast("API token removed");
    }

    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = if self.theme == "light" { "dark" } else { "light" }.to_string();
        apply_theme(ctx, &self.theme);
    }
}

fn apply_theme(ctx: &egui::Context, theme: &str) {
    match theme {
        "light" => ctx.set_visuals(egui::Visuals::light()),
        _ => ctx.set_visuals(egui::Visuals::dark()),
    }
}

impl Drop for GuildhallApp {
    fn drop(&mut self) {
        let _ = self.action_tx.send(BackendAction::Shutdown);
        // Persist settings on exit
        self.persist_settings();
    }
}
