//! Dialog rendering orchestration

use eframe::egui;
use tracing::error;

use super::GuildhallApp;
use crate::api::ApiError;
use crate::protocol::BackendAction;
use crate::ui;
use crate::ui::dialogs::DialogAction;

impl GuildhallApp {
    /// Render all dialogs and handle their actions
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        // Floating status toasts (top-right corner)
        ui::dialogs::render_status_toasts(ctx, &self.state.toasts);

        let actions = self.dialogs.render(ctx, &mut self.state.modal);
        for action in actions {
            self.handle_dialog_action(action);
        }
    }

    /// Handle dialog actions by sending the matching backend request
    pub(super) fn handle_dialog_action(&mut self, action: DialogAction) {
        match action {
            DialogAction::UpdateChannel {
                request_id,
                channel_id,
                server_id,
                update,
            } => {
                let sent = self.action_tx.send(BackendAction::UpdateChannel {
                    request_id,
                    channel_id,
                    server_id,
                    update,
                });
                if sent.is_err() {
                    // Backend thread is gone; unblock the dialog
                    error!(request_id, "backend unavailable, dropping channel update");
                    let failure = Err(ApiError::Transport("backend unavailable".into()));
                    self.dialogs
                        .finish_channel_update(request_id, &failure, &mut self.state.modal);
                }
            }
        }
    }
}
