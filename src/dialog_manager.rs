//! Dialog management for centralized dialog state and rendering.
//!
//! Dialog visibility is not stored here: every frame the manager hands the
//! application's `ModalState` to each dialog, and a dialog draws only while
//! the modal names it.

use eframe::egui::Context;

use crate::api::ApiError;
use crate::modal::ModalState;
use crate::ui::dialogs::{DialogAction, EditChannelDialog, SubmitOutcome};

pub struct DialogManager {
    pub edit_channel: EditChannelDialog,
}

impl DialogManager {
    pub fn new() -> Self {
        Self {
            edit_channel: EditChannelDialog::new(),
        }
    }

    /// Render all dialogs and collect their actions.
    pub fn render(&mut self, ctx: &Context, modal: &mut ModalState) -> Vec<DialogAction> {
        let mut actions: Vec<DialogAction> = Vec::new();

        if let Some(action) = self.edit_channel.render(ctx, modal) {
            actions.push(action);
        }

        actions
    }

    /// Route a finished channel update to the edit dialog, closing the modal
    /// when it succeeded.
    pub fn finish_channel_update(
        &mut self,
        request_id: u64,
        result: &Result<(), ApiError>,
        modal: &mut ModalState,
    ) -> SubmitOutcome {
        let outcome = self.edit_channel.finish_submit(request_id, result);
        if outcome == SubmitOutcome::Closed {
            modal.on_close();
        }
        outcome
    }
}

impl Default for DialogManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::{ModalData, ModalKind};
    use crate::model::{Channel, ChannelType, Server};

    fn open_modal() -> ModalState {
        let mut modal = ModalState::new();
        modal.open(
            ModalKind::EditChannel,
            ModalData {
                channel: Some(Channel::new("c1", "rules", ChannelType::Text)),
                server: Some(Server::new("s1", "Home")),
            },
        );
        modal
    }

    fn start_submit(dm: &mut DialogManager, modal: &ModalState) -> u64 {
        dm.edit_channel.sync(modal);
        match dm.edit_channel.submit() {
            Ok(Some(DialogAction::UpdateChannel { request_id, .. })) => request_id,
            other => panic!("Expected UpdateChannel, got {:?}", other),
        }
    }

    #[test]
    fn test_success_closes_modal() {
        let mut dm = DialogManager::new();
        let mut modal = open_modal();
        let request_id = start_submit(&mut dm, &modal);

        let outcome = dm.finish_channel_update(request_id, &Ok(()), &mut modal);
        assert_eq!(outcome, SubmitOutcome::Closed);
        assert!(!modal.is_open);
    }

    #[test]
    fn test_failure_keeps_modal_open() {
        let mut dm = DialogManager::new();
        let mut modal = open_modal();
        let request_id = start_submit(&mut dm, &modal);

        let outcome = dm.finish_channel_update(
            request_id,
            &Err(ApiError::Status {
                status: 500,
                body: String::new(),
            }),
            &mut modal,
        );
        assert_eq!(outcome, SubmitOutcome::StillOpen);
        assert!(modal.is_showing(ModalKind::EditChannel));
    }

    #[test]
    fn test_unknown_request_is_ignored() {
        let mut dm = DialogManager::new();
        let mut modal = open_modal();
        let request_id = start_submit(&mut dm, &modal);

        let outcome = dm.finish_channel_update(request_id + 1, &Ok(()), &mut modal);
        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert!(modal.is_open);
        assert!(dm.edit_channel.is_submitting());
    }
}
