//! Backend event processing.

use tracing::error;

use crate::dialog_manager::DialogManager;
use crate::protocol::GuiEvent;
use crate::state::ClientState;

/// Apply one backend event to the state and dialogs.
///
/// Returns true when cached server data changed and should be persisted.
pub fn process_single_event(state: &mut ClientState, dialogs: &mut DialogManager, event: GuiEvent) -> bool {
    match event {
        GuiEvent::ChannelUpdateFinished {
            request_id,
            channel_id,
            server_id,
            update,
            result,
        } => {
            dialogs.finish_channel_update(request_id, &result, &mut state.modal);

            // Refresh even if the dialog has already moved on.
            if result.is_ok() {
                state.apply_channel_update(&server_id, &channel_id, &update);
                state.push_toast(format!("Channel updated: {}", update.name));
                return true;
            }
            false
        }

        GuiEvent::Error(msg) => {
            error!("backend error: {}", msg);
            state.push_error_toast(format!("Error: {}", msg));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::model::{Channel, ChannelType, Server};
    use crate::state::ToastLevel;
    use crate::ui::dialogs::DialogAction;

    fn state_with_channel() -> ClientState {
        let mut server = Server::new("s1", "Home");
        server.channels.push(Channel::new("c1", "rules", ChannelType::Text));
        ClientState::new(vec![server], None)
    }

    fn submit(state: &mut ClientState, dialogs: &mut DialogManager, name: &str) -> DialogAction {
        assert!(state.open_edit_channel("s1", "c1"));
        dialogs.edit_channel.sync(&state.modal);
        dialogs.edit_channel.form.set_name(name);
        dialogs.edit_channel.submit().unwrap().unwrap()
    }

    fn finished(action: DialogAction, result: Result<(), ApiError>) -> GuiEvent {
        let DialogAction::UpdateChannel {
            request_id,
            channel_id,
            server_id,
            update,
        } = action;
        GuiEvent::ChannelUpdateFinished {
            request_id,
            channel_id,
            server_id,
            update,
            result,
        }
    }

    #[test]
    fn test_success_updates_cache_and_closes() {
        let mut state = state_with_channel();
        let mut dialogs = DialogManager::new();
        let action = submit(&mut state, &mut dialogs, "rules-updated");
        let revision = state.view_revision;

        let changed = process_single_event(&mut state, &mut dialogs, finished(action, Ok(())));

        assert!(changed);
        assert!(!state.modal.is_open);
        assert_eq!(state.server("s1").unwrap().channels[0].name, "rules-updated");
        assert!(state.view_revision > revision);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].level, ToastLevel::Info);
    }

    #[test]
    fn test_failure_is_silent() {
        let mut state = state_with_channel();
        let mut dialogs = DialogManager::new();
        let action = submit(&mut state, &mut dialogs, "rules-updated");

        let changed = process_single_event(
            &mut state,
            &mut dialogs,
            finished(action, Err(ApiError::Transport("network down".into()))),
        );

        assert!(!changed);
        assert!(state.modal.is_open);
        assert!(state.toasts.is_empty());
        assert_eq!(dialogs.edit_channel.form.name, "rules-updated");
        assert!(dialogs.edit_channel.form.errors.is_empty());
        assert_eq!(state.server("s1").unwrap().channels[0].name, "rules");
    }

    #[test]
    fn test_stale_success_still_refreshes() {
        let mut state = state_with_channel();
        let mut dialogs = DialogManager::new();
        let action = submit(&mut state, &mut dialogs, "renamed");

        state.modal.on_close();
        dialogs.edit_channel.sync(&state.modal);

        let changed = process_single_event(&mut state, &mut dialogs, finished(action, Ok(())));
        assert!(changed);
        assert!(!state.modal.is_open);
        assert_eq!(state.server("s1").unwrap().channels[0].name, "renamed");
    }

    #[test]
    fn test_backend_error_toast() {
        let mut state = ClientState::default();
        let mut dialogs = DialogManager::new();
        assert!(!process_single_event(
            &mut state,
            &mut dialogs,
            GuiEvent::Error("Invalid API base URL".into())
        ));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].level, ToastLevel::Error);
    }
}
