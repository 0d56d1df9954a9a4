//! Edit Channel dialog - rename a channel and change its type.
//!
//! Visibility follows the `ModalState` it is given each frame: the dialog
//! shows only while the modal is open with kind `EditChannel`. The form is
//! pre-filled whenever the modal's channel changes and reset on any close.

use eframe::egui;
use tracing::{debug, error};

use super::DialogAction;
use crate::api::ApiError;
use crate::channel_form::ChannelForm;
use crate::modal::{ModalKind, ModalState};
use crate::model::{Channel, ChannelType, Server};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting { request_id: u64 },
}

/// What happened when a submission completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Succeeded; the form was reset and the modal should close.
    Closed,
    /// Failed; the dialog stays open with the entered values.
    StillOpen,
    /// Not the dialog's in-flight request (closed or superseded meanwhile).
    Ignored,
}

pub struct EditChannelDialog {
    pub form: ChannelForm,
    /// Channel the form was last populated from
    channel: Option<Channel>,
    server: Option<Server>,
    state: SubmitState,
    next_request_id: u64,
}

impl EditChannelDialog {
    pub fn new() -> Self {
        Self {
            form: ChannelForm::new(),
            channel: None,
            server: None,
            state: SubmitState::Idle,
            next_request_id: 0,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmitState::Submitting { .. })
    }

    /// Bind to the current modal state.
    ///
    /// Re-populates the fields when the channel reference changes and resets
    /// everything once the modal is no longer showing this dialog.
    pub fn sync(&mut self, modal: &ModalState) {
        if !modal.is_showing(ModalKind::EditChannel) {
            if self.channel.is_some() || self.is_submitting() || self.form != ChannelForm::new() {
                self.clear();
            }
            return;
        }

        if modal.data.channel != self.channel {
            if let Some(channel) = &modal.data.channel {
                self.form.populate(channel);
            }
            self.channel = modal.data.channel.clone();
        }
        self.server = modal.data.server.clone();
    }

    /// Validate and, if valid, start a submission.
    ///
    /// `Ok(None)` means nothing was sent: the form is invalid (errors are on
    /// `self.form.errors`) or a submission is already in flight.
    pub fn submit(&mut self) -> Result<Option<DialogAction>, ApiError> {
        if self.is_submitting() {
            return Ok(None);
        }
        let Some(update) = self.form.validate() else {
            return Ok(None);
        };
        let (Some(channel), Some(server)) = (&self.channel, &self.server) else {
            return Err(ApiError::MissingContext);
        };

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.state = SubmitState::Submitting { request_id };
        debug!(request_id, channel = %channel.id, server = %server.id, "submitting channel edit");

        Ok(Some(DialogAction::UpdateChannel {
            request_id,
            channel_id: channel.id.clone(),
            server_id: server.id.clone(),
            update,
        }))
    }

    /// Apply the result of a submission started by [`submit`](Self::submit).
    pub fn finish_submit(&mut self, request_id: u64, result: &Result<(), ApiError>) -> SubmitOutcome {
        if self.state != (SubmitState::Submitting { request_id }) {
            debug!(request_id, "ignoring stale channel update result");
            return SubmitOutcome::Ignored;
        }
        self.state = SubmitState::Idle;

        match result {
            Ok(()) => {
                self.clear();
                SubmitOutcome::Closed
            }
            Err(e) => {
                error!(request_id, "failed to update channel: {}", e);
                SubmitOutcome::StillOpen
            }
        }
    }

    /// Close without submitting.
    pub fn cancel(&mut self, modal: &mut ModalState) {
        self.clear();
        modal.on_close();
    }

    fn clear(&mut self) {
        self.form.reset();
        self.channel = None;
        self.server = None;
        self.state = SubmitState::Idle;
    }

    /// Render the dialog against the given modal state.
    /// Returns `Some(DialogAction::UpdateChannel)` when a valid submit starts.
    pub fn render(&mut self, ctx: &egui::Context, modal: &mut ModalState) -> Option<DialogAction> {
        self.sync(modal);
        if !modal.is_showing(ModalKind::EditChannel) {
            return None;
        }

        let mut action: Option<DialogAction> = None;
        let mut window_open = true;
        let mut should_close = false;
        let busy = self.is_submitting();
        // Escape first closes an open popup such as the type selector.
        let popup_open = ctx.memory(|m| m.any_popup_open());

        egui::Window::new("Edit Channel")
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(380.0)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("CHANNEL NAME")
                        .small()
                        .strong()
                        .color(ui.visuals().weak_text_color()),
                );
                let mut name = self.form.name.clone();
                let response = ui.add_enabled(
                    !busy,
                    egui::TextEdit::singleline(&mut name)
                        .hint_text("Enter Channel Name...")
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    self.form.set_name(&name);
                }
                if let Some(err) = &self.form.errors.name {
                    ui.colored_label(ui.visuals().error_fg_color, err.to_string());
                }

                ui.add_space(8.0);
                ui.label("Channel Type");
                let mut selected = self.form.channel_type;
                ui.add_enabled_ui(!busy, |ui| {
                    egui::ComboBox::from_id_salt("edit_channel_type")
                        .selected_text(selected.label())
                        .width(ui.available_width())
                        .show_ui(ui, |ui| {
                            for channel_type in ChannelType::ALL {
                                ui.selectable_value(&mut selected, channel_type, channel_type.label());
                            }
                        });
                });
                if selected != self.form.channel_type {
                    self.form.set_channel_type(selected);
                }

                ui.add_space(12.0);
                ui.separator();

                ui.horizontal(|ui| {
                    let save_clicked = ui.add_enabled(!busy, egui::Button::new("Save")).clicked();
                    let enter_pressed =
                        !busy && response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    if save_clicked || enter_pressed {
                        match self.submit() {
                            Ok(submitted) => action = submitted,
                            Err(e) => error!("cannot submit channel edit: {}", e),
                        }
                    }

                    if busy {
                        ui.spinner();
                    }
                });

                if !popup_open && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    should_close = true;
                }
            });

        if !window_open || should_close {
            self.cancel(modal);
        }

        action
    }
}

impl Default for EditChannelDialog {
    fn default() -> Self {
        Self::new()
    }
}
