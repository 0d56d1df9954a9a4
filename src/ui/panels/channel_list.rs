//! Channel rows for the server sidebar.

use eframe::egui;

use crate::model::{ChannelType, Server};

/// Glyph shown in front of a channel name.
pub fn channel_icon(channel_type: ChannelType) -> &'static str {
    match channel_type {
        ChannelType::Text => "#",
        ChannelType::Audio => "🔊",
        ChannelType::Video => "🎥",
    }
}

/// Render one row per channel of `server`.
///
/// Returns `(server_id, channel_id)` when a row's Edit button was clicked.
pub fn render_channel_rows(ui: &mut egui::Ui, server: &Server) -> Option<(String, String)> {
    let mut clicked: Option<(String, String)> = None;

    if server.channels.is_empty() {
        ui.label(egui::RichText::new("No channels").italics().weak());
        return None;
    }

    for channel in &server.channels {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(channel_icon(channel.channel_type)).weak());
            ui.label(&channel.name);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .small_button("✏")
                    .on_hover_text("Edit Channel")
                    .clicked()
                {
                    clicked = Some((server.id.clone(), channel.id.clone()));
                }
            });
        });
    }

    clicked
}
