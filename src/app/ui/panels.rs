//! Menu bar, server sidebar, and central panel rendering

use eframe::egui;

use crate::app::GuildhallApp;
use crate::ui;

impl GuildhallApp {
    /// Render the menu bar at the top of the window
    pub(in crate::app) fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Account", |ui| {
                    if ui.button("Forget API token").clicked() {
                        self.forget_api_token();
                        ui.close_menu();
                    }
                });
                ui.menu_button("View", |ui| {
                    let label = if self.theme == "light" { "Dark theme" } else { "Light theme" };
                    if ui.button(label).clicked() {
                        self.toggle_theme(ctx);
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render the left panel: servers and their channels, each with an Edit action
    pub(in crate::app) fn render_server_list(&mut self, ctx: &egui::Context) {
        let mut edit_request: Option<(String, String)> = None;
        let mut select_request: Option<String> = None;

        egui::SidePanel::left("servers_panel")
            .resizable(true)
            .default_width(220.0)
            .min_width(180.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("SERVERS").size(11.0).strong().weak());
                ui.separator();

                if self.state.servers.is_empty() {
                    ui.label("No servers cached yet.");
                    return;
                }

                egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                    for server in &self.state.servers {
                        let is_active = self.state.active_server.as_deref() == Some(server.id.as_str());
                        let header = egui::CollapsingHeader::new(egui::RichText::new(&server.name).strong())
                            .id_salt(&server.id)
                            .default_open(is_active)
                            .show(ui, |ui| {
                                if let Some(request) = ui::panels::render_channel_rows(ui, server) {
                                    edit_request = Some(request);
                                }
                            });
                        if header.header_response.clicked() {
                            select_request = Some(server.id.clone());
                        }
                    }
                });
            });

        if let Some(server_id) = select_request {
            self.state.select_server(&server_id);
        }
        if let Some((server_id, channel_id)) = edit_request {
            self.state.open_edit_channel(&server_id, &channel_id);
        }
    }

    /// Render the central panel with the active server's channel overview
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(server) = self.state.active_server() else {
                ui.centered_and_justified(|ui| {
                    ui.label("Select a server");
                });
                return;
            };

            ui.heading(&server.name);
            ui.label(
                egui::RichText::new(format!("{} channels", server.channels.len()))
                    .small()
                    .weak(),
            );
            ui.separator();

            egui::Grid::new(("channel_overview", self.state.view_revision))
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Channel").strong());
                    ui.label(egui::RichText::new("Type").strong());
                    ui.end_row();
                    for channel in &server.channels {
                        ui.label(&channel.name);
                        ui.label(channel.channel_type.label());
                        ui.end_row();
                    }
                });
        });
    }
}
