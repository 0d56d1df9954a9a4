//! Main update loop

use eframe::egui;
use std::time::Duration;

use super::GuildhallApp;

impl eframe::App for GuildhallApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process backend events
        self.process_events();

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));
        // Purge toasts older than 4 seconds
        self.state.purge_old_toasts(4);

        self.render_menu_bar(ctx);
        self.render_server_list(ctx);
        self.render_central_panel(ctx);

        // Dialogs last so they draw above the panels
        self.render_dialogs(ctx);
    }
}
