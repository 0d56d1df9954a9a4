//! Guildhall Client - channel management front-end built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for HTTP calls to the channels API
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use guildhall_client::app::GuildhallApp;
use guildhall_client::logging;

fn main() -> eframe::Result<()> {
    if let Err(e) = logging::init_tracing() {
        eprintln!("Failed to initialize tracing: {}", e);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Guildhall",
        options,
        Box::new(|cc| Ok(Box::new(GuildhallApp::new(cc)))),
    )
}
