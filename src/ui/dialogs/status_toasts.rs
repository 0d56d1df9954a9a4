//! Status toasts - short confirmations floating in the top-right corner.

use eframe::egui;

use crate::state::{Toast, ToastLevel};

/// Render the current toasts, newest last.
pub fn render_status_toasts(ctx: &egui::Context, toasts: &[Toast]) {
    if toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("status_toast_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(30, 30, 30, 230))
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    for toast in toasts {
                        let color = toast_color(ui.visuals(), toast.level);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&toast.timestamp)
                                    .small()
                                    .color(egui::Color32::GRAY),
                            );
                            ui.label(egui::RichText::new(&toast.text).color(color));
                        });
                    }
                });
        });
}

fn toast_color(visuals: &egui::Visuals, level: ToastLevel) -> egui::Color32 {
    match level {
        ToastLevel::Info => egui::Color32::LIGHT_GREEN,
        ToastLevel::Error => visuals.error_fg_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_toasts_use_error_color() {
        let visuals = egui::Visuals::dark();
        assert_eq!(toast_color(&visuals, ToastLevel::Error), visuals.error_fg_color);
        assert_ne!(toast_color(&visuals, ToastLevel::Info), visuals.error_fg_color);
    }

    #[test]
    fn test_render_mixed_toasts_headless() {
        let ctx = egui::Context::default();
        let toasts = vec![
            Toast::new("Channel updated: rules", ToastLevel::Info),
            Toast::new("Error: Invalid API base URL", ToastLevel::Error),
        ];
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            render_status_toasts(ctx, &toasts);
        });
    }
}
