//! Toolbar rendering for `OrreryApp`.
//!
//! Draws the page title, the theme toggle (only when the page markup
//! provides the control), and the stats toggle.

use eframe::egui;

use orrery::theme::ThemePalette;

use super::OrreryApp;

impl OrreryApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            let title = match &self.scene {
                Some(scene) if !scene.tree.title.is_empty() => scene.tree.title.as_str(),
                _ => "Orrery",
            };
            ui.strong(title);

            ui.separator();

            // Theme toggle, styled like the page's control
            let has_toggle = self
                .scene
                .as_ref()
                .map(|s| s.context.has_toggle)
                .unwrap_or(false);
            if has_toggle {
                let palette = ThemePalette::for_mode(self.mode);
                let button = egui::Button::new(
                    egui::RichText::new(palette.toggle_label).color(palette.toggle_text),
                )
                .fill(palette.toggle_fill);
                if ui.add(button).clicked() {
                    self.toggle_mode(ctx);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.toggle_value(&mut self.show_stats, "Stats");
            });
        });
    }
}
