//! Content-area rendering for `OrreryApp`.
//!
//! Contains four methods:
//!
//! - `draw_content`      — stage painting and pointer interaction
//! - `draw_overlay`      — the floating info window near the pointer
//! - `draw_card_columns` — left/right summary card panels
//! - `draw_stats_panel`  — right-side statistics panel

use eframe::egui;

use orrery::info::{record_for, InfoCard};
use orrery::input::touch::Gesture;
use orrery::input::Capability;
use orrery::render::ellipse_points;
use orrery::theme::ThemePalette;

use super::{OrreryApp, OverlayState};

/// Radius of the sun disc at stage center, px.
const SUN_RADIUS: f32 = 30.0;

/// Extra slack around a body for pointer hit testing, px.
const HIT_SLOP: f32 = 4.0;

impl OrreryApp {
    // ── Stage ────────────────────────────────────────────────────────────────

    /// Paint the stage (background, sun, orbits, bodies, labels) and
    /// feed pointer state into the overlay logic.
    pub fn draw_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if let Some(err) = &self.error {
            ui.colored_label(egui::Color32::from_rgb(255, 80, 80), err);
            return;
        }
        if self.scene.is_none() {
            ui.centered_and_justified(|ui| {
                ui.label("building scene...");
            });
            return;
        }

        let palette = ThemePalette::for_mode(self.mode);
        let lift = self.profile.map(|p| p.label_lift).unwrap_or(20.0);
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

        // Screen position and hit radius per body, for interaction
        // after the scene borrow ends.
        let mut body_hits: Vec<(usize, egui::Pos2, f32)> = Vec::new();

        if let Some(scene) = &self.scene {
            let center = rect.center();
            let stage = scene.context.stage;
            let stage_rect = egui::Rect::from_center_size(
                center,
                egui::vec2(stage.width, stage.height).min(rect.size()),
            );

            let painter = ui.painter();
            painter.rect_filled(stage_rect, 8.0, palette.stage_fill);
            painter.circle_filled(center, SUN_RADIUS, palette.sun);

            for (i, (body, task)) in scene
                .context
                .bodies
                .iter()
                .zip(scene.animator.tasks())
                .enumerate()
            {
                // Orbit outline
                let outline = ellipse_points(center, body.radius_x, body.radius_y, 72);
                painter.add(egui::Shape::closed_line(
                    outline,
                    egui::Stroke::new(1.0, palette.orbit_stroke),
                ));

                // Body at stage-center plus the parametric offset
                let (dx, dy) = task.motion.position();
                let pos = center + egui::vec2(dx, dy);
                painter.circle_filled(pos, body.size / 2.0, body.color);

                // Label rides above the body
                let (lx, ly) = task.motion.label_anchor(lift);
                painter.text(
                    center + egui::vec2(lx, ly),
                    egui::Align2::CENTER_CENTER,
                    &body.label,
                    egui::FontId::proportional(11.0),
                    palette.text,
                );

                body_hits.push((i, pos, body.size / 2.0 + HIT_SLOP));
            }
        }

        self.handle_pointer(ctx, &response, &body_hits);
    }

    /// Route pointer state per capability: hover shows and leave hides
    /// with a fine pointer; taps show on a body and hide elsewhere on
    /// touch, with long press behaving like a tap.
    fn handle_pointer(
        &mut self,
        ctx: &egui::Context,
        response: &egui::Response,
        body_hits: &[(usize, egui::Pos2, f32)],
    ) {
        let capability = self.profile.map(|p| p.capability);
        let offset = self.profile.map(|p| p.overlay_offset).unwrap_or(10.0);

        match capability {
            Some(Capability::PointerFine) => match response.hover_pos() {
                Some(at) => match hit_body(body_hits, at) {
                    Some(i) => self.show_info(i, at + egui::vec2(offset, offset)),
                    None => self.hide_info(),
                },
                None => self.hide_info(),
            },
            Some(Capability::Touch) => {
                let (pressed, released, pos) = ctx.input(|i| {
                    (
                        i.pointer.any_pressed(),
                        i.pointer.any_released(),
                        i.pointer.interact_pos(),
                    )
                });
                let pos = match pos {
                    Some(p) => p,
                    None => return,
                };
                if pressed {
                    self.taps.press_start(pos);
                }
                self.taps.press_move(pos);
                if released {
                    match self.taps.press_end(pos) {
                        Gesture::Tap(at) | Gesture::LongPress(at) => {
                            match hit_body(body_hits, at) {
                                Some(i) => {
                                    self.show_info(i, at + egui::vec2(offset, offset))
                                }
                                None => self.hide_info(),
                            }
                        }
                        Gesture::None => {}
                    }
                }
            }
            None => {}
        }
    }

    // ── Overlay ──────────────────────────────────────────────────────────────

    /// Populate the overlay from a body's metadata and anchor it near
    /// the pointer. Rejected metadata hides the overlay and logs, once
    /// per hover rather than once per frame.
    fn show_info(&mut self, body_index: usize, at: egui::Pos2) {
        let outcome = match &self.scene {
            Some(scene) => {
                if !scene.context.has_overlay {
                    // resolve already warned once for the page
                    log::debug!("info requested but the page has no overlay elements");
                    return;
                }
                match scene.context.bodies.get(body_index) {
                    Some(body) => record_for(&body.name, body.info.as_deref()),
                    None => return,
                }
            }
            None => return,
        };

        match outcome {
            Ok(record) => {
                self.rejected_body = None;
                self.overlay = Some(OverlayState { record, pos: at });
            }
            Err(err) => {
                if self.rejected_body != Some(body_index) {
                    log::warn!("{}", err);
                    self.rejected_body = Some(body_index);
                }
                self.overlay = None;
            }
        }
    }

    fn hide_info(&mut self) {
        self.overlay = None;
        self.rejected_body = None;
    }

    /// The floating info window: title-bar-less, fixed at the stored
    /// anchor, clamped to the screen by egui.
    pub fn draw_overlay(&self, ctx: &egui::Context) {
        let state = match &self.overlay {
            Some(state) => state,
            None => return,
        };
        let palette = ThemePalette::for_mode(self.mode);

        egui::Window::new("planet-info")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .fixed_pos(state.pos)
            .frame(
                egui::Frame::none()
                    .fill(palette.stage_fill)
                    .stroke(egui::Stroke::new(1.0, palette.orbit_stroke))
                    .rounding(4.0)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.strong(&state.record.name);
                ui.label(&state.record.details);
            });
    }

    // ── Cards ────────────────────────────────────────────────────────────────

    /// Left/right summary card panels, drawn only when the page markup
    /// carries both columns.
    pub fn draw_card_columns(&self, ctx: &egui::Context) {
        let scene = match &self.scene {
            Some(scene) => scene,
            None => return,
        };
        if !scene.context.has_card_columns {
            return;
        }
        let palette = ThemePalette::for_mode(self.mode);

        egui::SidePanel::left("planet-cards-left")
            .default_width(190.0)
            .show(ctx, |ui| {
                draw_cards(ui, &scene.cards.left, &palette);
            });
        egui::SidePanel::right("planet-cards-right")
            .default_width(190.0)
            .show(ctx, |ui| {
                draw_cards(ui, &scene.cards.right, &palette);
            });
    }

    // ── Stats ────────────────────────────────────────────────────────────────

    pub fn draw_stats_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Scene");
        ui.separator();

        match &self.scene {
            Some(scene) => {
                ui.label(format!("DOM nodes: {}", scene.tree.node_count()));
                ui.label(format!("Bodies: {}", scene.context.bodies.len()));
                ui.colored_label(
                    egui::Color32::from_rgb(0, 180, 0),
                    format!("Active tasks: {}", scene.animator.active_count()),
                );
                ui.label(format!("Frames: {}", scene.animator.frames()));
                ui.label(format!("Cards: {}", scene.cards.total()));
            }
            None => {
                ui.label("building scene...");
            }
        }

        ui.separator();
        if let Some(profile) = &self.profile {
            ui.label(format!("Input: {:?}", profile.capability));
        }
        ui.label(format!("Mode: {}", self.mode.as_str()));
        ui.label(format!("Uptime: {:.0}s", self.app_start.elapsed().as_secs_f32()));
    }
}

fn hit_body(hits: &[(usize, egui::Pos2, f32)], at: egui::Pos2) -> Option<usize> {
    hits.iter()
        .find(|(_, pos, radius)| pos.distance(at) <= *radius)
        .map(|(i, _, _)| *i)
}

fn draw_cards(ui: &mut egui::Ui, cards: &[InfoCard], palette: &ThemePalette) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        for card in cards {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(card.icon.glyph()).size(16.0));
                    ui.strong(&card.name);
                });
                ui.label(
                    egui::RichText::new(&card.details)
                        .color(palette.text)
                        .size(11.0),
                );
            });
            ui.add_space(6.0);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery::engine::pipeline::SceneEngine;
    use orrery::input::touch::TapTracker;
    use orrery::input::InteractionProfile;
    use orrery::theme::store::ModeStore;
    use orrery::theme::Mode;

    const PAGE: &str = r#"
    <html><body>
        <div id="solar-system" style="width: 900px; height: 700px">
            <div class="earth-orbit orbit" style="width: 240px; height: 190px">
                <div id="planet-earth" class="planet"
                     data-info="Earth: Third planet from the Sun"></div>
            </div>
            <div class="venus-orbit orbit" style="width: 200px; height: 150px">
                <div id="planet-venus" class="planet" data-info="Venus - hot"></div>
            </div>
        </div>
        <div id="planet-info">
            <h2 id="planet-name"></h2>
            <p id="planet-details"></p>
        </div>
    </body></html>
    "#;

    fn app_with_page(html: &str) -> OrreryApp {
        let profile = InteractionProfile::for_capability(Capability::PointerFine);
        let scene = match SceneEngine::new(profile).build_scene(html) {
            Ok(scene) => scene,
            Err(err) => panic!("page must build: {}", err),
        };
        OrreryApp {
            mode: Mode::Dark,
            store: ModeStore::new(
                std::env::temp_dir()
                    .join(format!("orrery-app-test-{}", std::process::id()))
                    .join("mode"),
            ),
            page_html: html.to_string(),
            scene: Some(scene),
            profile: Some(profile),
            error: None,
            overlay: None,
            rejected_body: None,
            taps: TapTracker::new(),
            show_stats: false,
            app_start: std::time::Instant::now(),
        }
    }

    #[test]
    fn overlay_follows_valid_metadata() {
        let mut app = app_with_page(PAGE);

        app.show_info(0, egui::Pos2::new(40.0, 40.0));
        match &app.overlay {
            Some(state) => {
                assert_eq!(state.record.name, "Earth");
                assert_eq!(state.record.details, "Third planet from the Sun");
                assert_eq!(state.pos, egui::Pos2::new(40.0, 40.0));
            }
            None => panic!("expected the overlay for valid metadata"),
        }

        app.hide_info();
        assert!(app.overlay.is_none());
    }

    #[test]
    fn rejected_metadata_is_reported_once_per_hover() {
        let mut app = app_with_page(PAGE);

        // venus carries a malformed record; repeated frames while it
        // stays hovered must not re-report
        app.show_info(1, egui::Pos2::new(60.0, 60.0));
        assert!(app.overlay.is_none());
        assert_eq!(app.rejected_body, Some(1));

        app.show_info(1, egui::Pos2::new(61.0, 60.0));
        assert_eq!(app.rejected_body, Some(1));

        // leaving the body arms the report for the next hover
        app.hide_info();
        assert_eq!(app.rejected_body, None);

        // a valid body clears the marker too
        app.show_info(1, egui::Pos2::new(60.0, 60.0));
        app.show_info(0, egui::Pos2::new(40.0, 40.0));
        assert_eq!(app.rejected_body, None);
        assert!(app.overlay.is_some());
    }
}
