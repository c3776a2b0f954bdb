//! `OrreryApp` — the top-level egui application state.
//!
//! This module declares the `OrreryApp` struct and the `eframe::App`
//! impl that composes each frame. The drawing methods are split across
//! the sibling sub-modules:
//!
//! - `toolbar` — title strip, theme toggle, stats toggle
//! - `content` — stage painting, info overlay, card columns, stats panel

pub mod content;
pub mod toolbar;

use eframe::egui;

use orrery::engine::pipeline::{Scene, SceneEngine};
use orrery::info::InfoRecord;
use orrery::input::touch::TapTracker;
use orrery::input::{detect_capability, InteractionProfile};
use orrery::theme::store::ModeStore;
use orrery::theme::{Mode, ThemePalette};

/// The page shipped with the binary.
const DEFAULT_PAGE: &str = include_str!("../../assets/solar-system.html");

// ─── Application state ───────────────────────────────────────────────────────

/// The visible overlay: a parsed record and where to anchor it.
pub struct OverlayState {
    pub record: InfoRecord,
    pub pos: egui::Pos2,
}

pub struct OrreryApp {
    /// Active theme mode
    pub mode: Mode,
    pub store: ModeStore,
    /// Raw page markup, parsed once at first frame
    pub page_html: String,
    /// Built on the first frame, when the capability is known
    pub scene: Option<Scene>,
    pub profile: Option<InteractionProfile>,
    /// Fatal scene-construction failure, shown in the central panel
    pub error: Option<String>,
    pub overlay: Option<OverlayState>,
    /// Body whose metadata rejection is already logged; holds while the
    /// pointer stays on it so hover does not re-warn every frame
    pub rejected_body: Option<usize>,
    pub taps: TapTracker,
    pub show_stats: bool,
    pub app_start: std::time::Instant,
}

impl Default for OrreryApp {
    fn default() -> Self {
        let store = ModeStore::at_default_location();
        let mode = store.load().unwrap_or_default();
        Self {
            mode,
            store,
            page_html: load_page_markup(),
            scene: None,
            profile: None,
            error: None,
            overlay: None,
            rejected_body: None,
            taps: TapTracker::new(),
            show_stats: true,
            app_start: std::time::Instant::now(),
        }
    }
}

impl OrreryApp {
    /// Create the app with the saved mode applied before the first
    /// frame renders, so there is no flash of the wrong theme.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = Self::default();
        let palette = ThemePalette::for_mode(app.mode);
        cc.egui_ctx.set_visuals(palette.visuals(app.mode));
        log::info!("starting in {} mode", app.mode.as_str());
        app
    }

    /// Detect the capability and build the scene, once, on the first
    /// frame. Construction failures are remembered and shown instead
    /// of retried.
    fn ensure_setup(&mut self, ctx: &egui::Context) {
        if self.scene.is_some() || self.error.is_some() {
            return;
        }
        let capability = detect_capability(ctx);
        let profile = InteractionProfile::for_capability(capability);
        log::info!("input capability: {:?}", capability);

        match SceneEngine::new(profile).build_scene(&self.page_html) {
            Ok(scene) => {
                self.scene = Some(scene);
                self.profile = Some(profile);
            }
            Err(err) => {
                log::error!("{}", err);
                self.error = Some(err.to_string());
            }
        }
    }

    /// Flip the mode, update visuals, persist. Logged no-op when the
    /// page has no toggle control.
    pub fn toggle_mode(&mut self, ctx: &egui::Context) {
        let has_toggle = self
            .scene
            .as_ref()
            .map(|s| s.context.has_toggle)
            .unwrap_or(false);
        if !has_toggle {
            log::warn!("mode toggle requested but the page has no toggle control");
            return;
        }

        self.mode = self.mode.opposite();
        let palette = ThemePalette::for_mode(self.mode);
        ctx.set_visuals(palette.visuals(self.mode));
        if let Err(err) = self.store.save(self.mode) {
            log::warn!("could not persist mode: {}", err);
        }
    }
}

fn load_page_markup() -> String {
    match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(html) => {
                log::info!("loaded page from {}", path);
                html
            }
            Err(err) => {
                log::warn!("could not read {}: {}, using the built-in page", path, err);
                DEFAULT_PAGE.to_string()
            }
        },
        None => DEFAULT_PAGE.to_string(),
    }
}

impl eframe::App for OrreryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_setup(ctx);

        // Apply the active palette
        let palette = ThemePalette::for_mode(self.mode);
        ctx.set_visuals(palette.visuals(self.mode));

        // Keyboard toggle, available with or without a page control
        if ctx.input(|i| i.key_pressed(egui::Key::T)) {
            self.toggle_mode(ctx);
        }

        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui, ctx);
        });

        // Stats side panel
        if self.show_stats {
            egui::SidePanel::right("stats")
                .default_width(220.0)
                .show(ctx, |ui| {
                    self.draw_stats_panel(ui);
                });
        }

        // Card columns flanking the stage
        self.draw_card_columns(ctx);

        // Main stage
        let ctx_clone = ctx.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui, &ctx_clone);
        });

        self.draw_overlay(ctx);

        // Advance every active orbit task and schedule the next frame;
        // the step itself is fixed, so speed follows the refresh rate.
        if let Some(scene) = &mut self.scene {
            scene.animator.step_frame();
        }
        ctx.request_repaint();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(scene) = &self.scene {
            scene.animator.shutdown();
        }
    }
}
