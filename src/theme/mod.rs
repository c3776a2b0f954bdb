//! Dark/light mode state and the palette each mode paints with.
//!
//! Mode is the persisted two-valued flag; ThemePalette carries the
//! concrete colors and the toggle-control presentation for whichever
//! mode is active.

pub mod store;

use egui::Color32;

/// The persisted theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Dark,
    Light,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Dark
    }
}

impl Mode {
    /// The string form stored on disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }

    /// Parse a stored string. Anything unrecognized is None.
    pub fn parse(s: &str) -> Option<Mode> {
        match s {
            "dark" => Some(Mode::Dark),
            "light" => Some(Mode::Light),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Mode {
        match self {
            Mode::Dark => Mode::Light,
            Mode::Light => Mode::Dark,
        }
    }
}

/// Concrete colors for one mode.
pub struct ThemePalette {
    /// Window and panel background.
    pub background: Color32,
    /// Stage fill behind the orbits.
    pub stage_fill: Color32,
    /// Orbit outline stroke.
    pub orbit_stroke: Color32,
    /// Body labels and card text.
    pub text: Color32,
    /// The sun at stage center.
    pub sun: Color32,
    /// Toggle control fill for this mode.
    pub toggle_fill: Color32,
    /// Toggle control text color.
    pub toggle_text: Color32,
    /// Toggle control label, offering the opposite mode.
    pub toggle_label: &'static str,
}

impl ThemePalette {
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x0B, 0x0E, 0x1A),
            stage_fill: Color32::from_rgb(0x05, 0x07, 0x0F),
            orbit_stroke: Color32::from_rgba_unmultiplied(255, 255, 255, 40),
            text: Color32::from_rgb(0xE0, 0xE0, 0xE0),
            sun: Color32::from_rgb(0xFF, 0xD7, 0x00),
            toggle_fill: Color32::from_rgb(245, 245, 245),
            toggle_text: Color32::from_rgb(0x17, 0x17, 0x17),
            toggle_label: "\u{2600} Light Mode",
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xF0, 0xF0, 0xF5),
            stage_fill: Color32::from_rgb(0xFF, 0xFF, 0xFF),
            orbit_stroke: Color32::from_rgba_unmultiplied(0, 0, 0, 40),
            text: Color32::from_rgb(0x17, 0x17, 0x17),
            sun: Color32::from_rgb(0xF5, 0xA6, 0x23),
            toggle_fill: Color32::from_rgb(0x33, 0x33, 0x33),
            toggle_text: Color32::from_rgb(0xEE, 0xEE, 0xEE),
            toggle_label: "\u{263E} Dark Mode",
        }
    }

    /// Select the palette for the active mode.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Dark => Self::dark(),
            Mode::Light => Self::light(),
        }
    }

    /// egui visuals for the active mode, with panel and window fills
    /// following the palette background.
    pub fn visuals(&self, mode: Mode) -> egui::Visuals {
        let mut visuals = match mode {
            Mode::Dark => egui::Visuals::dark(),
            Mode::Light => egui::Visuals::light(),
        };
        visuals.panel_fill = self.background;
        visuals.window_fill = self.stage_fill;
        visuals.override_text_color = Some(self.text);
        visuals
    }
}
