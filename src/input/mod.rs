//! Interaction capability detection and the per-capability constants.
//!
//! One animator serves both pointer-fine and touch screens; the
//! differences (label lift, period tuning, overlay dismissal) are
//! carried here as an InteractionProfile selected once at startup.

pub mod touch;

/// Screens narrower than this are treated as touch devices.
pub const NARROW_SCREEN_PT: f32 = 600.0;

/// How the user points at things.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Mouse or trackpad: hover exists, overlay hides on pointer-leave.
    PointerFine,
    /// Touch screen: no hover, overlay hides on a tap outside any body.
    Touch,
}

/// Detect the capability once, at first frame: any live touch or a
/// narrow window selects Touch.
pub fn detect_capability(ctx: &egui::Context) -> Capability {
    let touching = ctx.input(|i| i.any_touches());
    if touching || ctx.screen_rect().width() < NARROW_SCREEN_PT {
        Capability::Touch
    } else {
        Capability::PointerFine
    }
}

/// Tuning constants for one capability.
#[derive(Debug, Clone, Copy)]
pub struct InteractionProfile {
    pub capability: Capability,
    /// Vertical offset of each label above its body, px.
    pub label_lift: f32,
    /// Offset of the overlay from the pointer, px on each axis.
    pub overlay_offset: f32,
    /// Added to every body's period on touch screens, seconds.
    pub period_bias_secs: f32,
}

impl InteractionProfile {
    pub fn for_capability(capability: Capability) -> Self {
        match capability {
            Capability::PointerFine => Self {
                capability,
                label_lift: 20.0,
                overlay_offset: 10.0,
                period_bias_secs: 0.0,
            },
            Capability::Touch => Self {
                capability,
                label_lift: 15.0,
                overlay_offset: 10.0,
                period_bias_secs: 10.0,
            },
        }
    }
}
