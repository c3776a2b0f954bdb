//! Tap and long-press recognition for touch screens.
//!
//! The page only needs two gestures: a tap (show the overlay on a body,
//! hide it anywhere else) and a long press (also show). Drags fall out
//! as no gesture.

use egui::Pos2;
use std::time::Instant;

/// Recognized gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Quick touch and release at position
    Tap(Pos2),
    /// Hold longer than the threshold at position
    LongPress(Pos2),
    /// Nothing recognized (drag, or release without a press)
    None,
}

/// Tap/long-press state machine over raw press and release events.
pub struct TapTracker {
    /// Where and when the current press started
    press: Option<(Pos2, Instant)>,
    /// Furthest the finger moved during the press
    drag_distance: f32,
    /// Long press threshold in milliseconds
    long_press_ms: u64,
    /// Maximum movement still counting as a tap, px
    tap_slop: f32,
}

impl TapTracker {
    pub fn new() -> Self {
        Self {
            press: None,
            drag_distance: 0.0,
            long_press_ms: 500,
            tap_slop: 20.0,
        }
    }

    /// Process a press at `pos`
    pub fn press_start(&mut self, pos: Pos2) {
        self.press = Some((pos, Instant::now()));
        self.drag_distance = 0.0;
    }

    /// Track movement while pressed
    pub fn press_move(&mut self, pos: Pos2) {
        if let Some((start, _)) = self.press {
            self.drag_distance = self.drag_distance.max(start.distance(pos));
        }
    }

    /// Process the release. Returns the recognized gesture.
    pub fn press_end(&mut self, pos: Pos2) -> Gesture {
        let (start, began) = match self.press.take() {
            Some(press) => press,
            None => return Gesture::None,
        };

        let duration = began.elapsed();
        let dist = self.drag_distance.max(start.distance(pos));
        if dist >= self.tap_slop {
            return Gesture::None;
        }

        if duration.as_millis() as u64 >= self.long_press_ms {
            Gesture::LongPress(pos)
        } else {
            Gesture::Tap(pos)
        }
    }
}

impl Default for TapTracker {
    fn default() -> Self {
        Self::new()
    }
}
