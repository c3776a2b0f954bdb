//! Orbit animation: per-body angular phase and parametric positions.
//!
//! - `BodyMotion`: fixed-step phase advance, tuned for an assumed 60 fps
//! - `OrbitTask` / `OrbitHandle`: one cancellable animation task per body
//! - `Animator`: steps every active task once per rendered frame
//!
//! Phase is advanced by a constant per frame, not by wall-clock time, so
//! real orbital speed tracks the display refresh rate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Display refresh rate the phase step is tuned for.
pub const ASSUMED_FPS: f32 = 60.0;

/// Angular state of one body on its elliptical path.
#[derive(Debug, Clone)]
pub struct BodyMotion {
    /// Current phase in degrees. Only ever increases; trigonometric
    /// periodicity handles the wrap.
    pub phase_deg: f32,
    /// Horizontal orbit radius (half the container width).
    pub radius_x: f32,
    /// Vertical orbit radius (half the container height).
    pub radius_y: f32,
    /// Seconds per full revolution at the assumed refresh rate.
    pub period_secs: f32,
}

impl BodyMotion {
    pub fn new(radius_x: f32, radius_y: f32, period_secs: f32) -> Self {
        Self {
            phase_deg: 0.0,
            radius_x,
            radius_y,
            period_secs,
        }
    }

    /// Advance one display frame: 360 / period / 60 degrees.
    pub fn advance_frame(&mut self) {
        self.phase_deg += 360.0 / self.period_secs / ASSUMED_FPS;
    }

    /// Offset from the orbit center at the current phase, recomputed
    /// from the phase every frame rather than accumulated.
    pub fn position(&self) -> (f32, f32) {
        let rad = self.phase_deg.to_radians();
        (self.radius_x * rad.cos(), self.radius_y * rad.sin())
    }

    /// Label anchor: same x as the body, lifted above it.
    pub fn label_anchor(&self, lift: f32) -> (f32, f32) {
        let (x, y) = self.position();
        (x, y - lift)
    }
}

/// One body's animation task. The active flag is shared with its
/// handles so teardown stops future stepping.
pub struct OrbitTask {
    pub body: String,
    pub motion: BodyMotion,
    active: Arc<AtomicBool>,
}

impl OrbitTask {
    pub fn new(body: impl Into<String>, motion: BodyMotion) -> Self {
        Self {
            body: body.into(),
            motion,
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn handle(&self) -> OrbitHandle {
        OrbitHandle {
            active: Arc::clone(&self.active),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    fn step(&mut self) {
        if self.is_active() {
            self.motion.advance_frame();
        }
    }
}

/// Teardown handle for one orbit task.
#[derive(Clone)]
pub struct OrbitHandle {
    active: Arc<AtomicBool>,
}

impl OrbitHandle {
    pub fn cancel(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

/// All orbit tasks for one scene.
pub struct Animator {
    tasks: Vec<OrbitTask>,
    frames: u64,
}

impl Animator {
    pub fn new(tasks: Vec<OrbitTask>) -> Self {
        Self { tasks, frames: 0 }
    }

    /// Advance every active task by one display frame.
    pub fn step_frame(&mut self) {
        for task in &mut self.tasks {
            task.step();
        }
        self.frames += 1;
    }

    pub fn tasks(&self) -> &[OrbitTask] {
        &self.tasks
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_active()).count()
    }

    /// Cancel every task. Called from page teardown.
    pub fn shutdown(&self) {
        for task in &self.tasks {
            task.handle().cancel();
        }
        log::debug!("cancelled {} orbit tasks", self.tasks.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_revolution_after_period_frames() {
        for period in [10.0, 20.0, 30.0, 80.0] {
            let mut motion = BodyMotion::new(1.0, 1.0, period);
            for _ in 0..(period as usize * 60) {
                motion.advance_frame();
            }
            assert!(
                (motion.phase_deg - 360.0).abs() < 0.05,
                "period {}: phase {} after one revolution",
                period,
                motion.phase_deg
            );
        }
    }

    #[test]
    fn position_stays_on_ellipse() {
        let mut motion = BodyMotion::new(120.0, 95.0, 10.0);
        for _ in 0..500 {
            motion.advance_frame();
            let (x, y) = motion.position();
            let on_ellipse =
                (x / motion.radius_x).powi(2) + (y / motion.radius_y).powi(2);
            assert!(
                (on_ellipse - 1.0).abs() < 1e-3,
                "left the ellipse at phase {}",
                motion.phase_deg
            );
        }
    }

    #[test]
    fn phase_only_increases() {
        let mut motion = BodyMotion::new(50.0, 40.0, 20.0);
        let mut prev = motion.phase_deg;
        for _ in 0..1000 {
            motion.advance_frame();
            assert!(motion.phase_deg > prev);
            prev = motion.phase_deg;
        }
    }

    #[test]
    fn starts_at_phase_zero_on_positive_x_axis() {
        let motion = BodyMotion::new(120.0, 95.0, 30.0);
        let (x, y) = motion.position();
        assert!((x - 120.0).abs() < 1e-6);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn label_rides_above_the_body() {
        let motion = BodyMotion::new(120.0, 95.0, 30.0);
        let (bx, by) = motion.position();
        let (lx, ly) = motion.label_anchor(20.0);
        assert_eq!(lx, bx);
        assert_eq!(ly, by - 20.0);
    }

    #[test]
    fn cancel_stops_one_task_without_touching_others() {
        let mut animator = Animator::new(vec![
            OrbitTask::new("mercury", BodyMotion::new(60.0, 45.0, 10.0)),
            OrbitTask::new("venus", BodyMotion::new(90.0, 70.0, 20.0)),
        ]);
        let cancelled = animator.tasks()[0].handle();
        let running = animator.tasks()[1].handle();
        cancelled.cancel();

        animator.step_frame();
        animator.step_frame();

        assert!(!cancelled.is_active());
        assert!(running.is_active());
        assert_eq!(animator.tasks()[0].motion.phase_deg, 0.0);
        assert!(animator.tasks()[1].motion.phase_deg > 0.0);
        assert_eq!(animator.active_count(), 1);
    }

    #[test]
    fn shutdown_cancels_every_task() {
        let animator = Animator::new(vec![
            OrbitTask::new("earth", BodyMotion::new(120.0, 95.0, 30.0)),
            OrbitTask::new("mars", BodyMotion::new(150.0, 120.0, 40.0)),
        ]);
        let handles: Vec<OrbitHandle> = animator.tasks().iter().map(|t| t.handle()).collect();

        animator.shutdown();

        assert_eq!(animator.active_count(), 0);
        assert!(handles.iter().all(|h| !h.is_active()));
    }

    #[test]
    fn step_frame_counts_frames() {
        let mut animator = Animator::new(Vec::new());
        animator.step_frame();
        animator.step_frame();
        animator.step_frame();
        assert_eq!(animator.frames(), 3);
    }
}
