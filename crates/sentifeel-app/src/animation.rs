//! Eased confidence value for the animated confidence bar

use std::time::{Duration, Instant};

/// Time for the bar to travel to a new target
pub const CONFIDENCE_ANIMATION: Duration = Duration::from_millis(500);

/// Confidence value shown by the bar, easing (cubic ease-out) from the
/// previously displayed value to the latest target.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceAnimation {
    from: f64,
    to: f64,
    displayed: f64,
    started_at: Option<Instant>,
    duration: Duration,
}

impl Default for ConfidenceAnimation {
    fn default() -> Self {
        Self::new(CONFIDENCE_ANIMATION)
    }
}

impl ConfidenceAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            displayed: 0.0,
            started_at: None,
            duration,
        }
    }

    /// Value to draw, always within `[0, 1]`
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start easing toward `target` from wherever the bar currently is
    pub fn retarget(&mut self, target: f64, now: Instant) {
        let target = target.clamp(0.0, 1.0);
        if (target - self.displayed).abs() < f64::EPSILON {
            self.snap_to(target);
            return;
        }
        self.from = self.displayed;
        self.to = target;
        self.started_at = Some(now);
    }

    /// Jump straight to `target` (animations disabled)
    pub fn snap_to(&mut self, target: f64) {
        let target = target.clamp(0.0, 1.0);
        self.from = target;
        self.to = target;
        self.displayed = target;
        self.started_at = None;
    }

    /// Advance the animation to `now`
    pub fn tick(&mut self, now: Instant) {
        let Some(started_at) = self.started_at else {
            return;
        };
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.snap_to(self.to);
            return;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = 1.0 - (1.0 - t).powi(3);
        self.displayed = (self.from + (self.to - self.from) * eased).clamp(0.0, 1.0);
    }
}
