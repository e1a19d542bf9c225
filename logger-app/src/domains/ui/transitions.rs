//! Eased transitions for programmatic scrolling.
//!
//! A [`Transition`] interpolates a scroll offset over wall-clock time; the
//! owner samples it on frame pulses and drops it once complete.

use std::time::{Duration, Instant};

/// Easing curves applied to a transition's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingFunction {
    Linear,
    EaseOutCubic,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A time-based interpolation between two scroll offsets.
#[derive(Debug, Clone)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: EasingFunction,
}

impl Transition {
    pub fn new(
        from: f32,
        to: f32,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            started_at: Instant::now(),
            duration,
            easing,
        }
    }

    /// Final offset this transition settles on.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Interpolated offset at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}
