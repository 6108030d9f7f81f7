//! Cosmetic phase progress: how far through the current phase the clock is.
//!
//! Nothing here feeds back into the session state machine.

use std::time::{Duration, Instant};

use crate::session::{SessionRunner, Status};

/// How long the clock stays highlighted after a phase change
pub const PULSE: Duration = Duration::from_millis(400);

/// Progress through the current phase as a ratio in `0.0..=1.0`.
///
/// `since_second` is the time elapsed since the last countdown second was
/// delivered; it smooths the bar between whole seconds while running.
pub fn phase_progress(runner: &SessionRunner, since_second: Duration) -> f64 {
    let total = f64::from(runner.config().phase_secs(runner.phase()));
    let elapsed = total - f64::from(runner.time_left());
    let ratio = match runner.status() {
        Status::Idle => 0.0,
        Status::Paused => elapsed / total,
        Status::Running => (elapsed + since_second.as_secs_f64().min(1.0)) / total,
        Status::Completed => 1.0,
    };
    ratio.clamp(0.0, 1.0)
}

/// Tracks the sub-second position of the countdown and the phase-change pulse
#[derive(Debug, Clone, Default)]
pub struct PhaseClock {
    last_second: Option<Instant>,
    pulse_until: Option<Instant>,
}

impl PhaseClock {
    pub fn mark_second(&mut self, now: Instant) {
        self.last_second = Some(now);
    }

    pub fn clear(&mut self) {
        self.last_second = None;
    }

    pub fn since_second(&self, now: Instant) -> Duration {
        self.last_second
            .map(|t| now.saturating_duration_since(t))
            .unwrap_or_default()
    }

    pub fn pulse(&mut self, now: Instant) {
        self.pulse_until = Some(now + PULSE);
    }

    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.pulse_until.is_some_and(|until| now < until)
    }
}
