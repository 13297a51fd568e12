//! Per-gesture pointer bookkeeping.

use crate::FlingSimulator;
use stackscroll_foundation::VelocityTracker1D;

/// Pointer state of the current gesture plus the fling it may leave behind.
///
/// The velocity tracker is created fresh on pointer down and taken on
/// release, so no samples leak from one gesture into the next.
#[derive(Debug, Default)]
pub struct GestureState {
    /// Last axis position seen, in whole pixels.
    pub last_position: i32,
    velocity: Option<VelocityTracker1D>,
    /// Whether the container took over the gesture from its descendants.
    pub claimed: bool,
    fling: Option<FlingSimulator>,
}

impl GestureState {
    /// Starts tracking a new gesture at `position`. Any running fling is
    /// cancelled; returns true if one was.
    pub fn begin(&mut self, position: f32, uptime_ms: i64) -> bool {
        let cancelled = self.cancel_fling();
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(uptime_ms, position);
        self.velocity = Some(tracker);
        self.last_position = position as i32;
        self.claimed = false;
        cancelled
    }

    /// Whether a pointer is down.
    pub fn is_tracking(&self) -> bool {
        self.velocity.is_some()
    }

    /// Feeds one movement sample to the velocity tracker.
    pub fn record(&mut self, position: f32, uptime_ms: i64) {
        if let Some(tracker) = self.velocity.as_mut() {
            tracker.add_data_point(uptime_ms, position);
        }
    }

    /// Ends the gesture and returns its release velocity (px/sec along the
    /// pointer's axis, capped to `max_velocity`).
    pub fn finish(&mut self, max_velocity: f32) -> f32 {
        let velocity = self
            .velocity
            .take()
            .map_or(0.0, |tracker| tracker.calculate_velocity_with_max(max_velocity));
        self.claimed = false;
        velocity
    }

    pub fn fling(&self) -> Option<&FlingSimulator> {
        self.fling.as_ref()
    }

    pub fn fling_mut(&mut self) -> Option<&mut FlingSimulator> {
        self.fling.as_mut()
    }

    /// Installs `fling` unless it is already finished.
    pub fn start_fling(&mut self, fling: FlingSimulator) -> bool {
        self.cancel_fling();
        if fling.is_finished() {
            return false;
        }
        self.fling = Some(fling);
        true
    }

    /// Drops the fling once it has run out.
    pub fn clear_finished_fling(&mut self) {
        if self.fling.as_ref().is_some_and(FlingSimulator::is_finished) {
            self.fling = None;
        }
    }

    pub fn cancel_fling(&mut self) -> bool {
        match self.fling.take() {
            Some(mut fling) => {
                fling.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_flinging(&self) -> bool {
        self.fling.as_ref().is_some_and(|fling| !fling.is_finished())
    }
}
