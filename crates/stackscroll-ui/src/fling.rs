//! Frame-driven fling simulation.
//!
//! The simulator only turns elapsed frame time into integer deltas along a
//! decay curve; where those deltas go is decided by the dispatcher.

use stackscroll_animation::{DecayCurve, FlingCurve};
use stackscroll_foundation::ScrollConfig;

/// A running fling, started from a release velocity in px/sec.
#[derive(Debug, Clone)]
pub struct FlingSimulator<C = FlingCurve> {
    curve: C,
    velocity: f32,
    duration_nanos: i64,
    /// Frame time of the first tick; deltas are measured from it.
    start_frame_nanos: Option<u64>,
    last_position: i32,
    finished: bool,
}

impl FlingSimulator<FlingCurve> {
    /// Starts a fling with the friction and density of `config`.
    pub fn new(config: &ScrollConfig, velocity: f32) -> Self {
        Self::with_curve(
            FlingCurve::new(config.friction, config.density),
            velocity,
            config.min_fling_velocity,
        )
    }
}

impl<C: DecayCurve> FlingSimulator<C> {
    /// Starts a fling along `curve`. A velocity slower than `min_velocity`
    /// (or not finite) yields an already finished simulator.
    pub fn with_curve(curve: C, velocity: f32, min_velocity: f32) -> Self {
        let finished = !velocity.is_finite() || velocity.abs() < min_velocity || velocity == 0.0;
        let duration_nanos = if finished {
            0
        } else {
            curve.duration_nanos(velocity)
        };
        Self {
            curve,
            velocity,
            duration_nanos,
            start_frame_nanos: None,
            last_position: 0,
            finished,
        }
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Stops the fling; later ticks produce nothing.
    pub fn cancel(&mut self) {
        self.finished = true;
    }

    /// Displacement covered so far.
    pub fn position(&self) -> i32 {
        self.last_position
    }

    /// Advances to `frame_time_nanos` and returns the delta since the
    /// previous tick, or `None` once the fling has finished.
    ///
    /// The first tick anchors the timeline and yields 0. The tick that
    /// reaches the end of the curve lands exactly on its rest position.
    pub fn step(&mut self, frame_time_nanos: u64) -> Option<i32> {
        if self.finished {
            return None;
        }
        let start = *self.start_frame_nanos.get_or_insert(frame_time_nanos);
        let play_time = frame_time_nanos.saturating_sub(start).min(i64::MAX as u64) as i64;

        let settled = play_time >= self.duration_nanos
            || self.curve.velocity_at_nanos(play_time, self.velocity).abs()
                < self.curve.abs_velocity_threshold();
        let position = if settled {
            self.finished = true;
            self.curve.target_value(self.velocity)
        } else {
            self.curve.value_at_nanos(play_time, self.velocity)
        }
        .round() as i32;

        let delta = position - self.last_position;
        self.last_position = position;
        Some(delta)
    }
}
