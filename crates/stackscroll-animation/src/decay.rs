//! Decay curves: motion from an initial velocity to rest, with no target.

use crate::FlingSpline;

const GRAVITY_EARTH: f32 = 9.80665;
const INCHES_PER_METER: f32 = 39.37;
/// `(ln(0.78) / ln(0.9)).abs()`, the Android `Scroller` deceleration rate.
const DECELERATION_RATE: f64 = 2.358_201_6;

/// Default scroll friction (Android `ViewConfiguration.getScrollFriction`).
pub const DEFAULT_FRICTION: f32 = 0.015;

fn physical_coefficient(density: f32) -> f32 {
    GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * 0.84
}

/// A decelerating motion parameterised only by its initial velocity.
///
/// Positions are relative to the start of the motion, so the range is
/// unbounded; clamping is the consumer's business.
pub trait DecayCurve {
    /// Speed (units/sec) below which the motion counts as settled.
    fn abs_velocity_threshold(&self) -> f32 {
        0.0
    }

    /// Total duration of the motion started with `velocity`.
    fn duration_nanos(&self, velocity: f32) -> i64;

    /// Displacement after `play_time_nanos`.
    fn value_at_nanos(&self, play_time_nanos: i64, velocity: f32) -> f32;

    /// Instantaneous velocity (units/sec) after `play_time_nanos`.
    fn velocity_at_nanos(&self, play_time_nanos: i64, velocity: f32) -> f32;

    /// Displacement at rest.
    fn target_value(&self, velocity: f32) -> f32;
}

/// Spline-based fling curve matching Android's `Scroller.fling`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingCurve {
    friction: f32,
    physical_coefficient: f32,
}

/// Precomputed duration and distance of one fling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingMotion {
    pub initial_velocity: f32,
    /// Unsigned distance covered by the whole fling.
    pub distance: f32,
    pub duration_ms: i64,
}

impl FlingCurve {
    /// `friction` is the scroll friction coefficient, `density` the display
    /// density (1.0 for mdpi).
    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            physical_coefficient: physical_coefficient(density),
        }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(DEFAULT_FRICTION, density)
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        FlingSpline::deceleration(velocity, self.friction * self.physical_coefficient)
    }

    pub fn duration_ms(&self, velocity: f32) -> i64 {
        let l = self.spline_deceleration(velocity);
        (1000.0 * (l / (DECELERATION_RATE - 1.0)).exp()) as i64
    }

    pub fn distance(&self, velocity: f32) -> f32 {
        let l = self.spline_deceleration(velocity);
        let scale = (DECELERATION_RATE / (DECELERATION_RATE - 1.0) * l).exp();
        (self.friction as f64 * self.physical_coefficient as f64 * scale) as f32
    }

    pub fn motion(&self, velocity: f32) -> FlingMotion {
        FlingMotion {
            initial_velocity: velocity,
            distance: self.distance(velocity),
            duration_ms: self.duration_ms(velocity),
        }
    }
}

impl FlingMotion {
    fn progress(&self, time_ms: i64) -> f32 {
        if self.duration_ms > 0 {
            time_ms as f32 / self.duration_ms as f32
        } else {
            1.0
        }
    }

    /// Signed displacement `time_ms` into the fling.
    pub fn position(&self, time_ms: i64) -> f32 {
        let sample = FlingSpline::sample(self.progress(time_ms));
        self.distance * self.initial_velocity.signum() * sample.distance
    }

    /// Signed velocity (units/sec) `time_ms` into the fling.
    pub fn velocity(&self, time_ms: i64) -> f32 {
        if self.duration_ms <= 0 {
            return 0.0;
        }
        let sample = FlingSpline::sample(self.progress(time_ms));
        sample.velocity * self.initial_velocity.signum() * self.distance
            / self.duration_ms as f32
            * 1000.0
    }

    pub fn is_finished(&self, time_ms: i64) -> bool {
        time_ms >= self.duration_ms
    }
}

impl DecayCurve for FlingCurve {
    fn duration_nanos(&self, velocity: f32) -> i64 {
        self.duration_ms(velocity).saturating_mul(1_000_000)
    }

    fn value_at_nanos(&self, play_time_nanos: i64, velocity: f32) -> f32 {
        self.motion(velocity).position(play_time_nanos / 1_000_000)
    }

    fn velocity_at_nanos(&self, play_time_nanos: i64, velocity: f32) -> f32 {
        self.motion(velocity).velocity(play_time_nanos / 1_000_000)
    }

    fn target_value(&self, velocity: f32) -> f32 {
        self.distance(velocity) * velocity.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faster_flings_last_longer_and_travel_further() {
        let curve = FlingCurve::with_density(2.0);
        let slow = curve.motion(2_000.0);
        let fast = curve.motion(8_000.0);
        assert!(slow.duration_ms > 0);
        assert!(slow.distance > 0.0);
        assert!(fast.duration_ms > slow.duration_ms);
        assert!(fast.distance > slow.distance);
    }

    #[test]
    fn starts_at_rest_and_ends_at_target() {
        let curve = FlingCurve::with_density(1.0);
        let velocity = 5_000.0;
        assert!(curve.value_at_nanos(0, velocity).abs() < 1.0);

        let end = curve.duration_nanos(velocity);
        let target = curve.target_value(velocity);
        let reached = curve.value_at_nanos(end, velocity);
        assert!(
            (reached - target).abs() < 1.0,
            "reached {reached}, target {target}"
        );
    }

    #[test]
    fn negative_velocity_moves_backwards() {
        let motion = FlingCurve::with_density(2.0).motion(-5_000.0);
        assert!(motion.position(motion.duration_ms / 2) < 0.0);
        assert!(motion.velocity(motion.duration_ms / 4) < 0.0);
    }

    #[test]
    fn velocity_decays_to_zero() {
        let motion = FlingCurve::with_density(1.0).motion(4_000.0);
        let early = motion.velocity(10);
        let late = motion.velocity(motion.duration_ms - 10);
        assert!(early > late);
        assert_eq!(motion.velocity(motion.duration_ms), 0.0);
        assert!(motion.is_finished(motion.duration_ms));
        assert!(!motion.is_finished(motion.duration_ms - 1));
    }
}
