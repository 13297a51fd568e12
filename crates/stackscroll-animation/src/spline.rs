//! Lookup tables for the fling spline.

use std::sync::LazyLock;

const INFLECTION: f32 = 0.35;
const START_TENSION: f32 = 0.5;
const END_TENSION: f32 = 1.0;
const P1: f32 = START_TENSION * INFLECTION;
const P2: f32 = 1.0 - END_TENSION * (1.0 - INFLECTION);

const NB_SAMPLES: usize = 100;

/// Bisection never needs more than this many halvings to reach 1e-5 in f32.
const MAX_BISECTIONS: usize = 64;

static DISTANCE_TABLE: LazyLock<[f32; NB_SAMPLES + 1]> = LazyLock::new(|| {
    let mut table = [0.0f32; NB_SAMPLES + 1];
    let mut low = 0.0f32;
    for (i, slot) in table.iter_mut().take(NB_SAMPLES).enumerate() {
        let alpha = i as f32 / NB_SAMPLES as f32;
        let x = solve_for(alpha, &mut low, P1, P2);
        *slot = cubic(x, START_TENSION, END_TENSION);
    }
    table[NB_SAMPLES] = 1.0;
    table
});

/// Cubic bezier through (0,0) and (1,1) with inner control values `a`, `b`.
#[inline]
fn cubic(t: f32, a: f32, b: f32) -> f32 {
    3.0 * t * (1.0 - t) * ((1.0 - t) * a + t * b) + t * t * t
}

/// Finds `t` in `[low, 1]` with `cubic(t, a, b) == alpha`. `low` is advanced
/// so successive, increasing `alpha` values resume where the last one ended.
fn solve_for(alpha: f32, low: &mut f32, a: f32, b: f32) -> f32 {
    let mut high = 1.0f32;
    let mut mid = *low;
    for _ in 0..MAX_BISECTIONS {
        mid = *low + (high - *low) / 2.0;
        let value = cubic(mid, a, b);
        if (value - alpha).abs() < 1e-5 {
            break;
        }
        if value > alpha {
            high = mid;
        } else {
            *low = mid;
        }
    }
    mid
}

/// Distance and velocity coefficients at one point of the spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSample {
    /// Fraction of the total fling distance covered, 0.0 to 1.0.
    pub distance: f32,
    /// Slope of the distance curve at this point.
    pub velocity: f32,
}

/// The Android `Scroller` fling spline.
pub struct FlingSpline;

impl FlingSpline {
    /// Samples the spline at normalised time `t` (clamped to 0.0..=1.0).
    pub fn sample(t: f32) -> SplineSample {
        let t = t.clamp(0.0, 1.0);
        let index = (NB_SAMPLES as f32 * t) as usize;
        if index >= NB_SAMPLES {
            return SplineSample {
                distance: 1.0,
                velocity: 0.0,
            };
        }

        let t_inf = index as f32 / NB_SAMPLES as f32;
        let t_sup = (index + 1) as f32 / NB_SAMPLES as f32;
        let d_inf = DISTANCE_TABLE[index];
        let d_sup = DISTANCE_TABLE[index + 1];
        let velocity = (d_sup - d_inf) / (t_sup - t_inf);
        SplineSample {
            distance: d_inf + (t - t_inf) * velocity,
            velocity,
        }
    }

    /// Natural log of the deceleration for `velocity` under `friction`.
    pub fn deceleration(velocity: f32, friction: f32) -> f64 {
        (INFLECTION as f64 * velocity.abs() as f64 / friction as f64).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spline_endpoints() {
        assert!(FlingSpline::sample(0.0).distance.abs() < 0.01);
        assert!((FlingSpline::sample(1.0).distance - 1.0).abs() < 0.01);
        assert_eq!(FlingSpline::sample(1.0).velocity, 0.0);
    }

    #[test]
    fn spline_is_monotonic() {
        let mut previous = 0.0;
        for i in 0..=200 {
            let sample = FlingSpline::sample(i as f32 / 200.0);
            assert!(sample.distance >= previous);
            previous = sample.distance;
        }
    }

    #[test]
    fn spline_decelerates() {
        let early = FlingSpline::sample(0.05).velocity;
        let late = FlingSpline::sample(0.9).velocity;
        assert!(early > late, "early {early} should exceed late {late}");
    }
}
