//! Fling deceleration curves for stackscroll
//!
//! The default curve reproduces the Android `Scroller` fling: a spline sampled
//! over normalised time, scaled by a friction- and density-derived distance.

mod decay;
mod spline;

pub use decay::*;
pub use spline::{FlingSpline, SplineSample};
