//! Shared gesture constants.
//!
//! Values are in logical pixels and seconds. Hosts on high-density screens
//! pass their density through [`ScrollConfig`](crate::ScrollConfig) rather
//! than scaling these by hand.

/// Maximum fling velocity in pixels per second.
///
/// Matches Android's default maximum fling velocity (ViewConfiguration) on a
/// baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Flings slower than this (pixels per second) finish without moving.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Display density assumed when the host does not report one.
pub const DEFAULT_DENSITY: f32 = 1.0;
