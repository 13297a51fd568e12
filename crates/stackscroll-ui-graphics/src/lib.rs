//! Pure geometry for stackscroll
//!
//! Pointer positions are fractional, while panel extents and scroll offsets
//! are whole pixels.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{IntRect, IntSize, Point};
}
