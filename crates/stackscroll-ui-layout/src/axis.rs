use stackscroll_ui_graphics::{IntRect, IntSize, Point};

/// The axis the container scrolls along.
///
/// Every main-axis computation in the stack is written once and selected by
/// this value; the cross axis only matters for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Panels stacked left to right, scrolling along x.
    Horizontal,

    /// Panels stacked top to bottom, scrolling along y.
    #[default]
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    #[inline]
    pub fn main_extent(self, size: IntSize) -> i32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    #[inline]
    pub fn cross_extent(self, size: IntSize) -> i32 {
        self.cross_axis().main_extent(size)
    }

    /// Leading edge of `rect` along this axis.
    #[inline]
    pub fn main_start(self, rect: IntRect) -> i32 {
        match self {
            Axis::Horizontal => rect.x,
            Axis::Vertical => rect.y,
        }
    }

    /// Component of `point` along this axis.
    #[inline]
    pub fn main_position(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Builds a point that is `main` along this axis and `cross` across it.
    #[inline]
    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main),
        }
    }

    /// Builds a rectangle spanning `[main_start, main_start + main_extent)`
    /// along this axis and `[0, cross_extent)` across it.
    #[inline]
    pub fn rect(self, main_start: i32, main_extent: i32, cross_extent: i32) -> IntRect {
        match self {
            Axis::Horizontal => IntRect::new(main_start, 0, main_extent, cross_extent),
            Axis::Vertical => IntRect::new(0, main_start, cross_extent, main_extent),
        }
    }
}
