//! Scroll bounds of the panel stack.
//!
//! The content origin is the scroll origin: offset 0 shows `Content` flush
//! with the container's leading edge, negative offsets reveal `Previous` and
//! positive offsets reveal `Next`.

/// Main-axis extents of the three panels. `None` marks an absent panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelExtents {
    pub previous: Option<i32>,
    pub content: Option<i32>,
    pub next: Option<i32>,
}

/// Settled and overscroll-extended scroll range of the container.
///
/// `min_overscroll <= min_scroll <= 0` always holds. `max_scroll` is kept
/// raw: it is negative when `Content` and `Next` together are shorter than
/// the container.
///
/// The offset queries below ([`in_overscroll_band`](Self::in_overscroll_band),
/// [`can_scroll`](Self::can_scroll), [`clamp_scroll_by`](Self::clamp_scroll_by))
/// floor both upper bounds at 0 instead of using the raw values. For a short
/// stack with a forward allowance the raw band `(max_scroll, max_overscroll]`
/// would contain offset 0 and let the container drift past the content
/// origin; with the floor the upper band is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min_scroll: i32,
    pub max_scroll: i32,
    pub min_overscroll: i32,
    pub max_overscroll: i32,
}

/// Derives the bounds for one layout pass.
///
/// `overscroll_min` and `overscroll_max` are non-negative allowances added
/// beyond the settled range; builders reject negative values before they
/// reach this point.
pub fn compute_bounds(
    extents: PanelExtents,
    container_extent: i32,
    overscroll_min: i32,
    overscroll_max: i32,
) -> Bounds {
    let min_scroll = extents.previous.map_or(0, |extent| -extent);
    // Without a Next panel nothing can be revealed past the content origin.
    let max_scroll = extents.next.map_or(0, |next| {
        extents.content.unwrap_or(0) + next - container_extent
    });

    Bounds {
        min_scroll,
        max_scroll,
        min_overscroll: min_scroll - overscroll_min,
        max_overscroll: max_scroll + overscroll_max,
    }
}

/// Constrains `value` to `[min, max]`, checking the lower bound first.
///
/// Unlike [`i32::clamp`] this never panics when `min > max`, which happens
/// with a raw negative `max_scroll`.
#[inline]
pub fn constrain(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

impl Bounds {
    pub const ZERO: Bounds = Bounds {
        min_scroll: 0,
        max_scroll: 0,
        min_overscroll: 0,
        max_overscroll: 0,
    };

    /// Upper settled bound as seen by offsets: a negative raw `max_scroll`
    /// means nothing past the content origin can be revealed.
    #[inline]
    fn effective_max_scroll(&self) -> i32 {
        self.max_scroll.max(0)
    }

    #[inline]
    fn effective_max_overscroll(&self) -> i32 {
        self.max_overscroll.max(0)
    }

    /// Whether `offset` sits in the elastic band past a settled bound:
    /// `[min_overscroll, min_scroll)` or `(max_scroll, max_overscroll]`.
    pub fn in_overscroll_band(&self, offset: i32) -> bool {
        (self.min_overscroll..self.min_scroll).contains(&offset)
            || (offset > self.effective_max_scroll()
                && offset <= self.effective_max_overscroll())
    }

    /// Whether the container can still move from `offset` in the direction
    /// of `direction`. A zero direction is always satisfiable.
    pub fn can_scroll(&self, offset: i32, direction: i32) -> bool {
        match direction.signum() {
            1 => offset < self.effective_max_overscroll(),
            -1 => offset > self.min_overscroll,
            _ => true,
        }
    }

    /// Returns the offset reached by scrolling `delta` from `offset`.
    ///
    /// A single step never crosses the content origin and never passes a
    /// settled bound into the overscroll band (or back out of it): it stops
    /// at the boundary, and the next step continues from there.
    pub fn clamp_scroll_by(&self, offset: i32, delta: i32) -> i32 {
        let target = offset.saturating_add(delta);
        let max_scroll = self.effective_max_scroll();
        let max_overscroll = self.effective_max_overscroll();
        if offset > 0 {
            if offset > max_scroll {
                constrain(target, max_scroll, max_overscroll)
            } else if offset < max_scroll {
                constrain(target, 0, max_scroll)
            } else {
                constrain(target, 0, max_overscroll)
            }
        } else if offset < 0 {
            if offset > self.min_scroll {
                constrain(target, self.min_scroll, 0)
            } else if offset < self.min_scroll {
                constrain(target, self.min_overscroll, self.min_scroll)
            } else {
                constrain(target, self.min_overscroll, 0)
            }
        } else {
            constrain(target, self.min_scroll, max_scroll)
        }
    }
}

#[cfg(test)]
#[path = "tests/bounds_tests.rs"]
mod tests;
