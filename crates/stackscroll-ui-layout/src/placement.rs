//! Placement of the three panels along the scroll axis.

use crate::{compute_bounds, Axis, Bounds, PanelExtents, PanelSlot};
use stackscroll_ui_graphics::{IntRect, IntSize, Point};

/// Panel rectangles for one layout pass, in the container's unscrolled
/// coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StackPlacement {
    axis: Axis,
    viewport: IntSize,
    previous: Option<IntRect>,
    content: Option<IntRect>,
    next: Option<IntRect>,
}

impl StackPlacement {
    /// Places panels of the given measured sizes inside `viewport`.
    ///
    /// `Previous` ends at the content origin, `Content` starts at it and
    /// `Next` follows `Content` (or starts at the origin when `Content` is
    /// absent). Every panel spans the viewport's full cross extent.
    pub fn place(
        axis: Axis,
        viewport: IntSize,
        previous: Option<IntSize>,
        content: Option<IntSize>,
        next: Option<IntSize>,
    ) -> Self {
        let cross = axis.cross_extent(viewport);
        let previous = previous.map(|size| {
            let extent = axis.main_extent(size);
            axis.rect(-extent, extent, cross)
        });
        let content = content.map(|size| axis.rect(0, axis.main_extent(size), cross));
        let next_start = content.map_or(0, |rect| {
            axis.main_start(rect) + axis.main_extent(rect.size())
        });
        let next = next.map(|size| axis.rect(next_start, axis.main_extent(size), cross));

        if content.is_none() {
            log::warn!("stack placed without a content panel");
        }

        Self {
            axis,
            viewport,
            previous,
            content,
            next,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn viewport(&self) -> IntSize {
        self.viewport
    }

    /// Main-axis extent of the container.
    pub fn container_extent(&self) -> i32 {
        self.axis.main_extent(self.viewport)
    }

    pub fn get(&self, slot: PanelSlot) -> Option<IntRect> {
        match slot {
            PanelSlot::Previous => self.previous,
            PanelSlot::Content => self.content,
            PanelSlot::Next => self.next,
        }
    }

    /// Placed panels in stack order.
    pub fn iter(&self) -> impl Iterator<Item = (PanelSlot, IntRect)> + '_ {
        PanelSlot::ORDER
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|rect| (slot, rect)))
    }

    pub fn extents(&self) -> PanelExtents {
        let extent = |rect: Option<IntRect>| rect.map(|r| self.axis.main_extent(r.size()));
        PanelExtents {
            previous: extent(self.previous),
            content: extent(self.content),
            next: extent(self.next),
        }
    }

    /// Bounds for this placement with the given overscroll allowances.
    pub fn bounds(&self, overscroll_min: i32, overscroll_max: i32) -> Bounds {
        compute_bounds(
            self.extents(),
            self.container_extent(),
            overscroll_min,
            overscroll_max,
        )
    }

    /// Finds the panel under a point given in viewport coordinates while the
    /// container is scrolled to `offset`. Returns the slot and the point in
    /// that panel's local coordinates.
    pub fn hit_test(&self, position: Point, offset: i32) -> Option<(PanelSlot, Point)> {
        let scrolled = position + self.axis.point(offset as f32, 0.0);
        self.iter()
            .find(|(_, rect)| rect.contains(scrolled))
            .map(|(slot, rect)| (slot, scrolled - Point::new(rect.x as f32, rect.y as f32)))
    }

    /// Whether the panel in `slot` lies entirely inside the viewport when the
    /// container is scrolled to `offset`.
    pub fn is_fully_visible(&self, slot: PanelSlot, offset: i32) -> bool {
        self.get(slot).is_some_and(|rect| {
            let relative = self.axis.main_start(rect) - offset;
            relative >= 0
                && relative + self.axis.main_extent(rect.size()) <= self.container_extent()
        })
    }
}
