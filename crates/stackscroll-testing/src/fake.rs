//! In-memory stand-ins for host views.

use stackscroll_foundation::{Panel, ScrollTarget};
use stackscroll_ui_graphics::{IntRect, IntSize, Point};
use stackscroll_ui_layout::Axis;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A scrollable with a position in `[0, max]` along one axis.
pub struct FakeScrollTarget {
    name: &'static str,
    axis: Axis,
    max: i32,
    position: Cell<i32>,
    requested: RefCell<Vec<i32>>,
}

impl FakeScrollTarget {
    pub fn new(name: &'static str, axis: Axis, max: i32) -> Rc<Self> {
        Rc::new(Self {
            name,
            axis,
            max,
            position: Cell::new(0),
            requested: RefCell::new(Vec::new()),
        })
    }

    pub fn vertical(name: &'static str, max: i32) -> Rc<Self> {
        Self::new(name, Axis::Vertical, max)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn position(&self) -> i32 {
        self.position.get()
    }

    pub fn set_position(&self, position: i32) {
        self.position.set(position.clamp(0, self.max));
    }

    pub fn at_end(&self) -> bool {
        self.position.get() == self.max
    }

    /// Every delta passed to `scroll_by`, in order.
    pub fn requested_deltas(&self) -> Vec<i32> {
        self.requested.borrow().clone()
    }

    /// Sum of requested deltas, before clamping.
    pub fn total_requested(&self) -> i32 {
        self.requested.borrow().iter().sum()
    }

    /// Upcasts for APIs that take `Rc<dyn ScrollTarget>`.
    pub fn as_target(self: &Rc<Self>) -> Rc<dyn ScrollTarget> {
        self.clone()
    }
}

impl ScrollTarget for FakeScrollTarget {
    fn can_scroll(&self, axis: Axis, direction: i32) -> bool {
        if axis != self.axis {
            return false;
        }
        match direction.signum() {
            1 => self.position.get() < self.max,
            -1 => self.position.get() > 0,
            _ => true,
        }
    }

    fn scroll_by(&self, axis: Axis, delta: i32) {
        if axis != self.axis {
            return;
        }
        self.requested.borrow_mut().push(delta);
        self.set_position(self.position.get().saturating_add(delta));
    }
}

/// A panel of fixed size holding scrollables in local regions.
pub struct FakePanel {
    size: Cell<IntSize>,
    regions: RefCell<Vec<(IntRect, Rc<dyn ScrollTarget>)>>,
}

impl FakePanel {
    pub fn new(size: IntSize) -> Rc<Self> {
        Rc::new(Self {
            size: Cell::new(size),
            regions: RefCell::new(Vec::new()),
        })
    }

    /// A panel whose whole area is covered by `target`.
    pub fn filled_with(size: IntSize, target: Rc<dyn ScrollTarget>) -> Rc<Self> {
        let panel = Self::new(size);
        panel.add_region(IntRect::new(0, 0, size.width, size.height), target);
        panel
    }

    pub fn add_region(&self, rect: IntRect, target: Rc<dyn ScrollTarget>) {
        self.regions.borrow_mut().push((rect, target));
    }

    /// Simulates a re-measure by the host.
    pub fn resize(&self, size: IntSize) {
        self.size.set(size);
    }

    pub fn as_panel(self: &Rc<Self>) -> Rc<dyn Panel> {
        self.clone()
    }
}

impl Panel for FakePanel {
    fn measured_size(&self) -> IntSize {
        self.size.get()
    }

    fn scroll_target_at(&self, local: Point, _axis: Axis) -> Option<Rc<dyn ScrollTarget>> {
        // Later regions are drawn on top, so search from the back.
        self.regions
            .borrow()
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(local))
            .map(|(_, target)| target.clone())
    }

    fn find_scroll_target(&self, _axis: Axis, _delta: i32) -> Option<Rc<dyn ScrollTarget>> {
        self.regions
            .borrow()
            .first()
            .map(|(_, target)| target.clone())
    }
}
