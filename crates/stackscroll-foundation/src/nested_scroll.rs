//! The nested-scroll protocol between the container and its descendants.

use crate::{InputType, PointerEvent, PointerEventKind};
use stackscroll_ui_graphics::{IntSize, Point};
use stackscroll_ui_layout::{Axis, PanelSlot};
use std::rc::Rc;

/// A scrollable entity inside a panel.
///
/// Implementers own their scroll position behind interior mutability, the
/// same way a host view does; the container only asks and nudges.
pub trait ScrollTarget {
    /// Whether this target can scroll further along `axis` in the direction
    /// of `direction` (positive reveals content past the trailing edge).
    fn can_scroll(&self, axis: Axis, direction: i32) -> bool;

    /// Scrolls by `delta` along `axis`, clamping at its own limits.
    fn scroll_by(&self, axis: Axis, delta: i32);
}

/// A host view occupying one slot of the stack.
pub trait Panel {
    /// Size measured by the host's layout pass.
    fn measured_size(&self) -> IntSize;

    /// Deepest scrollable along `axis` under `local`, a point in this panel's
    /// coordinates.
    fn scroll_target_at(&self, local: Point, axis: Axis) -> Option<Rc<dyn ScrollTarget>>;

    /// Deepest scrollable along `axis` that should receive deltas of the
    /// sign of `delta` once scrolling is handed to this panel.
    fn find_scroll_target(&self, axis: Axis, delta: i32) -> Option<Rc<dyn ScrollTarget>>;
}

/// Compares two targets by identity.
pub fn same_target(a: &Rc<dyn ScrollTarget>, b: &Rc<dyn ScrollTarget>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Everything the host delivers to a nested-scroll container.
///
/// Pointer entry points return whether the container claimed the gesture.
/// Nested-scroll entry points are invoked by a descendant scrollable around
/// its own scrolling.
pub trait InputSource {
    fn on_pointer_down(&mut self, event: &PointerEvent) -> bool;

    fn on_pointer_move(&mut self, event: &PointerEvent) -> bool;

    fn on_pointer_up(&mut self, event: &PointerEvent) -> bool;

    fn on_pointer_cancel(&mut self, event: &PointerEvent) -> bool;

    /// Routes `event` to the matching pointer entry point.
    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_pointer_down(event),
            PointerEventKind::Move => self.on_pointer_move(event),
            PointerEventKind::Up => self.on_pointer_up(event),
            PointerEventKind::Cancel => self.on_pointer_cancel(event),
        }
    }

    /// A descendant is about to start scrolling along `axis`. Returning
    /// false opts this container out of the following notifications.
    fn on_start_nested_scroll(&mut self, axis: Axis, input_type: InputType) -> bool;

    /// The descendant `target`, living in panel `child`, started scrolling.
    fn on_nested_scroll_accepted(
        &mut self,
        child: PanelSlot,
        target: Rc<dyn ScrollTarget>,
        input_type: InputType,
    );

    /// First refusal of `delta`. Returns the part consumed by the container;
    /// the descendant applies only the remainder.
    fn on_nested_pre_scroll(&mut self, delta: i32, input_type: InputType) -> i32;

    /// The descendant scrolled `consumed` and left `unconsumed`.
    fn on_nested_scroll(&mut self, consumed: i32, unconsumed: i32, input_type: InputType);

    /// The descendant is about to fling with `velocity`. Returns true when
    /// the fling has been taken over.
    fn on_nested_pre_fling(&mut self, velocity: f32) -> bool;

    fn on_stop_nested_scroll(&mut self, input_type: InputType);
}
