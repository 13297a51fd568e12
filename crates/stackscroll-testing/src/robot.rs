//! Robot-style scripting of gestures and frames against a container
//!
//! ```ignore
//! use stackscroll_testing::robot::three_panel_stack;
//!
//! let mut stack = three_panel_stack(Axis::Vertical, (0, 0));
//! let mut robot = stack.robot();
//! robot.drag(100.0, 40.0, 10);
//! robot.run_fling(600);
//! ```

use crate::fake::{FakePanel, FakeScrollTarget};
use stackscroll_foundation::{InputSource, PointerEvent};
use stackscroll_ui::{DispatchOutcome, NestedScrollLayout, ScrollBehavior, TargetResolver};
use stackscroll_ui_graphics::{IntRect, IntSize, Point};
use stackscroll_ui_layout::Axis;
use std::rc::Rc;

/// Duration of one display frame at 60 Hz.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Time between two pointer samples of a scripted drag.
pub const MOVE_INTERVAL_MS: i64 = 8;

/// Drives one container with pointer events and frame ticks, keeping the
/// pointer clock and the frame clock consistent.
pub struct GestureRobot<'a> {
    layout: &'a mut NestedScrollLayout,
    axis: Axis,
    cross: f32,
    uptime_ms: i64,
    frame_nanos: u64,
    pointer: Option<f32>,
}

impl<'a> GestureRobot<'a> {
    pub fn new(layout: &'a mut NestedScrollLayout) -> Self {
        let axis = layout.axis();
        Self {
            layout,
            axis,
            cross: 10.0,
            uptime_ms: 0,
            frame_nanos: 0,
            pointer: None,
        }
    }

    /// Cross-axis coordinate used for every event.
    pub fn at_cross(mut self, cross: f32) -> Self {
        self.cross = cross;
        self
    }

    pub fn layout(&mut self) -> &mut NestedScrollLayout {
        &mut *self.layout
    }

    fn point(&self, main: f32) -> Point {
        self.axis.point(main, self.cross)
    }

    /// Presses at `main` along the scroll axis.
    pub fn down(&mut self, main: f32) -> bool {
        self.pointer = Some(main);
        let event = PointerEvent::down(self.point(main), self.uptime_ms);
        self.layout.on_pointer_event(&event)
    }

    /// Moves the pressed pointer to `main`.
    pub fn move_to(&mut self, main: f32) -> bool {
        self.uptime_ms += MOVE_INTERVAL_MS;
        self.pointer = Some(main);
        let event = PointerEvent::moved(self.point(main), self.uptime_ms);
        self.layout.on_pointer_event(&event)
    }

    /// Releases the pointer where it last was.
    pub fn up(&mut self) -> bool {
        let main = self.pointer.take().unwrap_or_default();
        let event = PointerEvent::up(self.point(main), self.uptime_ms);
        self.layout.on_pointer_event(&event)
    }

    pub fn cancel(&mut self) -> bool {
        let main = self.pointer.take().unwrap_or_default();
        let event = PointerEvent::cancel(self.point(main), self.uptime_ms);
        self.layout.on_pointer_event(&event)
    }

    /// Presses at `from`, moves to `to` in `steps` evenly spaced samples and
    /// keeps the pointer down. Returns whether any move was claimed.
    pub fn press_and_move(&mut self, from: f32, to: f32, steps: u32) -> bool {
        self.down(from);
        let steps = steps.max(1);
        let mut claimed = false;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            claimed |= self.move_to(from + (to - from) * t);
        }
        claimed
    }

    /// A full drag: press, move and release. Returns what the release
    /// reported.
    pub fn drag(&mut self, from: f32, to: f32, steps: u32) -> bool {
        self.press_and_move(from, to, steps);
        self.up()
    }

    /// Lets `ms` pass on the pointer clock without any event, the way a
    /// finger resting before release does.
    pub fn hold(&mut self, ms: i64) {
        self.uptime_ms += ms;
    }

    /// Runs one frame.
    pub fn frame(&mut self) -> Option<DispatchOutcome> {
        let outcome = self.layout.compute_scroll(self.frame_nanos);
        self.frame_nanos += FRAME_NANOS;
        self.uptime_ms += (FRAME_NANOS / 1_000_000) as i64;
        outcome
    }

    /// Runs `count` frames, returning the outcome of each that ticked.
    pub fn frames(&mut self, count: usize) -> Vec<DispatchOutcome> {
        (0..count).filter_map(|_| self.frame()).collect()
    }

    /// Runs frames until the fling stops, at most `max_frames`.
    pub fn run_fling(&mut self, max_frames: usize) -> Vec<DispatchOutcome> {
        let mut outcomes = Vec::new();
        for _ in 0..max_frames {
            match self.frame() {
                Some(outcome) => outcomes.push(outcome),
                None => break,
            }
        }
        log::trace!("fling ran {} frames", outcomes.len());
        outcomes
    }
}

/// Main-axis extent of the viewport used by [`three_panel_stack`].
pub const VIEWPORT_EXTENT: i32 = 1000;
pub const PREVIOUS_EXTENT: i32 = 300;
pub const CONTENT_EXTENT: i32 = 800;
pub const NEXT_EXTENT: i32 = 500;
/// Leading strip of the content panel that holds no scrollable.
pub const CONTENT_HEADER_EXTENT: i32 = 200;

const CROSS_EXTENT: i32 = 400;

/// A laid-out container over fake panels.
///
/// `Previous` and `Next` are covered entirely by one scrollable each.
/// `Content` starts with a header strip of [`CONTENT_HEADER_EXTENT`] that
/// has no scrollable, followed by the content list.
pub struct StackFixture {
    pub layout: NestedScrollLayout,
    pub axis: Axis,
    pub previous: Rc<FakeScrollTarget>,
    pub content: Rc<FakeScrollTarget>,
    pub next: Rc<FakeScrollTarget>,
    pub content_panel: Rc<FakePanel>,
}

impl StackFixture {
    pub fn viewport(&self) -> IntSize {
        self.axis.rect(0, VIEWPORT_EXTENT, CROSS_EXTENT).size()
    }

    /// Re-runs layout, e.g. after a panel was resized.
    pub fn relayout(&mut self) {
        let viewport = self.viewport();
        self.layout.layout(viewport);
    }

    pub fn robot(&mut self) -> GestureRobot<'_> {
        GestureRobot::new(&mut self.layout)
    }

    pub fn offset(&self) -> i32 {
        self.layout.scroll_offset()
    }
}

fn size_along(axis: Axis, main: i32) -> IntSize {
    axis.rect(0, main, CROSS_EXTENT).size()
}

fn region_along(axis: Axis, start: i32, main: i32) -> IntRect {
    axis.rect(start, main, CROSS_EXTENT)
}

/// Builds and lays out the reference stack: viewport 1000, `Previous` 300,
/// `Content` 800, `Next` 500 along `axis`, with the given overscroll
/// allowances `(min, max)`.
pub fn three_panel_stack(axis: Axis, overscroll: (i32, i32)) -> StackFixture {
    let previous = FakeScrollTarget::new("previous", axis, 600);
    let content = FakeScrollTarget::new("content", axis, 1200);
    let next = FakeScrollTarget::new("next", axis, 600);

    let content_panel = FakePanel::new(size_along(axis, CONTENT_EXTENT));
    content_panel.add_region(
        region_along(
            axis,
            CONTENT_HEADER_EXTENT,
            CONTENT_EXTENT - CONTENT_HEADER_EXTENT,
        ),
        content.as_target(),
    );
    let previous_panel =
        FakePanel::filled_with(size_along(axis, PREVIOUS_EXTENT), previous.as_target());
    let next_panel = FakePanel::filled_with(size_along(axis, NEXT_EXTENT), next.as_target());

    let behavior = ScrollBehavior::builder(content_panel.as_panel())
        .previous(previous_panel.as_panel(), TargetResolver::DescendantSearch)
        .next(next_panel.as_panel(), TargetResolver::DescendantSearch)
        .axis(axis)
        .overscroll(overscroll.0, overscroll.1);
    let mut layout = NestedScrollLayout::default();
    match behavior.build() {
        Ok(behavior) => layout.set_behavior(Some(behavior)),
        Err(err) => panic!("fixture behavior rejected: {err}"),
    }

    let mut fixture = StackFixture {
        layout,
        axis,
        previous,
        content,
        next,
        content_panel,
    };
    fixture.relayout();
    fixture
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackscroll_ui_layout::PanelSlot;

    #[test]
    fn fixture_matches_reference_bounds() {
        let stack = three_panel_stack(Axis::Vertical, (100, 0));
        let bounds = stack.layout.bounds();
        assert_eq!(bounds.min_scroll, -300);
        assert_eq!(bounds.max_scroll, 300);
        assert_eq!(bounds.min_overscroll, -400);
        assert_eq!(
            stack.layout.placement(PanelSlot::Next),
            Some(IntRect::new(0, 800, 400, 500))
        );
    }

    #[test]
    fn horizontal_fixture_lays_out_along_x() {
        let stack = three_panel_stack(Axis::Horizontal, (0, 0));
        assert_eq!(stack.viewport(), IntSize::new(1000, 400));
        assert_eq!(
            stack.layout.placement(PanelSlot::Previous),
            Some(IntRect::new(-300, 0, 300, 400))
        );
    }

    #[test]
    fn frames_advance_both_clocks() {
        let mut stack = three_panel_stack(Axis::Vertical, (0, 0));
        let mut robot = stack.robot();
        assert!(robot.frames(3).is_empty());
        robot.layout().fling(2_000.0);
        let outcomes = robot.frames(2);
        assert_eq!(outcomes.len(), 2);
    }
}
