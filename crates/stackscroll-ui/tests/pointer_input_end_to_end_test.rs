//! Pointer sequences driven through the container's input entry points.

use stackscroll_testing::prelude::*;
use stackscroll_ui::{Axis, InputSource, PanelSlot};

#[test]
fn drag_on_header_claims_and_moves_container() {
    let mut stack = three_panel_stack(Axis::Vertical, (0, 0));
    let mut robot = stack.robot();

    assert!(!robot.down(100.0));
    assert!(robot.press_and_move(100.0, 40.0, 10));
    assert!(robot.layout().is_gesture_claimed());

    assert_eq!(stack.offset(), 60);
    assert_eq!(stack.content.position(), 0);
}

#[test]
fn drag_on_list_is_left_to_the_list() {
    let mut stack = three_panel_stack(Axis::Vertical, (0, 0));
    let mut robot = stack.robot();

    assert!(!robot.press_and_move(500.0, 400.0, 10));
    assert!(!robot.up());
    assert!(!robot.layout().is_flinging());

    assert_eq!(stack.offset(), 0);
    assert_eq!(
        stack.layout.active_target().child,
        Some(PanelSlot::Content)
    );
    assert!(stack.layout.active_target().target.is_some());
}

#[test]
fn stationary_pointer_is_not_claimed() {
    let mut stack = three_panel_stack(Axis::Vertical, (0, 0));
    let mut robot = stack.robot();
    robot.down(100.0);
    assert!(!robot.move_to(100.0));
    assert!(!robot.up());
    assert_eq!(stack.offset(), 0);
}

#[test]
fn dragging_down_reveals_previous_panel() {
    let mut stack = three_panel_stack(Axis::Vertical, (0, 0));
    let mut robot = stack.robot();
    assert!(robot.press_and_move(100.0, 160.0, 6));
    assert_eq!(stack.offset(), -60);
}

#[test]
fn finger_stops_at_settled_bound() {
    let mut stack = three_panel_stack(Axis::Vertical, (0, 0));
    let mut robot = stack.robot();
    robot.press_and_move(100.0, -500.0, 20);
    assert_eq!(stack.offset(), 300);
    assert_eq!(
        stack.layout.active_target().child,
        Some(PanelSlot::Content)
    );
}

#[test]
fn release_flings_in_drag_direction() {
    let mut stack = three_panel_stack(Axis::Vertical, (0, 0));
    let mut robot = stack.robot();

    assert!(robot.drag(100.0, 40.0, 10));
    assert!(robot.layout().is_flinging());
    let outcomes = robot.run_fling(1_000);
    assert!(!outcomes.is_empty());
    assert!(!robot.layout().is_flinging());

    assert!(stack.offset() > 60, "offset {}", stack.offset());
    assert!(stack.offset() <= 300);
}

#[test]
fn resting_before_release_does_not_fling() {
    let mut stack = three_panel_stack(Axis::Vertical, (0, 0));
    let mut robot = stack.robot();

    robot.press_and_move(100.0, 40.0, 10);
    robot.hold(120);
    assert!(robot.up());
    assert!(!robot.layout().is_flinging());
    assert_eq!(stack.offset(), 60);
}

#[test]
fn cancel_finishes_like_release() {
    let mut stack = three_panel_stack(Axis::Vertical, (0, 0));
    let mut robot = stack.robot();
    robot.press_and_move(100.0, 40.0, 10);
    assert!(robot.cancel());
    assert!(robot.layout().is_flinging());
    assert!(!robot.layout().is_gesture_claimed());
}

#[test]
fn pointer_down_cancels_running_fling() {
    let mut stack = three_panel_stack(Axis::Vertical, (0, 0));
    let mut robot = stack.robot();

    assert!(robot.layout().fling(3_000.0));
    assert_eq!(robot.frames(3).len(), 3);
    let offset = robot.layout().scroll_offset();
    assert!(offset > 0);

    robot.down(100.0);
    assert!(!robot.layout().is_flinging());
    assert!(robot.frames(5).is_empty());
    assert_eq!(robot.layout().scroll_offset(), offset);
}

#[test]
fn horizontal_stack_follows_x() {
    let mut stack = three_panel_stack(Axis::Horizontal, (0, 0));
    let mut robot = stack.robot().at_cross(200.0);

    assert!(robot.press_and_move(100.0, 40.0, 10));
    assert_eq!(stack.offset(), 60);
    assert!(!stack.layout.on_start_nested_scroll(Axis::Vertical, stackscroll_ui::InputType::Touch));
}

#[test]
fn horizontal_drag_on_list_is_left_to_the_list() {
    let mut stack = three_panel_stack(Axis::Horizontal, (0, 0));
    let mut robot = stack.robot();
    assert!(!robot.press_and_move(500.0, 450.0, 5));
    assert_eq!(stack.offset(), 0);
}
