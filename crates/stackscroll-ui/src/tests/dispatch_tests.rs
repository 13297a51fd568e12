use super::*;
use crate::{ScrollBehaviorBuilder, TargetResolver};
use stackscroll_foundation::same_target;
use stackscroll_testing::{FakePanel, FakeScrollTarget};
use stackscroll_ui_graphics::IntSize;
use stackscroll_ui_layout::{Axis, PanelSlot};
use std::rc::Rc;

struct Stack {
    behavior: ScrollBehavior,
    placement: StackPlacement,
    bounds: Bounds,
    previous: Rc<FakeScrollTarget>,
    content: Rc<FakeScrollTarget>,
    next: Rc<FakeScrollTarget>,
}

impl Stack {
    /// Viewport 1000 tall; Previous 300, Content 800, Next 500.
    fn new(content_max: i32, overscroll_min: i32, overscroll_max: i32) -> Self {
        Self::with_builder(content_max, |builder| {
            builder.overscroll(overscroll_min, overscroll_max)
        })
    }

    fn with_builder(
        content_max: i32,
        configure: impl FnOnce(ScrollBehaviorBuilder) -> ScrollBehaviorBuilder,
    ) -> Self {
        let previous = FakeScrollTarget::vertical("previous", 500);
        let content = FakeScrollTarget::vertical("content", content_max);
        let next = FakeScrollTarget::vertical("next", 500);
        let panel = |height: i32, target: &Rc<FakeScrollTarget>| {
            FakePanel::filled_with(IntSize::new(400, height), target.as_target()).as_panel()
        };

        let builder = ScrollBehavior::builder(panel(800, &content))
            .previous(panel(300, &previous), TargetResolver::DescendantSearch)
            .next(panel(500, &next), TargetResolver::DescendantSearch);
        let behavior = configure(builder).build().unwrap();
        let [p, c, n] = behavior.panels().measured_sizes();
        let placement = StackPlacement::place(Axis::Vertical, IntSize::new(400, 1000), p, c, n);
        let (min, max) = behavior.overscroll();
        let bounds = placement.bounds(min, max);
        Self {
            behavior,
            placement,
            bounds,
            previous,
            content,
            next,
        }
    }

    fn on_content(&self, input_type: InputType) -> ActiveTarget {
        ActiveTarget::new(
            Some(PanelSlot::Content),
            Some(self.content.as_target()),
            input_type,
        )
    }

    fn dispatch(
        &self,
        offset: &mut i32,
        active: &mut ActiveTarget,
        delta: i32,
        input_type: InputType,
    ) -> DispatchOutcome {
        ScrollDispatcher {
            behavior: Some(&self.behavior),
            placement: &self.placement,
            bounds: self.bounds,
            offset,
            active,
        }
        .dispatch(delta, input_type)
    }
}

#[test]
fn zero_delta_changes_nothing() {
    let stack = Stack::new(600, 100, 0);
    let mut offset = -350;
    let mut active = stack.on_content(InputType::NonTouch);
    let before = active.clone();

    let outcome = stack.dispatch(&mut offset, &mut active, 0, InputType::NonTouch);

    assert_eq!(outcome, DispatchOutcome::SelfConsumed(0));
    assert_eq!(offset, -350);
    assert!(active.same_as(&before));
    assert!(stack.content.requested_deltas().is_empty());
}

#[test]
fn static_content_lets_container_move() {
    let stack = Stack::new(0, 0, 0);
    assert_eq!(stack.bounds.min_scroll, -300);
    assert_eq!(stack.bounds.max_scroll, 300);

    let mut offset = 0;
    let mut active = stack.on_content(InputType::Touch);
    let outcome = stack.dispatch(&mut offset, &mut active, 50, InputType::Touch);

    assert_eq!(outcome, DispatchOutcome::SelfConsumed(50));
    assert_eq!(offset, 50);
    assert_eq!(active.child, Some(PanelSlot::Content));
}

#[test]
fn partially_visible_content_does_not_scroll_itself() {
    let stack = Stack::new(600, 0, 0);
    let mut offset = 50;
    let mut active = stack.on_content(InputType::Touch);

    let outcome = stack.dispatch(&mut offset, &mut active, 50, InputType::Touch);

    assert_eq!(outcome, DispatchOutcome::SelfConsumed(50));
    assert_eq!(offset, 100);
    assert_eq!(stack.content.position(), 0);
}

#[test]
fn fully_visible_scrollable_content_scrolls_itself() {
    let stack = Stack::new(600, 0, 0);
    let mut offset = 0;
    let mut active = stack.on_content(InputType::Touch);

    let outcome = stack.dispatch(&mut offset, &mut active, 40, InputType::Touch);

    assert_eq!(outcome, DispatchOutcome::Unconsumed);
    assert_eq!(outcome.consumed(), 0);
    assert_eq!(offset, 0);
}

#[test]
fn overscroll_band_is_absorbed_first() {
    let stack = Stack::new(600, 100, 0);
    assert_eq!(stack.bounds.min_overscroll, -400);

    let mut offset = -350;
    let mut active = ActiveTarget::new(
        Some(PanelSlot::Previous),
        Some(stack.previous.as_target()),
        InputType::Touch,
    );
    let outcome = stack.dispatch(&mut offset, &mut active, 30, InputType::Touch);

    assert_eq!(outcome, DispatchOutcome::SelfConsumed(30));
    assert_eq!(offset, -320);
    assert_eq!(stack.previous.position(), 0);
}

#[test]
fn prefer_self_first_override_replaces_band_check() {
    let eager = Stack::with_builder(600, |builder| builder.prefer_self_first(|_, _, _| true));
    let mut offset = 0;
    let mut active = eager.on_content(InputType::Touch);
    assert_eq!(
        eager.dispatch(&mut offset, &mut active, 40, InputType::Touch),
        DispatchOutcome::SelfConsumed(40)
    );
    assert_eq!(offset, 40);

    let reluctant = Stack::with_builder(600, |builder| {
        builder.overscroll(100, 0).prefer_self_first(|_, _, _| false)
    });
    let mut offset = -350;
    let mut active = ActiveTarget::new(
        Some(PanelSlot::Previous),
        Some(reluctant.previous.as_target()),
        InputType::Touch,
    );
    assert_eq!(
        reluctant.dispatch(&mut offset, &mut active, 30, InputType::Touch),
        DispatchOutcome::Unconsumed
    );
    assert_eq!(offset, -350);
}

#[test]
fn predicate_sees_current_scope() {
    let stack = Stack::with_builder(0, |builder| {
        builder.prefer_self_first(|scope, delta, input_type| {
            scope.offset == 120 && delta == -20 && input_type == InputType::NonTouch
        })
    });
    let mut offset = 120;
    let mut active = ActiveTarget::default();
    let outcome = stack.dispatch(&mut offset, &mut active, -20, InputType::NonTouch);
    assert_eq!(outcome, DispatchOutcome::SelfConsumed(-20));
    assert_eq!(offset, 100);
}

#[test]
fn self_scroll_reports_full_claim_when_clamped() {
    let stack = Stack::new(0, 0, 0);
    let mut offset = 280;
    let mut active = stack.on_content(InputType::Touch);

    let outcome = stack.dispatch(&mut offset, &mut active, 50, InputType::Touch);

    assert_eq!(outcome, DispatchOutcome::SelfConsumed(50));
    assert_eq!(offset, 300);
}

#[test]
fn exhausted_target_hands_off_on_fling() {
    let stack = Stack::new(100, 0, 0);
    stack.content.set_position(100);
    let mut offset = 0;
    let mut active = stack.on_content(InputType::NonTouch);

    let outcome = stack.dispatch(&mut offset, &mut active, 30, InputType::NonTouch);

    assert_eq!(outcome, DispatchOutcome::SelfConsumed(30));
    assert_eq!(offset, 30);
    assert_eq!(active.child, Some(PanelSlot::Next));
    let next = stack.next.as_target();
    assert!(active.target.as_ref().is_some_and(|t| same_target(t, &next)));
}

#[test]
fn exhausted_target_keeps_finger_on_same_panel() {
    let stack = Stack::new(100, 0, 0);
    stack.content.set_position(100);
    let mut offset = 0;
    let mut active = stack.on_content(InputType::Touch);

    let outcome = stack.dispatch(&mut offset, &mut active, 30, InputType::Touch);

    assert_eq!(outcome, DispatchOutcome::SelfConsumed(30));
    assert_eq!(active.child, Some(PanelSlot::Content));
}

#[test]
fn missing_behavior_swallows_deltas() {
    let placement = StackPlacement::default();
    let mut offset = 0;
    let mut active = ActiveTarget::default();
    let outcome = ScrollDispatcher {
        behavior: None,
        placement: &placement,
        bounds: Bounds::ZERO,
        offset: &mut offset,
        active: &mut active,
    }
    .dispatch(25, InputType::Touch);

    assert_eq!(outcome, DispatchOutcome::SelfConsumed(25));
    assert!(outcome.is_self_consumed());
    assert_eq!(offset, 0);
}

#[test]
fn container_never_leaves_overscroll_range() {
    let stack = Stack::new(0, 100, 40);
    let mut offset = 0;
    let mut active = ActiveTarget::default();
    for delta in [-170, -90, -250, -5, 60, 400, 90, 333, 17, -1000, 12, 500, 500] {
        stack.dispatch(&mut offset, &mut active, delta, InputType::NonTouch);
        assert!(
            (stack.bounds.min_overscroll..=stack.bounds.max_overscroll).contains(&offset),
            "offset {offset} after {delta}"
        );
    }
    assert_eq!(offset, stack.bounds.max_overscroll);
}

#[test]
fn extreme_deltas_pin_container_to_bounds() {
    let stack = Stack::new(0, 0, 0);
    let mut offset = 100;
    let mut active = stack.on_content(InputType::Touch);

    let outcome = stack.dispatch(&mut offset, &mut active, i32::MAX, InputType::Touch);
    assert_eq!(outcome, DispatchOutcome::SelfConsumed(i32::MAX));
    assert_eq!(offset, stack.bounds.max_scroll);

    stack.dispatch(&mut offset, &mut active, i32::MIN, InputType::Touch);
    assert_eq!(offset, 0);
    stack.dispatch(&mut offset, &mut active, i32::MIN, InputType::Touch);
    assert_eq!(offset, stack.bounds.min_scroll);
}
