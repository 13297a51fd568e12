//! The nested-scroll container itself.

use crate::{
    ActiveTarget, DispatchOutcome, FlingSimulator, GestureState, ScrollBehavior, ScrollDispatcher,
};
use stackscroll_foundation::{
    ConfigError, InputSource, InputType, PointerEvent, ScrollConfig, ScrollTarget,
};
use stackscroll_ui_graphics::{IntRect, IntSize};
use stackscroll_ui_layout::{constrain, Axis, Bounds, PanelSlot, StackPlacement};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// A container stacking `Previous`, `Content` and `Next` along one axis and
/// arbitrating every scroll delta between itself and the scrollable inside
/// the panel under the user's finger.
///
/// The host drives it: [`layout`](Self::layout) after measuring panels,
/// pointer and nested-scroll events through [`InputSource`], and
/// [`compute_scroll`](Self::compute_scroll) once per frame while
/// [`is_flinging`](Self::is_flinging).
pub struct NestedScrollLayout {
    behavior: Option<ScrollBehavior>,
    config: ScrollConfig,
    placement: StackPlacement,
    /// Viewport of the last [`layout`](Self::layout) pass.
    viewport: Option<IntSize>,
    bounds: Bounds,
    offset: i32,
    active: ActiveTarget,
    gesture: GestureState,
    ancestor: Option<Rc<RefCell<dyn InputSource>>>,
}

impl Default for NestedScrollLayout {
    fn default() -> Self {
        Self::with_valid_config(ScrollConfig::default())
    }
}

impl NestedScrollLayout {
    pub fn new(config: ScrollConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: ScrollConfig) -> Self {
        Self {
            behavior: None,
            config,
            placement: StackPlacement::default(),
            viewport: None,
            bounds: Bounds::ZERO,
            offset: 0,
            active: ActiveTarget::default(),
            gesture: GestureState::default(),
            ancestor: None,
        }
    }

    /// Installs (or removes) the behavior.
    ///
    /// Everything derived from the previous one is dropped: the offset
    /// returns to the content origin, the active target is cleared and a
    /// running fling is cancelled. When a viewport is already known the
    /// panels are laid out again right away, so the next dispatch sees the
    /// new bounds.
    pub fn set_behavior(&mut self, behavior: Option<ScrollBehavior>) {
        log::debug!("behavior replaced (installed: {})", behavior.is_some());
        self.behavior = behavior;
        self.offset = 0;
        self.active = ActiveTarget::default();
        self.gesture.cancel_fling();
        match self.viewport {
            Some(viewport) => self.layout(viewport),
            None => {
                self.placement = StackPlacement::default();
                self.bounds = Bounds::ZERO;
            }
        }
    }

    /// Sets the enclosing container offered pre-flings before this one.
    pub fn set_ancestor(&mut self, ancestor: Option<Rc<RefCell<dyn InputSource>>>) {
        self.ancestor = ancestor;
    }

    pub fn behavior(&self) -> Option<&ScrollBehavior> {
        self.behavior.as_ref()
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Scroll axis of the installed behavior; vertical without one.
    pub fn axis(&self) -> Axis {
        self.behavior
            .as_ref()
            .map_or(Axis::default(), ScrollBehavior::axis)
    }

    /// Places the panels inside `viewport` and recomputes the bounds. The
    /// current offset is pulled back into the new range.
    pub fn layout(&mut self, viewport: IntSize) {
        self.viewport = Some(viewport);
        let Some(behavior) = self.behavior.as_ref() else {
            self.placement = StackPlacement::default();
            self.bounds = Bounds::ZERO;
            self.offset = 0;
            return;
        };
        let [previous, content, next] = behavior.panels().measured_sizes();
        let (overscroll_min, overscroll_max) = behavior.overscroll();
        self.placement = StackPlacement::place(behavior.axis(), viewport, previous, content, next);
        self.bounds = self.placement.bounds(overscroll_min, overscroll_max);

        let constrained = constrain(
            self.offset,
            self.bounds.min_overscroll,
            self.bounds.max_overscroll.max(0),
        );
        if constrained != self.offset {
            log::debug!("layout moved offset {} -> {constrained}", self.offset);
            self.offset = constrained;
        }
    }

    /// Routes one delta; see [`ScrollDispatcher::dispatch`].
    pub fn dispatch(&mut self, delta: i32, input_type: InputType) -> DispatchOutcome {
        let outcome = ScrollDispatcher {
            behavior: self.behavior.as_ref(),
            placement: &self.placement,
            bounds: self.bounds,
            offset: &mut self.offset,
            active: &mut self.active,
        }
        .dispatch(delta, input_type);
        log::debug!("dispatch {delta} ({input_type:?}) -> {outcome:?}");
        outcome
    }

    /// Starts a fling at `velocity` px/sec, capped to the configured
    /// maximum, replacing any running one. Returns false when the velocity
    /// is too slow to move.
    pub fn fling(&mut self, velocity: f32) -> bool {
        let max = self.config.max_fling_velocity;
        let velocity = velocity.clamp(-max, max);
        let started = self
            .gesture
            .start_fling(FlingSimulator::new(&self.config, velocity));
        log::debug!("fling at {velocity} px/s (started: {started})");
        started
    }

    /// Advances the running fling to `frame_time_nanos`.
    ///
    /// Returns how the frame's delta was routed, or `None` when no fling is
    /// running. A delta left to the active target is applied to it here.
    pub fn compute_scroll(&mut self, frame_time_nanos: u64) -> Option<DispatchOutcome> {
        let step = self.gesture.fling_mut()?.step(frame_time_nanos);
        let Some(delta) = step else {
            self.gesture.clear_finished_fling();
            log::debug!("fling finished at offset {}", self.offset);
            return None;
        };
        log::trace!("fling tick {delta} at {frame_time_nanos}ns");

        let mut outcome = self.dispatch(delta, InputType::NonTouch);
        if outcome == DispatchOutcome::Unconsumed {
            if let Some(target) = self.active.target.clone() {
                target.scroll_by(self.axis(), delta);
                outcome = DispatchOutcome::TargetConsumed;
            }
        }
        self.gesture.clear_finished_fling();
        Some(outcome)
    }

    /// Whether the container itself can move along `axis` toward
    /// `direction`.
    pub fn can_scroll(&self, axis: Axis, direction: i32) -> bool {
        self.behavior.is_some()
            && axis == self.axis()
            && self.bounds.can_scroll(self.offset, direction)
    }

    /// Moves the container by `delta`, clamped like any self-scroll.
    pub fn scroll_by(&mut self, delta: i32) {
        self.offset = self.bounds.clamp_scroll_by(self.offset, delta);
    }

    pub fn scroll_offset(&self) -> i32 {
        self.offset
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn active_target(&self) -> &ActiveTarget {
        &self.active
    }

    pub fn is_flinging(&self) -> bool {
        self.gesture.is_flinging()
    }

    /// Rectangle of the panel in `slot` from the last layout, in unscrolled
    /// container coordinates.
    pub fn placement(&self, slot: PanelSlot) -> Option<IntRect> {
        self.placement.get(slot)
    }

    pub fn is_gesture_claimed(&self) -> bool {
        self.gesture.claimed
    }

    fn main_position(&self, event: &PointerEvent) -> f32 {
        self.axis().main_position(event.position)
    }

    fn end_gesture(&mut self, event: &PointerEvent) -> bool {
        let claimed = self.gesture.claimed;
        self.gesture.record(self.main_position(event), event.uptime_ms);
        let velocity = self.gesture.finish(self.config.max_fling_velocity);
        if claimed {
            self.fling(-velocity);
        }
        claimed
    }
}

impl InputSource for NestedScrollLayout {
    fn on_pointer_down(&mut self, event: &PointerEvent) -> bool {
        let position = self.main_position(event);
        if self.gesture.begin(position, event.uptime_ms) {
            log::debug!("pointer down cancelled fling at offset {}", self.offset);
        }

        let axis = self.axis();
        let hit = self
            .placement
            .hit_test(event.position, self.offset)
            .and_then(|(slot, local)| {
                let panel = self.behavior.as_ref()?.panels().get(slot)?;
                Some((slot, panel.panel.scroll_target_at(local, axis)))
            });
        self.active = match hit {
            Some((slot, target)) => ActiveTarget::new(Some(slot), target, InputType::Touch),
            None => ActiveTarget::default(),
        };
        log::trace!("pointer down on {:?}", self.active);
        false
    }

    fn on_pointer_move(&mut self, event: &PointerEvent) -> bool {
        if !self.gesture.is_tracking() {
            return false;
        }
        let position = self.main_position(event);
        self.gesture.record(position, event.uptime_ms);
        let current = position as i32;

        if !self.gesture.claimed {
            if current == self.gesture.last_position || self.active.target.is_some() {
                return false;
            }
            log::debug!("claimed gesture at {current}");
            self.gesture.claimed = true;
        }

        let delta = self.gesture.last_position.saturating_sub(current);
        self.dispatch(delta, InputType::Touch);
        self.gesture.last_position = current;
        true
    }

    fn on_pointer_up(&mut self, event: &PointerEvent) -> bool {
        self.end_gesture(event)
    }

    fn on_pointer_cancel(&mut self, event: &PointerEvent) -> bool {
        self.end_gesture(event)
    }

    fn on_start_nested_scroll(&mut self, axis: Axis, input_type: InputType) -> bool {
        let accepted = self.behavior.is_some() && axis == self.axis();
        log::trace!("start nested scroll {axis:?} ({input_type:?}) accepted: {accepted}");
        accepted
    }

    fn on_nested_scroll_accepted(
        &mut self,
        child: PanelSlot,
        target: Rc<dyn ScrollTarget>,
        input_type: InputType,
    ) {
        self.active = ActiveTarget::new(Some(child), Some(target), input_type);
    }

    fn on_nested_pre_scroll(&mut self, delta: i32, input_type: InputType) -> i32 {
        self.dispatch(delta, input_type).consumed()
    }

    fn on_nested_scroll(&mut self, consumed: i32, unconsumed: i32, input_type: InputType) {
        log::trace!("nested scroll consumed {consumed} unconsumed {unconsumed}");
        if unconsumed != 0 {
            self.dispatch(unconsumed, input_type);
        }
    }

    fn on_nested_pre_fling(&mut self, velocity: f32) -> bool {
        let handled_above = self.ancestor.as_ref().is_some_and(|ancestor| {
            match ancestor.try_borrow_mut() {
                Ok(mut ancestor) => ancestor.on_nested_pre_fling(velocity),
                Err(_) => {
                    log::warn!("ancestor busy, skipping its pre-fling");
                    false
                }
            }
        });
        if !handled_above {
            self.fling(velocity);
        }
        true
    }

    fn on_stop_nested_scroll(&mut self, input_type: InputType) {
        log::trace!("stop nested scroll ({input_type:?}) at offset {}", self.offset);
    }
}

/// Shared handle to a container.
///
/// Lets a container sit inside a panel of an enclosing one, either as its
/// scroll target or as the ancestor offered pre-flings.
#[derive(Clone)]
pub struct SharedLayout(Rc<RefCell<NestedScrollLayout>>);

impl SharedLayout {
    pub fn new(layout: NestedScrollLayout) -> Self {
        Self(Rc::new(RefCell::new(layout)))
    }

    pub fn borrow(&self) -> Ref<'_, NestedScrollLayout> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, NestedScrollLayout> {
        self.0.borrow_mut()
    }

    /// This container as the ancestor of a nested one, see
    /// [`NestedScrollLayout::set_ancestor`].
    pub fn as_ancestor(&self) -> Rc<RefCell<dyn InputSource>> {
        self.0.clone()
    }

    pub fn as_target(&self) -> Rc<dyn ScrollTarget> {
        Rc::new(self.clone())
    }
}

impl ScrollTarget for SharedLayout {
    fn can_scroll(&self, axis: Axis, direction: i32) -> bool {
        match self.0.try_borrow() {
            Ok(layout) => layout.can_scroll(axis, direction),
            Err(_) => {
                log::warn!("container busy, reporting it cannot scroll");
                false
            }
        }
    }

    fn scroll_by(&self, axis: Axis, delta: i32) {
        match self.0.try_borrow_mut() {
            Ok(mut layout) if axis == layout.axis() => layout.scroll_by(delta),
            Ok(_) => {}
            Err(_) => log::warn!("container busy, dropping scroll of {delta}"),
        }
    }
}
