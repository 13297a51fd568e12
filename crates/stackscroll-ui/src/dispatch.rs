//! Arbitration of one scroll delta between the container and its active
//! target.

use crate::{resolve_handoff, ActiveTarget, ContainerScope, ScrollBehavior};
use stackscroll_foundation::InputType;
use stackscroll_ui_layout::{Bounds, StackPlacement};

/// Result of dispatching one delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The container claimed the delta. Clamping may have moved it by less;
    /// the claimed delta is withheld from the target either way.
    SelfConsumed(i32),
    /// The delta was forwarded to the active target's own `scroll_by`.
    TargetConsumed,
    /// The active target should scroll itself; the container did nothing.
    Unconsumed,
}

impl DispatchOutcome {
    /// Amount withheld from the inner scrollable.
    pub fn consumed(self) -> i32 {
        match self {
            DispatchOutcome::SelfConsumed(amount) => amount,
            DispatchOutcome::TargetConsumed | DispatchOutcome::Unconsumed => 0,
        }
    }

    pub fn is_self_consumed(self) -> bool {
        matches!(self, DispatchOutcome::SelfConsumed(_))
    }
}

/// Split borrow of the container state one dispatch needs.
pub struct ScrollDispatcher<'a> {
    pub behavior: Option<&'a ScrollBehavior>,
    pub placement: &'a StackPlacement,
    pub bounds: Bounds,
    pub offset: &'a mut i32,
    pub active: &'a mut ActiveTarget,
}

impl ScrollDispatcher<'_> {
    fn scope(&self, behavior: &ScrollBehavior) -> ContainerScope {
        ContainerScope {
            axis: behavior.axis(),
            offset: *self.offset,
            bounds: self.bounds,
            viewport: self.placement.viewport(),
        }
    }

    /// Decides who moves for `delta`; first matching rule wins:
    ///
    /// 1. a zero delta is consumed as a no-op;
    /// 2. the container moves first when it prefers to and still can;
    /// 3. the target scrolls itself when it can and its panel is fully
    ///    visible;
    /// 4. otherwise the container attempts a hand-off and moves.
    pub fn dispatch(&mut self, delta: i32, input_type: InputType) -> DispatchOutcome {
        if delta == 0 {
            return DispatchOutcome::SelfConsumed(0);
        }
        let Some(behavior) = self.behavior else {
            log::trace!("dispatch {delta} swallowed: no behavior installed");
            return DispatchOutcome::SelfConsumed(delta);
        };
        let scope = self.scope(behavior);

        if behavior.prefers_self_first(&scope, delta, input_type)
            && self.bounds.can_scroll(*self.offset, delta)
        {
            self.scroll_self(delta);
            return DispatchOutcome::SelfConsumed(delta);
        }

        if self.should_target_scroll(&scope, delta) {
            return DispatchOutcome::Unconsumed;
        }

        let handed_off = resolve_handoff(&*self.active, delta, input_type, behavior, &scope);
        *self.active = handed_off;
        self.scroll_self(delta);
        DispatchOutcome::SelfConsumed(delta)
    }

    fn should_target_scroll(&self, scope: &ContainerScope, delta: i32) -> bool {
        self.active.can_scroll(scope.axis, delta)
            && self
                .active
                .child
                .is_some_and(|slot| self.placement.is_fully_visible(slot, *self.offset))
    }

    fn scroll_self(&mut self, delta: i32) {
        let before = *self.offset;
        *self.offset = self.bounds.clamp_scroll_by(before, delta);
        log::trace!("self scroll {before} -> {} (delta {delta})", *self.offset);
    }
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
