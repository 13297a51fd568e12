//! The active nested-scroll target and hand-off between panels.

use crate::{ContainerScope, ScrollBehavior};
use stackscroll_foundation::{same_target, InputType, ScrollTarget};
use stackscroll_ui_layout::{Axis, PanelSlot};
use std::fmt;
use std::rc::Rc;

/// The scrollable currently authoritative for consuming deltas, and the
/// panel that owns it.
#[derive(Clone)]
pub struct ActiveTarget {
    pub child: Option<PanelSlot>,
    pub target: Option<Rc<dyn ScrollTarget>>,
    /// Input type that established this target.
    pub input_type: InputType,
}

impl Default for ActiveTarget {
    fn default() -> Self {
        Self {
            child: None,
            target: None,
            input_type: InputType::Touch,
        }
    }
}

impl ActiveTarget {
    pub fn new(
        child: Option<PanelSlot>,
        target: Option<Rc<dyn ScrollTarget>>,
        input_type: InputType,
    ) -> Self {
        Self {
            child,
            target,
            input_type,
        }
    }

    /// Whether the target can scroll along `axis` toward `delta`. A missing
    /// target cannot.
    pub fn can_scroll(&self, axis: Axis, delta: i32) -> bool {
        self.target
            .as_ref()
            .is_some_and(|target| target.can_scroll(axis, delta))
    }

    /// Same child and same target (by identity).
    pub fn same_as(&self, other: &ActiveTarget) -> bool {
        self.child == other.child
            && match (&self.target, &other.target) {
                (Some(a), Some(b)) => same_target(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl fmt::Debug for ActiveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveTarget")
            .field("child", &self.child)
            .field("has_target", &self.target.is_some())
            .field("input_type", &self.input_type)
            .finish()
    }
}

/// Hands scrolling over to the neighbouring panel once the active target is
/// exhausted in the direction of `delta`.
///
/// Only programmatic input hands off: a fling that runs past the end of
/// one panel continues into the next, a finger never switches panels
/// mid-gesture. Returns the active target unchanged when there is no
/// neighbour in that direction or the neighbouring slot is empty.
pub fn resolve_handoff(
    active: &ActiveTarget,
    delta: i32,
    input_type: InputType,
    behavior: &ScrollBehavior,
    scope: &ContainerScope,
) -> ActiveTarget {
    if input_type.is_touch() || delta == 0 || active.can_scroll(scope.axis, delta) {
        return active.clone();
    }
    let Some(child) = active.child else {
        return active.clone();
    };
    let Some(slot) = child.neighbor(delta) else {
        log::trace!("no panel beyond {child:?} for delta {delta}");
        return active.clone();
    };
    let Some(entry) = behavior.panels().get(slot) else {
        log::trace!("{slot:?} slot is empty, keeping {child:?}");
        return active.clone();
    };

    let target = entry.resolve(scope, delta, input_type);
    log::debug!(
        "hand-off {child:?} -> {slot:?} (delta {delta}, target found: {})",
        target.is_some()
    );
    ActiveTarget::new(Some(slot), target, input_type)
}

#[cfg(test)]
#[path = "tests/target_tests.rs"]
mod tests;
