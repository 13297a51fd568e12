//! Container configuration: the three panels, their target resolvers and the
//! overscroll allowances.

use crate::BehaviorError;
use smallvec::SmallVec;
use stackscroll_foundation::{InputType, Panel, ScrollTarget};
use stackscroll_ui_graphics::IntSize;
use stackscroll_ui_layout::{Axis, Bounds, PanelSlot};
use std::fmt;
use std::rc::Rc;

/// Read-only view of the container handed to resolvers and predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerScope {
    pub axis: Axis,
    pub offset: i32,
    pub bounds: Bounds,
    pub viewport: IntSize,
}

pub type ResolverFn = dyn Fn(&ContainerScope, i32, InputType) -> Option<Rc<dyn ScrollTarget>>;
pub type PreferSelfFirstFn = dyn Fn(&ContainerScope, i32, InputType) -> bool;

/// How a panel picks its scroll target when scrolling is handed to it.
#[derive(Clone, Default)]
pub enum TargetResolver {
    /// Ask the panel for its deepest scrollable descendant.
    #[default]
    DescendantSearch,
    /// Custom lookup; falls back to the descendant search when it yields none.
    Custom(Rc<ResolverFn>),
}

impl TargetResolver {
    pub fn custom(
        resolver: impl Fn(&ContainerScope, i32, InputType) -> Option<Rc<dyn ScrollTarget>> + 'static,
    ) -> Self {
        TargetResolver::Custom(Rc::new(resolver))
    }
}

impl fmt::Debug for TargetResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetResolver::DescendantSearch => f.write_str("DescendantSearch"),
            TargetResolver::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A panel together with its resolver.
#[derive(Clone)]
pub struct PanelEntry {
    pub panel: Rc<dyn Panel>,
    pub resolver: TargetResolver,
}

impl PanelEntry {
    pub fn new(panel: Rc<dyn Panel>, resolver: TargetResolver) -> Self {
        Self { panel, resolver }
    }

    /// Resolves the scroll target of this panel for a hand-off of `delta`.
    pub fn resolve(
        &self,
        scope: &ContainerScope,
        delta: i32,
        input_type: InputType,
    ) -> Option<Rc<dyn ScrollTarget>> {
        match &self.resolver {
            TargetResolver::DescendantSearch => self.panel.find_scroll_target(scope.axis, delta),
            TargetResolver::Custom(resolver) => resolver(scope, delta, input_type)
                .or_else(|| self.panel.find_scroll_target(scope.axis, delta)),
        }
    }
}

impl fmt::Debug for PanelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelEntry")
            .field("size", &self.panel.measured_size())
            .field("resolver", &self.resolver)
            .finish()
    }
}

/// The three slots of the stack. Any of them may be empty.
#[derive(Clone, Default, Debug)]
pub struct Panels {
    pub previous: Option<PanelEntry>,
    pub content: Option<PanelEntry>,
    pub next: Option<PanelEntry>,
}

impl Panels {
    pub fn get(&self, slot: PanelSlot) -> Option<&PanelEntry> {
        match slot {
            PanelSlot::Previous => self.previous.as_ref(),
            PanelSlot::Content => self.content.as_ref(),
            PanelSlot::Next => self.next.as_ref(),
        }
    }

    /// Present panels in stack order.
    pub fn iter(&self) -> impl Iterator<Item = (PanelSlot, &PanelEntry)> {
        PanelSlot::ORDER
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|entry| (slot, entry)))
    }

    fn measured_size(&self, slot: PanelSlot) -> Option<IntSize> {
        self.get(slot).map(|entry| entry.panel.measured_size())
    }

    /// Measured sizes in stack order, `None` for empty slots.
    pub fn measured_sizes(&self) -> [Option<IntSize>; 3] {
        PanelSlot::ORDER.map(|slot| self.measured_size(slot))
    }
}

/// Installed configuration of a container. Replaced wholesale, never
/// mutated in place.
#[derive(Clone)]
pub struct ScrollBehavior {
    panels: Panels,
    axis: Axis,
    prefer_self_first: Option<Rc<PreferSelfFirstFn>>,
    overscroll_min: i32,
    overscroll_max: i32,
}

impl ScrollBehavior {
    /// Starts a behavior around the mandatory content panel.
    pub fn builder(content: Rc<dyn Panel>) -> ScrollBehaviorBuilder {
        ScrollBehaviorBuilder::new(content)
    }

    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn overscroll(&self) -> (i32, i32) {
        (self.overscroll_min, self.overscroll_max)
    }

    /// Whether the container should move before its active target.
    ///
    /// Without an override the container takes precedence while its offset
    /// is inside an overscroll band, until it is back in the settled range.
    pub fn prefers_self_first(
        &self,
        scope: &ContainerScope,
        delta: i32,
        input_type: InputType,
    ) -> bool {
        match &self.prefer_self_first {
            Some(predicate) => predicate(scope, delta, input_type),
            None => scope.bounds.in_overscroll_band(scope.offset),
        }
    }
}

impl fmt::Debug for ScrollBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollBehavior")
            .field("panels", &self.panels)
            .field("axis", &self.axis)
            .field("prefer_self_first", &self.prefer_self_first.is_some())
            .field("overscroll_min", &self.overscroll_min)
            .field("overscroll_max", &self.overscroll_max)
            .finish()
    }
}

pub struct ScrollBehaviorBuilder {
    panels: Panels,
    axis: Axis,
    prefer_self_first: Option<Rc<PreferSelfFirstFn>>,
    overscroll_min: i32,
    overscroll_max: i32,
}

impl ScrollBehaviorBuilder {
    fn new(content: Rc<dyn Panel>) -> Self {
        Self {
            panels: Panels {
                previous: None,
                content: Some(PanelEntry::new(content, TargetResolver::DescendantSearch)),
                next: None,
            },
            axis: Axis::Vertical,
            prefer_self_first: None,
            overscroll_min: 0,
            overscroll_max: 0,
        }
    }

    pub fn content_resolver(mut self, resolver: TargetResolver) -> Self {
        if let Some(entry) = self.panels.content.as_mut() {
            entry.resolver = resolver;
        }
        self
    }

    pub fn previous(mut self, panel: Rc<dyn Panel>, resolver: TargetResolver) -> Self {
        self.panels.previous = Some(PanelEntry::new(panel, resolver));
        self
    }

    pub fn next(mut self, panel: Rc<dyn Panel>, resolver: TargetResolver) -> Self {
        self.panels.next = Some(PanelEntry::new(panel, resolver));
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Extra distance the container may travel past its settled bounds
    /// before `Previous` (`min`) and after `Next` (`max`).
    pub fn overscroll(mut self, min: i32, max: i32) -> Self {
        self.overscroll_min = min;
        self.overscroll_max = max;
        self
    }

    pub fn prefer_self_first(
        mut self,
        predicate: impl Fn(&ContainerScope, i32, InputType) -> bool + 'static,
    ) -> Self {
        self.prefer_self_first = Some(Rc::new(predicate));
        self
    }

    pub fn build(self) -> Result<ScrollBehavior, BehaviorError> {
        if self.overscroll_min < 0 || self.overscroll_max < 0 {
            return Err(BehaviorError::NegativeOverscroll {
                min: self.overscroll_min,
                max: self.overscroll_max,
            });
        }

        let installed: SmallVec<[(PanelSlot, *const ()); 3]> = self
            .panels
            .iter()
            .map(|(slot, entry)| (slot, Rc::as_ptr(&entry.panel) as *const ()))
            .collect();
        for (i, (first, ptr)) in installed.iter().enumerate() {
            if let Some((second, _)) = installed[i + 1..].iter().find(|(_, other)| other == ptr) {
                return Err(BehaviorError::DuplicatePanel {
                    first: *first,
                    second: *second,
                });
            }
        }

        Ok(ScrollBehavior {
            panels: self.panels,
            axis: self.axis,
            prefer_self_first: self.prefer_self_first,
            overscroll_min: self.overscroll_min,
            overscroll_max: self.overscroll_max,
        })
    }
}

#[cfg(test)]
#[path = "tests/behavior_tests.rs"]
mod tests;
