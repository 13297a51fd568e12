//! Nested-scroll container for a Previous / Content / Next panel stack
//!
//! [`NestedScrollLayout`] decides, for every pointer move, nested-scroll
//! notification and fling frame, whether the container, the active inner
//! scrollable, or a neighbouring panel consumes the motion.

mod behavior;
mod dispatch;
mod error;
mod fling;
mod gesture;
mod layout;
mod target;

pub use behavior::*;
pub use dispatch::*;
pub use error::*;
pub use fling::*;
pub use gesture::*;
pub use layout::*;
pub use target::*;

pub use stackscroll_foundation::{
    InputSource, InputType, Panel, PointerEvent, PointerEventKind, ScrollConfig, ScrollTarget,
};
pub use stackscroll_ui_layout::{Axis, Bounds, PanelSlot};

pub mod prelude {
    pub use crate::behavior::{ContainerScope, ScrollBehavior, TargetResolver};
    pub use crate::dispatch::DispatchOutcome;
    pub use crate::layout::{NestedScrollLayout, SharedLayout};
    pub use stackscroll_foundation::{
        InputSource, InputType, Panel, PointerEvent, ScrollConfig, ScrollTarget,
    };
    pub use stackscroll_ui_graphics::{IntSize, Point};
    pub use stackscroll_ui_layout::{Axis, PanelSlot};
}
