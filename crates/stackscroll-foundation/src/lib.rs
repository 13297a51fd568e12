//! Input types, the nested-scroll protocol and velocity tracking for stackscroll

mod config;
pub mod gesture_constants;
mod input;
mod nested_scroll;
mod velocity_tracker;

pub use config::*;
pub use input::*;
pub use nested_scroll::*;
pub use velocity_tracker::*;

pub use stackscroll_ui_graphics::{IntRect, IntSize, Point};
pub use stackscroll_ui_layout::{Axis, PanelSlot};
