//! Testing utilities for stackscroll
//!
//! - [`FakeScrollTarget`] and [`FakePanel`] stand in for host views.
//! - [`GestureRobot`] scripts pointer sequences and pumps fling frames
//!   against a [`NestedScrollLayout`](stackscroll_ui::NestedScrollLayout).

pub mod fake;
pub mod robot;

pub use fake::*;
pub use robot::*;

pub mod prelude {
    pub use crate::fake::{FakePanel, FakeScrollTarget};
    pub use crate::robot::{three_panel_stack, GestureRobot, StackFixture};
}
