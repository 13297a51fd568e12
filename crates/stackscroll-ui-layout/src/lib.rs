//! Layout contracts for the three-panel scroll stack
//!
//! Everything here is a pure function of measured extents: panel placement
//! along the scroll axis and the settled/overscroll bounds derived from it.

mod axis;
mod bounds;
mod placement;
mod slot;

pub use axis::*;
pub use bounds::*;
pub use placement::*;
pub use slot::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::bounds::{compute_bounds, Bounds, PanelExtents};
    pub use crate::placement::StackPlacement;
    pub use crate::slot::PanelSlot;
}
