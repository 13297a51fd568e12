use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BehaviorError {
    #[error("overscroll allowances must be non-negative, got min {min} max {max}")]
    NegativeOverscroll { min: i32, max: i32 },

    #[error("the same panel was installed in both the {first:?} and {second:?} slots")]
    DuplicatePanel {
        first: stackscroll_ui_layout::PanelSlot,
        second: stackscroll_ui_layout::PanelSlot,
    },
}
