/// One of the three stacked regions of the container.
///
/// Order is fixed: `Previous` sits before the content origin, `Content`
/// starts at it and `Next` follows `Content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelSlot {
    Previous,
    Content,
    Next,
}

impl PanelSlot {
    /// Ordered view used for index-based hand-off traversal.
    pub const ORDER: [PanelSlot; 3] = [PanelSlot::Previous, PanelSlot::Content, PanelSlot::Next];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            PanelSlot::Previous => 0,
            PanelSlot::Content => 1,
            PanelSlot::Next => 2,
        }
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ORDER.get(index).copied()
    }

    /// The neighbouring slot in the direction of `delta`: positive deltas
    /// move toward `Next`, negative ones toward `Previous`.
    ///
    /// Returns `None` at the ends of the stack and for a zero delta.
    pub fn neighbor(self, delta: i32) -> Option<Self> {
        match delta.signum() {
            1 => Self::from_index(self.index() + 1),
            -1 => self.index().checked_sub(1).and_then(Self::from_index),
            _ => None,
        }
    }
}
