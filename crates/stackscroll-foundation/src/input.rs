use stackscroll_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer sample delivered by the host, in the container's viewport
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    /// Host uptime in milliseconds; only differences between samples matter.
    pub uptime_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_ms: i64) -> Self {
        Self {
            kind,
            position,
            uptime_ms,
        }
    }

    pub fn down(position: Point, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, position, uptime_ms)
    }

    pub fn moved(position: Point, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, position, uptime_ms)
    }

    pub fn up(position: Point, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, position, uptime_ms)
    }

    pub fn cancel(position: Point, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, position, uptime_ms)
    }
}

/// Origin of a scroll delta.
///
/// `Touch` deltas come from a finger that is still down; `NonTouch` deltas
/// are produced after release (fling ticks, programmatic scrolling).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputType {
    Touch,
    NonTouch,
}

impl InputType {
    #[inline]
    pub fn is_touch(self) -> bool {
        matches!(self, InputType::Touch)
    }
}
