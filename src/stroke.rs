// Stroke tracker: remembers where the fingertip was last frame so
// consecutive Draw frames join up into continuous lines.

use crate::gesture::Mode;
use crate::types::{Point, Segment};

/// Last committed fingertip position. `None` = next Draw frame starts fresh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor(pub Option<Point>);

impl Cursor {
    pub const UNSET: Cursor = Cursor(None);

    #[cfg(test)]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// One frame of tracking.
    ///
    /// Any non-stroking mode clears the cursor, so lifting the hand into
    /// Select or Idle and coming back elsewhere never joins the two places.
    /// The first stroking frame only plants the cursor; later ones emit
    /// `previous -> tip` (zero length if the tip did not move).
    pub fn advance(self, mode: Mode, tip: Point) -> (Option<Segment>, Cursor) {
        if !mode.is_stroking() {
            return (None, Cursor::UNSET);
        }
        match self.0 {
            None => (None, Cursor(Some(tip))),
            Some(prev) => (Some(Segment::new(prev, tip)), Cursor(Some(tip))),
        }
    }
}

/// Session-owned wrapper around [`Cursor`].
#[derive(Debug, Default)]
pub struct StrokeTracker {
    cursor: Cursor,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn step(&mut self, mode: Mode, tip: Point) -> Option<Segment> {
        let (segment, next) = self.cursor.advance(mode, tip);
        self.cursor = next;
        segment
    }

    /// No usable hand this frame: behave like Select.
    pub fn reset(&mut self) {
        self.cursor = Cursor::UNSET;
    }
}

/// Brush width for the current stroke.
pub fn stroke_thickness(mode: Mode, brush: u32, eraser: u32) -> u32 {
    if mode == Mode::Erase { eraser } else { brush }
}
