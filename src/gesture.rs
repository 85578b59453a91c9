// Finger posture -> interaction mode.

use crate::fingers::FingerStates;
use crate::palette::DrawColor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Select,
    Draw,
    Erase,
}

impl Mode {
    /// Precedence: index+middle up is Select, index alone is Draw,
    /// anything else is Idle. Thumb, ring and pinky never matter.
    /// Never returns `Erase`; see [`Mode::with_color`].
    pub fn resolve(fingers: FingerStates) -> Mode {
        match (fingers.index(), fingers.middle()) {
            (true, true) => Mode::Select,
            (true, false) => Mode::Draw,
            _ => Mode::Idle,
        }
    }

    /// Erase is Draw with the eraser selected.
    pub fn with_color(self, color: DrawColor) -> Mode {
        match self {
            Mode::Draw if color.is_eraser() => Mode::Erase,
            other => other,
        }
    }

    /// Draw or Erase: the modes that lay down strokes.
    pub fn is_stroking(self) -> bool {
        matches!(self, Mode::Draw | Mode::Erase)
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Idle => "IDLE",
            Mode::Select => "SELECT",
            Mode::Draw => "DRAW",
            Mode::Erase => "ERASE",
        }
    }
}
