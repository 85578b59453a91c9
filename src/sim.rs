//! Mouse-driven stand-in for a real hand/landmark detector.
//!
//! Builds a plausible 21-point hand under the pointer every frame:
//!
//! * left button held: index finger up (Draw pose)
//! * right button held: index + middle up (Select pose)
//! * no button: closed fist (Idle)
//! * pointer outside the window: no hand at all
//!
//! The index fingertip (landmark 8) always lands exactly on the pointer.

use crate::error::Error;
use crate::landmarks::{HandDetector, LandmarkSnapshot, LANDMARK_COUNT};
use crate::types::{FrameBuffer, Point};

/// What the pointer is doing this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerInput {
    pub pos: Option<Point>,
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Default)]
pub struct SimulatedHand {
    input: PointerInput,
}

impl SimulatedHand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's pointer state before calling `detect`.
    pub fn set_input(&mut self, input: PointerInput) {
        self.input = input;
    }

    fn pose(&self, tip: Point) -> LandmarkSnapshot {
        let index_up = self.input.left || self.input.right;
        let middle_up = self.input.right;
        let (x, y) = (tip.x, tip.y);

        // Hand hangs below the index tip; finger columns spread to the right.
        let mut pts = [(0i32, 0i32); LANDMARK_COUNT];
        pts[0] = (x + 30, y + 180);
        // thumb tucked across the palm: tip left of its joint
        pts[1] = (x - 10, y + 160);
        pts[2] = (x - 25, y + 140);
        pts[3] = (x - 30, y + 120);
        pts[4] = (x - 40, y + 115);

        let fingers = [(5, 0, index_up), (9, 20, middle_up), (13, 40, false), (17, 60, false)];
        for (base, dx, up) in fingers {
            let fx = x + dx;
            let knuckle = if up { y + 90 } else { y + 110 };
            pts[base] = (fx, knuckle);
            if up {
                pts[base + 1] = (fx, y + 60);
                pts[base + 2] = (fx, y + 30);
                pts[base + 3] = (fx, y);
            } else {
                // curled: tip folds back below the middle joint
                pts[base + 1] = (fx, y + 80);
                pts[base + 2] = (fx + 5, y + 90);
                pts[base + 3] = (fx + 5, y + 100);
            }
        }
        if !index_up {
            // keep landmark 8 on the pointer even when curled
            pts[8] = (x, y);
            pts[6] = (x, y - 10);
        }
        LandmarkSnapshot::from_points(&pts)
    }
}

impl HandDetector for SimulatedHand {
    fn detect(&mut self, frame: &FrameBuffer) -> Result<Vec<LandmarkSnapshot>, Error> {
        if frame.pixels.is_empty() {
            return Err(Error::Detector("empty frame".into()));
        }
        match self.input.pos {
            Some(p) if frame.index_of(p.x, p.y).is_some() => Ok(vec![self.pose(p)]),
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingers::FingerStates;
    use crate::gesture::Mode;

    fn detect(left: bool, right: bool, pos: Option<(i32, i32)>) -> Vec<LandmarkSnapshot> {
        let mut sim = SimulatedHand::new();
        sim.set_input(PointerInput { pos: pos.map(Point::from), left, right });
        sim.detect(&FrameBuffer::new(640, 480)).unwrap()
    }

    fn mode_of(hands: &[LandmarkSnapshot]) -> Mode {
        Mode::resolve(FingerStates::classify(&hands[0]).unwrap())
    }

    #[test]
    fn buttons_map_to_modes() {
        assert_eq!(mode_of(&detect(true, false, Some((200, 200)))), Mode::Draw);
        assert_eq!(mode_of(&detect(false, true, Some((200, 200)))), Mode::Select);
        assert_eq!(mode_of(&detect(true, true, Some((200, 200)))), Mode::Select);
        assert_eq!(mode_of(&detect(false, false, Some((200, 200)))), Mode::Idle);
    }

    #[test]
    fn index_tip_tracks_pointer() {
        for (l, r) in [(true, false), (false, true), (false, false)] {
            let hands = detect(l, r, Some((321, 123)));
            assert_eq!(hands[0].index_tip(), Some(Point::new(321, 123)));
            assert_eq!(hands[0].len(), LANDMARK_COUNT);
        }
    }

    #[test]
    fn thumb_stays_down() {
        let hands = detect(true, false, Some((100, 100)));
        assert!(!FingerStates::classify(&hands[0]).unwrap().thumb());
    }

    #[test]
    fn empty_frame_is_a_detector_error() {
        let mut sim = SimulatedHand::new();
        sim.set_input(PointerInput { pos: Some(Point::new(0, 0)), left: true, right: false });
        assert!(matches!(sim.detect(&FrameBuffer::new(0, 0)), Err(Error::Detector(_))));
    }

    #[test]
    fn no_pointer_means_no_hand() {
        assert!(detect(true, false, None).is_empty());
        assert!(detect(true, false, Some((640, 10))).is_empty());
    }
}
