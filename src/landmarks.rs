//! Per-frame hand landmarks and the boundary to whatever detects them.
//!
//! A detector hands back zero or more [`LandmarkSnapshot`]s per frame. Each
//! snapshot is the ordered 21-point hand model (0 = wrist, 4/8/12/16/20 =
//! fingertips) in frame pixel coordinates. Nothing carries over between
//! frames except index position.

use crate::error::Error;
use crate::types::{FrameBuffer, Point};

/// Landmarks in one hand.
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Fingertip ids in thumb, index, middle, ring, pinky order.
pub const TIP_IDS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landmark {
    pub id: usize,
    pub x: i32,
    pub y: i32,
}

impl Landmark {
    pub const fn new(id: usize, x: i32, y: i32) -> Self {
        Self { id, x, y }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One tracked hand for one frame. Immutable once built.
///
/// The count is not checked here; the finger classifier rejects anything
/// that is not exactly [`LANDMARK_COUNT`] long.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSnapshot {
    landmarks: Vec<Landmark>,
}

impl LandmarkSnapshot {
    #[cfg(test)]
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Build from bare (x, y) pairs; ids follow position.
    pub fn from_points(points: &[(i32, i32)]) -> Self {
        let landmarks = points
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Landmark::new(id, x, y))
            .collect();
        Self { landmarks }
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn get(&self, id: usize) -> Option<&Landmark> {
        self.landmarks.get(id)
    }

    /// Fails with `MalformedInput` unless there are exactly 21 landmarks.
    pub fn validate(&self) -> Result<(), Error> {
        if self.landmarks.len() != LANDMARK_COUNT {
            return Err(Error::MalformedInput { count: self.landmarks.len() });
        }
        Ok(())
    }

    pub fn index_tip(&self) -> Option<Point> {
        self.get(INDEX_TIP).map(Landmark::point)
    }

    pub fn middle_tip(&self) -> Option<Point> {
        self.get(MIDDLE_TIP).map(Landmark::point)
    }
}

/// Anything that can find hands in a frame.
///
/// Synchronous and frame-local: no smoothing across calls is assumed.
/// An empty Vec means no hand is visible.
pub trait HandDetector {
    fn detect(&mut self, frame: &FrameBuffer) -> Result<Vec<LandmarkSnapshot>, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_numbers_landmarks_by_position() {
        let pts: Vec<(i32, i32)> = (0..21).map(|i| (i * 10, i)).collect();
        let snap = LandmarkSnapshot::from_points(&pts);
        assert_eq!(snap.len(), LANDMARK_COUNT);
        assert!(snap.validate().is_ok());
        assert_eq!(snap.get(8), Some(&Landmark::new(8, 80, 8)));
        assert_eq!(snap.index_tip(), Some(Point::new(80, 8)));
        assert_eq!(snap.middle_tip(), Some(Point::new(120, 12)));
    }

    #[test]
    fn validate_rejects_short_hands() {
        let snap = LandmarkSnapshot::from_points(&[(0, 0); 20]);
        match snap.validate() {
            Err(Error::MalformedInput { count }) => assert_eq!(count, 20),
            other => panic!("expected MalformedInput, got {other:?}"),
        }
        assert!(LandmarkSnapshot::new(Vec::new()).is_empty());
    }
}
