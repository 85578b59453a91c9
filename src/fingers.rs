// Up/down state per finger from one hand's landmarks.

use crate::error::Error;
use crate::landmarks::{LandmarkSnapshot, THUMB_IP, THUMB_TIP, TIP_IDS};

/// Thumb, index, middle, ring, pinky. `true` = finger up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerStates(pub [bool; 5]);

impl FingerStates {
    pub const THUMB: usize = 0;
    pub const INDEX: usize = 1;
    pub const MIDDLE: usize = 2;
    #[cfg(test)]
    pub const RING: usize = 3;
    #[cfg(test)]
    pub const PINKY: usize = 4;

    /// Classify one hand.
    ///
    /// Thumb: tip x beyond the joint before it (landmark 4 vs 3) means up.
    /// There is no handedness correction, so this assumes the hand faces the
    /// camera the same way every time. Other fingers: tip strictly above
    /// (smaller y) the joint two links down the same finger means up.
    pub fn classify(hand: &LandmarkSnapshot) -> Result<Self, Error> {
        hand.validate()?;
        let lm = hand.landmarks();
        let mut up = [false; 5];

        up[Self::THUMB] = lm[THUMB_TIP].x > lm[THUMB_IP].x;

        for finger in 1..5 {
            let tip = TIP_IDS[finger];
            up[finger] = lm[tip].y < lm[tip - 2].y;
        }
        Ok(Self(up))
    }

    #[cfg(test)]
    pub fn thumb(&self) -> bool { self.0[Self::THUMB] }
    pub fn index(&self) -> bool { self.0[Self::INDEX] }
    pub fn middle(&self) -> bool { self.0[Self::MIDDLE] }
    #[cfg(test)]
    pub fn ring(&self) -> bool { self.0[Self::RING] }
    #[cfg(test)]
    pub fn pinky(&self) -> bool { self.0[Self::PINKY] }
}

impl From<[u8; 5]> for FingerStates {
    fn from(bits: [u8; 5]) -> Self {
        Self(bits.map(|b| b != 0))
    }
}
