// Core pixel/geometry types shared by every stage of the painter.

use crate::error::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// All-black frame (0x000000 everywhere). This is also an empty canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Frame filled with one colour; handy for tests and placeholders.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Pixel at (x,y), or None when outside the frame.
    #[cfg(test)]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Fails unless `other` has exactly our width and height.
    pub fn ensure_same_size(&self, other: &FrameBuffer) -> Result<(), Error> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::FrameSize {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }
}

/// A pixel position in frame coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A line segment the stroke tracker wants committed to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// The fingertip did not move between frames.
    pub fn is_zero_length(&self) -> bool {
        self.from == self.to
    }
}

/// Binary per-pixel mask used by the compositor.
/// Each entry is either 0x00FFFFFF (keep the live pixel) or 0 (a stroke covers it),
/// so it can be ANDed straight into a 0x00RRGGBB frame.
pub struct Mask {
    pub width: usize,
    pub height: usize,
    pub bits: Vec<u32>,
}

pub const MASK_ON: u32 = 0x00_FF_FF_FF;
pub const MASK_OFF: u32 = 0;
