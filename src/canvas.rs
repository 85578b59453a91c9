//! Persistent stroke layer and the mask-based overlay onto live video.
//!
//! The canvas starts all black (the background colour) and only ever
//! changes when a stroke is committed or the user explicitly clears it.
//! Compositing is a hard overlay, no alpha:
//!
//! 1. canvas -> intensity -> binary mask (drawn = foreground), inverted;
//! 2. `live AND inverted_mask` blacks out pixels under strokes;
//! 3. `... OR canvas` stamps the stroke colours back in.

use crate::draw::draw_thick_line;
use crate::error::Error;
use crate::palette::{DrawColor, BACKGROUND};
use crate::types::{FrameBuffer, Mask, Segment, MASK_OFF, MASK_ON};

pub struct Canvas {
    layer: FrameBuffer,
    threshold: u8,
}

impl Canvas {
    /// Fresh, empty canvas the size of the video frame.
    pub fn new(width: usize, height: usize, threshold: u8) -> Self {
        Self { layer: FrameBuffer::filled(width, height, BACKGROUND), threshold }
    }

    #[cfg(test)]
    pub fn layer(&self) -> &FrameBuffer {
        &self.layer
    }

    /// Fails with `FrameSize` unless `frame` matches the canvas size.
    pub fn fits(&self, frame: &FrameBuffer) -> Result<(), Error> {
        self.layer.ensure_same_size(frame)
    }

    /// Commit one segment. Zero-length segments leave the canvas untouched.
    /// Returns whether anything was drawn.
    pub fn stroke(&mut self, segment: Segment, color: DrawColor, thickness: u32) -> bool {
        if segment.is_zero_length() {
            return false;
        }
        draw_thick_line(&mut self.layer, segment.from, segment.to, thickness, color.canvas_pixel());
        true
    }

    /// Explicit user request only; nothing in the pipeline calls this.
    pub fn clear(&mut self) {
        self.layer.pixels.fill(BACKGROUND);
    }

    /// Inverted stroke mask: MASK_ON where the live frame should show through.
    pub fn inverted_mask(&self) -> Mask {
        let bits = self
            .layer
            .pixels
            .iter()
            .map(|&px| if intensity(px) > self.threshold { MASK_OFF } else { MASK_ON })
            .collect();
        Mask { width: self.layer.width, height: self.layer.height, bits }
    }

    /// Overlay the canvas onto `live`, producing the frame to display.
    pub fn composite(&self, live: &FrameBuffer) -> Result<FrameBuffer, Error> {
        let mut out = live.clone();
        self.composite_in_place(&mut out)?;
        Ok(out)
    }

    pub fn composite_in_place(&self, frame: &mut FrameBuffer) -> Result<(), Error> {
        self.fits(frame)?;
        let mask = self.inverted_mask();
        debug_assert_eq!((mask.width, mask.height), frame.dimensions());
        for ((px, &keep), &ink) in frame.pixels.iter_mut().zip(&mask.bits).zip(&self.layer.pixels) {
            *px = (*px & keep) | ink;
        }
        Ok(())
    }
}

/// Single-channel luma (BT.601 weights, rounded) of a 0x00RRGGBB pixel.
pub fn intensity(px: u32) -> u8 {
    let r = (px >> 16) & 0xFF;
    let g = (px >> 8) & 0xFF;
    let b = px & 0xFF;
    ((299 * r + 587 * g + 114 * b + 500) / 1000) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLUE, GREEN, MAGENTA};

    const LIVE: u32 = 0x00_40_80_C0;

    fn seg(a: (i32, i32), b: (i32, i32)) -> Segment {
        Segment::new(a.into(), b.into())
    }

    #[test]
    fn palette_colours_are_all_above_threshold() {
        for c in [MAGENTA, BLUE, GREEN] {
            assert!(intensity(c) > 0, "{c:06x}");
        }
        assert_eq!(intensity(BACKGROUND), 0);
        assert_eq!(intensity(0x00FFFFFF), 255);
    }

    #[test]
    fn empty_canvas_passes_live_through() {
        let canvas = Canvas::new(8, 8, 0);
        let live = FrameBuffer::filled(8, 8, LIVE);
        assert_eq!(canvas.composite(&live).unwrap(), live);
    }

    #[test]
    fn stroke_then_composite_is_exact() {
        let mut canvas = Canvas::new(60, 30, 0);
        let color = DrawColor::Paint(BLUE);
        assert!(canvas.stroke(seg((10, 15), (50, 15)), color, 5));
        let live = FrameBuffer::filled(60, 30, LIVE);
        let out = canvas.composite(&live).unwrap();

        for x in 10..=50 {
            assert_eq!(out.get(x, 15), Some(BLUE));
        }
        // everything the canvas did not touch is the live pixel
        for (i, &px) in out.pixels.iter().enumerate() {
            if canvas.layer().pixels[i] == BACKGROUND {
                assert_eq!(px, LIVE);
            } else {
                assert_eq!(px, BLUE);
            }
        }
        assert_eq!(out.get(30, 0), Some(LIVE));
    }

    #[test]
    fn zero_length_segment_changes_nothing() {
        let mut canvas = Canvas::new(20, 20, 0);
        let before = canvas.layer().clone();
        assert!(!canvas.stroke(seg((5, 5), (5, 5)), DrawColor::Paint(GREEN), 15));
        assert_eq!(canvas.layer(), &before);
    }

    #[test]
    fn eraser_removes_a_wider_band() {
        let mut canvas = Canvas::new(100, 100, 0);
        canvas.stroke(seg((10, 50), (90, 50)), DrawColor::Paint(MAGENTA), 15);
        assert_eq!(canvas.layer().get(50, 57), Some(MAGENTA));
        assert_eq!(canvas.layer().get(50, 60), Some(BACKGROUND));

        canvas.stroke(seg((10, 50), (90, 50)), DrawColor::Eraser, 40);
        for y in 30..=70 {
            assert_eq!(canvas.layer().get(50, y), Some(BACKGROUND), "y={y}");
        }
        // after erasing, live shows through again
        let live = FrameBuffer::filled(100, 100, LIVE);
        assert_eq!(canvas.composite(&live).unwrap().get(50, 50), Some(LIVE));
    }

    #[test]
    fn strokes_accumulate_across_frames() {
        let mut canvas = Canvas::new(50, 50, 0);
        canvas.stroke(seg((0, 5), (10, 5)), DrawColor::Paint(GREEN), 3);
        canvas.stroke(seg((0, 40), (10, 40)), DrawColor::Paint(BLUE), 3);
        let live = FrameBuffer::filled(50, 50, LIVE);
        let out = canvas.composite(&live).unwrap();
        assert_eq!(out.get(5, 5), Some(GREEN));
        assert_eq!(out.get(5, 40), Some(BLUE));

        canvas.clear();
        assert_eq!(canvas.composite(&live).unwrap(), live);
    }

    #[test]
    fn threshold_leaves_dim_ink_blended() {
        // With a high threshold, dark ink is not masked and gets ORed into live.
        let mut canvas = Canvas::new(10, 10, 50);
        canvas.stroke(seg((0, 0), (9, 0)), DrawColor::Paint(BLUE), 1);
        let out = canvas.composite(&FrameBuffer::filled(10, 10, 0x00_80_00_00)).unwrap();
        assert_eq!(out.get(3, 0), Some(0x00_80_00_FF));
        assert!(canvas.inverted_mask().bits.iter().all(|&b| b == MASK_ON));
    }

    #[test]
    fn size_mismatch_is_an_error() {
        let canvas = Canvas::new(10, 10, 0);
        let live = FrameBuffer::new(12, 10);
        assert!(matches!(canvas.composite(&live), Err(Error::FrameSize { .. })));
    }
}
