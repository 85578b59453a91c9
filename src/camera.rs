// Opens the camera and converts frames into a 0x00RRGGBB buffer for the window.
// Optional horizontal mirroring so the picture behaves like a mirror when you draw.

use crate::error::Error;
use crate::types::FrameBuffer;
use tracing::{info, warn};

use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

use image::{ImageBuffer, Rgb};

pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
    mirror: bool,
}

impl CameraCapture {
    /// Open camera `index` near the requested resolution and start streaming.
    pub fn new(index: u32, width: u32, height: u32, mirror: bool) -> Result<Self, Error> {
        let idx = CameraIndex::Index(index);

        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            30,                // target FPS
        );

        // Ask for RGB frames, closest match to our request.
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(idx, req)
            .map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;

        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // The stream might choose a slightly different resolution.
        let actual = cam.resolution();
        info!(
            "Camera stream open: requested {width}x{height}, got {}x{} (mirror: {mirror})",
            actual.width(),
            actual.height()
        );

        Ok(Self {
            cam,
            width: actual.width(),
            height: actual.height(),
            mirror,
        })
    }

    /// Grab one frame (blocks until the camera has one) as 0x00RRGGBB pixels.
    pub fn next_frame(&mut self) -> Result<FrameBuffer, Error> {
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;

        let rgb_img = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode RGB: {e}")))?;

        Ok(pack_rgb(&rgb_img, self.mirror))
    }

    /// Report the actual resolution the camera is delivering.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Lets the session ride out a few bad grabs in a row (a corrupt frame, a
/// decode hiccup) but gives up once the stream looks dead.
pub struct DropoutGuard {
    limit: u32,  // consecutive bad frames tolerated
    streak: u32,
}

impl DropoutGuard {
    pub fn new(limit: u32) -> Self {
        Self { limit, streak: 0 }
    }

    /// `Ok(Some(frame))` to process, `Ok(None)` to skip this iteration,
    /// `Err` when the error is fatal or the streak ran past the limit.
    pub fn check(&mut self, grabbed: Result<FrameBuffer, Error>) -> Result<Option<FrameBuffer>, Error> {
        match grabbed {
            Ok(frame) => {
                self.streak = 0;
                Ok(Some(frame))
            }
            Err(e) if e.is_frame_local() && self.streak < self.limit => {
                self.streak += 1;
                warn!("Dropped camera frame ({}/{}): {e}", self.streak, self.limit);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Pack an RGB image into 0x00RRGGBB, flipping left/right when `mirror` is set.
pub fn pack_rgb(img: &ImageBuffer<Rgb<u8>, Vec<u8>>, mirror: bool) -> FrameBuffer {
    let (w, h) = img.dimensions();
    let mut out = Vec::with_capacity((w as usize) * (h as usize));
    for y in 0..h {
        for x in 0..w {
            let sx = if mirror { w - 1 - x } else { x };
            let [r, g, b] = img.get_pixel(sx, y).0;
            out.push(((r as u32) << 16) | ((g as u32) << 8) | b as u32);
        }
    }
    FrameBuffer { width: w as usize, height: h as usize, pixels: out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_and_mirrors() {
        let mut img = ImageBuffer::<Rgb<u8>, Vec<u8>>::new(3, 1);
        img.put_pixel(0, 0, Rgb([0x11, 0x22, 0x33]));
        img.put_pixel(2, 0, Rgb([0xAA, 0xBB, 0xCC]));

        let plain = pack_rgb(&img, false);
        assert_eq!(plain.pixels, vec![0x112233, 0, 0xAABBCC]);

        let flipped = pack_rgb(&img, true);
        assert_eq!(flipped.pixels, vec![0xAABBCC, 0, 0x112233]);
        assert_eq!(flipped.dimensions(), (3, 1));
    }

    fn bad_frame() -> Result<FrameBuffer, Error> {
        Err(Error::CameraFrame("Decode RGB: truncated".into()))
    }

    #[test]
    fn single_bad_frame_is_skipped() {
        let mut guard = DropoutGuard::new(3);
        assert!(guard.check(bad_frame()).unwrap().is_none());
        let frame = guard.check(Ok(FrameBuffer::new(2, 2))).unwrap();
        assert_eq!(frame, Some(FrameBuffer::new(2, 2)));
    }

    #[test]
    fn good_frame_resets_the_streak() {
        let mut guard = DropoutGuard::new(2);
        for _ in 0..5 {
            assert!(guard.check(bad_frame()).unwrap().is_none());
            assert!(guard.check(bad_frame()).unwrap().is_none());
            assert!(guard.check(Ok(FrameBuffer::new(1, 1))).unwrap().is_some());
        }
    }

    #[test]
    fn dead_stream_ends_after_the_limit() {
        let mut guard = DropoutGuard::new(2);
        assert!(guard.check(bad_frame()).is_ok());
        assert!(guard.check(bad_frame()).is_ok());
        assert!(matches!(guard.check(bad_frame()), Err(Error::CameraFrame(_))));
    }

    #[test]
    fn fatal_errors_pass_straight_through() {
        let mut guard = DropoutGuard::new(10);
        let err = guard.check(Err(Error::CameraInit("gone".into())));
        assert!(matches!(err, Err(Error::CameraInit(_))));
    }
}
