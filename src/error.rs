// One error type for the whole painter.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Camera init error: {0}")]
    CameraInit(String), // Opening/starting the camera failed
    #[error("Camera frame error: {0}")]
    CameraFrame(String), // Grabbing/decoding a frame failed
    #[error("Hand detector error: {0}")]
    Detector(String), // The landmark detector could not process a frame
    #[error("Malformed hand: expected 21 landmarks, got {count}")]
    MalformedInput { count: usize },
    #[error("Frame size mismatch: expected {expected:?}, got {actual:?}")]
    FrameSize {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl Error {
    /// Errors that only spoil the current frame; the session keeps going.
    pub fn is_frame_local(&self) -> bool {
        matches!(
            self,
            Error::CameraFrame(_)
                | Error::Detector(_)
                | Error::MalformedInput { .. }
                | Error::FrameSize { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_setup_and_window_errors_are_fatal() {
        assert!(Error::CameraFrame("Decode RGB: bad MJPEG".into()).is_frame_local());
        assert!(Error::Detector("no model".into()).is_frame_local());
        assert!(Error::MalformedInput { count: 3 }.is_frame_local());
        assert!(Error::FrameSize { expected: (4, 4), actual: (4, 3) }.is_frame_local());

        assert!(!Error::CameraInit("Open stream: busy".into()).is_frame_local());
        assert!(!Error::WindowInit("no display".into()).is_frame_local());
        assert!(!Error::WindowUpdate("lost surface".into()).is_frame_local());
    }
}
