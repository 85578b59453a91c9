//! One painting session: classify -> resolve -> track -> composite, per frame.
//!
//! The session owns all the mutable state (canvas, stroke cursor, brush
//! colour) and nothing else touches it. Bad or empty frames never end a
//! session: they are logged and treated as "no hand", which also breaks the
//! current stroke.

use crate::canvas::Canvas;
use crate::config::PainterConfig;
use crate::error::Error;
use crate::fingers::FingerStates;
use crate::gesture::Mode;
use crate::landmarks::{HandDetector, LandmarkSnapshot};
use crate::palette::{DrawColor, Palette};
use crate::stroke::{stroke_thickness, StrokeTracker};
use crate::types::{FrameBuffer, Point, Segment};
use tracing::{debug, info, warn};

/// Everything the display side needs to know about one processed frame.
pub struct FrameReport {
    pub frame: FrameBuffer, // live + canvas, ready for HUD and display
    pub mode: Mode,
    pub color: DrawColor,
    pub segment: Option<Segment>,
    pub hand: Option<LandmarkSnapshot>,
}

impl FrameReport {
    pub fn index_tip(&self) -> Option<Point> {
        self.hand.as_ref().and_then(LandmarkSnapshot::index_tip)
    }

    pub fn middle_tip(&self) -> Option<Point> {
        self.hand.as_ref().and_then(LandmarkSnapshot::middle_tip)
    }
}

pub struct Session {
    canvas: Canvas,
    tracker: StrokeTracker,
    color: DrawColor,
    palette: Palette,
    brush_thickness: u32,
    eraser_thickness: u32,
    last_mode: Mode, // only for logging transitions
}

impl Session {
    pub fn new(width: usize, height: usize, cfg: &PainterConfig) -> Self {
        Self {
            canvas: Canvas::new(width, height, cfg.mask_threshold),
            tracker: StrokeTracker::new(),
            color: DrawColor::default(),
            palette: cfg.palette.clone(),
            brush_thickness: cfg.brush_thickness,
            eraser_thickness: cfg.eraser_thickness,
            last_mode: Mode::Idle,
        }
    }

    #[cfg(test)]
    pub fn color(&self) -> DrawColor {
        self.color
    }

    #[cfg(test)]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn clear_canvas(&mut self) {
        info!("Canvas cleared");
        self.canvas.clear();
    }

    /// Ask the detector for hands, then process. A detector failure only
    /// costs this frame.
    pub fn process_with<D: HandDetector>(
        &mut self,
        detector: &mut D,
        live: &FrameBuffer,
    ) -> Result<FrameReport, Error> {
        let hands = match detector.detect(live) {
            Ok(hands) => hands,
            Err(e) => {
                warn!("Skipping frame: {e}");
                Vec::new()
            }
        };
        self.process(live, &hands)
    }

    /// Run one frame. Only the first hand is used.
    pub fn process(
        &mut self,
        live: &FrameBuffer,
        hands: &[LandmarkSnapshot],
    ) -> Result<FrameReport, Error> {
        // Checked before anything else so a bad frame leaves no trace.
        if let Err(e) = self.canvas.fits(live) {
            warn!("Skipping frame: {e}");
            self.tracker.reset();
            self.last_mode = Mode::Idle;
            return Ok(FrameReport {
                frame: live.clone(),
                mode: Mode::Idle,
                color: self.color,
                segment: None,
                hand: None,
            });
        }

        // An empty landmark list is no hand, not a malformed one.
        let (mode, segment, hand) = match hands.first().filter(|h| !h.is_empty()) {
            None => {
                self.tracker.reset();
                (Mode::Idle, None, None)
            }
            Some(hand) => match self.track_hand(hand) {
                Ok((mode, segment)) => (mode, segment, Some(hand.clone())),
                Err(e) if e.is_frame_local() => {
                    warn!("Skipping frame: {e}");
                    self.tracker.reset();
                    (Mode::Idle, None, None)
                }
                Err(e) => return Err(e),
            },
        };

        if mode != self.last_mode {
            match mode {
                Mode::Select => info!("Selection mode activated"),
                Mode::Draw => info!("Drawing mode activated"),
                Mode::Erase => info!("Erasing mode activated"),
                Mode::Idle => debug!("Idle"),
            }
            self.last_mode = mode;
        }

        let frame = self.canvas.composite(live)?;
        Ok(FrameReport { frame, mode, color: self.color, segment, hand })
    }

    fn track_hand(&mut self, hand: &LandmarkSnapshot) -> Result<(Mode, Option<Segment>), Error> {
        let fingers = FingerStates::classify(hand)?;
        // classify() guarantees 21 landmarks, so the tip is present
        let tip = hand.index_tip().ok_or(Error::MalformedInput { count: hand.len() })?;

        let mut mode = Mode::resolve(fingers);
        if mode == Mode::Select {
            if let Some(picked) = self.palette.lookup(tip) {
                if picked != self.color {
                    info!(?picked, "Colour changed");
                    self.color = picked;
                }
            }
        }
        mode = mode.with_color(self.color);

        let segment = self.tracker.step(mode, tip);
        if let Some(seg) = segment {
            let thickness = stroke_thickness(mode, self.brush_thickness, self.eraser_thickness);
            self.canvas.stroke(seg, self.color, thickness);
        }
        Ok((mode, segment))
    }
}
