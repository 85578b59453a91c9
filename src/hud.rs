// Display-only overlay drawn on top of the composited frame.
// Nothing here ever touches the canvas.

use crate::draw::{draw_text_5x7, fill_disc, fill_rect, stroke_rect};
use crate::gesture::Mode;
use crate::landmarks::{LandmarkSnapshot, THUMB_TIP, WRIST};
use crate::palette::{DrawColor, Palette};
use crate::session::FrameReport;
use crate::types::{FrameBuffer, Point};

const WHITE: u32 = 0x00_FF_FF_FF;
const GREY: u32 = 0x00_60_60_60;
const HIGHLIGHT: u32 = 0x00_FF_00_FF;
const LANDMARK: u32 = 0x00_00_C0_FF;

/// How a brush looks on screen (the eraser is shown as a grey swatch).
fn swatch_color(c: DrawColor) -> u32 {
    match c {
        DrawColor::Paint(rgb) => rgb,
        DrawColor::Eraser => GREY,
    }
}

/// Palette zones along the top; the active one gets a white outline.
pub fn draw_palette(fb: &mut FrameBuffer, palette: &Palette, active: DrawColor) {
    for z in &palette.zones {
        let a = Point::new(z.x_min + 1, 8);
        let b = Point::new(z.x_max - 1, z.y_max - 8);
        fill_rect(fb, a, b, swatch_color(z.color));
        if z.color == DrawColor::Eraser {
            draw_text_5x7(fb, a.x + 6, b.y - 14, "ERASE", WHITE);
        }
        if z.color == active {
            stroke_rect(fb, a, b, 3, WHITE);
        }
    }
}

/// Mode feedback at the fingertip: a bar between index and middle tips in
/// Select mode, a dot at the index tip while drawing or erasing.
pub fn draw_pointer(fb: &mut FrameBuffer, report: &FrameReport, brush: u32) {
    let (Some(index), Some(middle)) = (report.index_tip(), report.middle_tip()) else {
        return;
    };
    let color = swatch_color(report.color);
    match report.mode {
        Mode::Select => fill_rect(
            fb,
            Point::new(index.x, index.y - 25),
            Point::new(middle.x, middle.y + 25),
            color,
        ),
        Mode::Draw | Mode::Erase => fill_disc(fb, index.x, index.y, (brush / 2) as i32, color),
        Mode::Idle => {}
    }
}

/// Small dots on every landmark; wrist and thumb tip drawn larger.
pub fn draw_landmarks(fb: &mut FrameBuffer, hand: &LandmarkSnapshot) {
    for lm in hand.landmarks() {
        let r = if lm.id == WRIST || lm.id == THUMB_TIP { 8 } else { 3 };
        let c = if r > 3 { HIGHLIGHT } else { LANDMARK };
        fill_disc(fb, lm.x, lm.y, r, c);
    }
}

/// Bottom-left status line, e.g. "DRAW | FPS: 29.8".
pub fn draw_status(fb: &mut FrameBuffer, mode: Mode, hand_seen: bool, fps_text: &str) {
    let state = if hand_seen { mode.label() } else { "NO HAND" };
    let y = fb.height as i32 - 14;
    draw_text_5x7(fb, 8, y, &format!("{state} | {fps_text}"), WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLUE, MAGENTA};

    #[test]
    fn palette_header_stays_in_its_band() {
        let mut fb = FrameBuffer::new(1280, 200);
        draw_palette(&mut fb, &Palette::default(), DrawColor::Paint(BLUE));
        assert_eq!(fb.get(300, 60), Some(MAGENTA));
        assert_eq!(fb.get(600, 60), Some(BLUE));
        assert_eq!(fb.get(552, 10), Some(WHITE)); // outline on the active zone
        assert!((0..1280).all(|x| fb.get(x, 130) == Some(0)));
    }

    #[test]
    fn status_line_renders() {
        let mut fb = FrameBuffer::new(200, 40);
        draw_status(&mut fb, Mode::Select, true, "FPS: 30.0");
        assert!(fb.pixels.iter().any(|&p| p == WHITE));
    }
}
