// Colour palette: the fixed brush colours, the eraser, and the screen zones
// the index fingertip hovers over (in Select mode) to pick one.

use crate::types::Point;

/// Current brush. `Eraser` is the reserved sentinel: it paints the canvas
/// background colour with the wider eraser thickness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawColor {
    Paint(u32), // 0x00RRGGBB
    Eraser,
}

/// Canvas background. Erasing writes this colour back.
pub const BACKGROUND: u32 = 0x00_00_00_00;

pub const MAGENTA: u32 = 0x00_FF_00_FF;
pub const BLUE: u32 = 0x00_00_00_FF;
pub const GREEN: u32 = 0x00_00_FF_00;

impl DrawColor {
    /// The pixel value this brush writes into the canvas.
    pub fn canvas_pixel(self) -> u32 {
        match self {
            DrawColor::Paint(rgb) => rgb,
            DrawColor::Eraser => BACKGROUND,
        }
    }

    pub fn is_eraser(self) -> bool {
        matches!(self, DrawColor::Eraser)
    }
}

impl Default for DrawColor {
    fn default() -> Self {
        DrawColor::Paint(MAGENTA)
    }
}

/// One selectable zone. Bounds are exclusive on every side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteZone {
    pub x_min: i32,
    pub x_max: i32,
    pub y_max: i32,
    pub color: DrawColor,
}

impl PaletteZone {
    pub fn contains(&self, p: Point) -> bool {
        p.y < self.y_max && self.x_min < p.x && p.x < self.x_max
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub zones: Vec<PaletteZone>,
}

impl Palette {
    /// Colour under the fingertip, if it is inside any zone.
    pub fn lookup(&self, tip: Point) -> Option<DrawColor> {
        self.zones.iter().find(|z| z.contains(tip)).map(|z| z.color)
    }
}

impl Default for Palette {
    /// Header strip along the top 125 px of a 1280-wide frame.
    fn default() -> Self {
        let zone = |x_min, x_max, color| PaletteZone { x_min, x_max, y_max: 125, color };
        Self {
            zones: vec![
                zone(250, 450, DrawColor::Paint(MAGENTA)),
                zone(550, 750, DrawColor::Paint(BLUE)),
                zone(800, 950, DrawColor::Paint(GREEN)),
                zone(1050, 1200, DrawColor::Eraser),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_picks_the_zone_under_the_tip() {
        let p = Palette::default();
        assert_eq!(p.lookup(Point::new(300, 50)), Some(DrawColor::Paint(MAGENTA)));
        assert_eq!(p.lookup(Point::new(600, 10)), Some(DrawColor::Paint(BLUE)));
        assert_eq!(p.lookup(Point::new(900, 124)), Some(DrawColor::Paint(GREEN)));
        assert_eq!(p.lookup(Point::new(1100, 0)), Some(DrawColor::Eraser));
    }

    #[test]
    fn lookup_outside_all_zones_is_none() {
        let p = Palette::default();
        assert_eq!(p.lookup(Point::new(300, 125)), None); // y bound is exclusive
        assert_eq!(p.lookup(Point::new(250, 50)), None); // x bound is exclusive
        assert_eq!(p.lookup(Point::new(500, 50)), None); // gap between zones
        assert_eq!(p.lookup(Point::new(1250, 50)), None);
    }

    #[test]
    fn eraser_paints_background() {
        assert_eq!(DrawColor::Eraser.canvas_pixel(), BACKGROUND);
        assert!(DrawColor::Eraser.is_eraser());
        assert_eq!(DrawColor::default().canvas_pixel(), MAGENTA);
    }
}
