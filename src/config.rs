// Every tunable knob of the painter in one place.

use crate::palette::Palette;

#[derive(Clone, Debug)]
pub struct PainterConfig {
    pub camera_index: u32,
    pub capture_width: u32,  // requested; the camera may pick something close
    pub capture_height: u32,
    pub mirror: bool,        // flip horizontally so moving right draws right
    /// Bad camera frames in a row before the session gives up.
    pub max_dropped_frames: u32,
    pub brush_thickness: u32,
    pub eraser_thickness: u32,
    /// Canvas intensity above which a pixel counts as "drawn" when compositing.
    pub mask_threshold: u8,
    pub palette: Palette,
    pub show_landmarks: bool,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            camera_index: 0,
            capture_width: 1280,
            capture_height: 720,
            mirror: true,
            max_dropped_frames: 30,
            brush_thickness: 15,
            eraser_thickness: 40,
            mask_threshold: 0,
            palette: Palette::default(),
            show_landmarks: true,
        }
    }
}
