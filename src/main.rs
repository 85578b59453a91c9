// What you SEE:
// • Live camera is always the base image, with your strokes laid on top.
// • The hand is simulated by the mouse (see sim.rs):
//     hold Right = "index + middle up" → SELECT: hover a swatch at the top to pick a colour,
//     hold Left  = "index up"          → DRAW (or ERASE if the eraser is picked),
//     no button  = fist                → IDLE (pen lifted).
// • C clears the canvas. L toggles landmark dots. ESC quits.

mod camera;
mod canvas;
mod config;
mod draw;
mod error;
mod fingers;
mod gesture;
mod hud;
mod landmarks;
mod palette;
mod session;
mod sim;
mod stroke;
mod types;

use camera::{CameraCapture, DropoutGuard};
use config::PainterConfig;
use draw::Drawer;
use error::Error;
use session::Session;
use sim::{PointerInput, SimulatedHand};
use std::time::{Duration, Instant};
use tracing::{debug, info, Level};
use types::Point;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cfg = PainterConfig::default();

    /* --- Camera + window setup --- */
    let mut cam = CameraCapture::new(cfg.camera_index, cfg.capture_width, cfg.capture_height, cfg.mirror)?;
    let (w, h) = cam.resolution();
    let mut drawer = Drawer::new("Finger Painter", w as usize, h as usize)?;

    /* --- Session state: canvas, stroke cursor, brush colour ---
       Fresh every run; nothing is loaded or saved. */
    let mut session = Session::new(w as usize, h as usize, &cfg);
    let mut detector = SimulatedHand::new();
    let mut show_landmarks = cfg.show_landmarks;
    let mut dropouts = DropoutGuard::new(cfg.max_dropped_frames);

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    info!(width = w, height = h, "Session started");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        // 1) Fresh live frame (blocks until the camera has one).
        //    A bad grab only skips this iteration.
        let Some(live) = dropouts.check(cam.next_frame())? else {
            drawer.idle();
            continue;
        };

        // 2) Keys
        if drawer.c_pressed_once() {
            session.clear_canvas();
        }
        if drawer.l_pressed_once() {
            show_landmarks = !show_landmarks;
        }

        // 3) Pointer → simulated hand
        detector.set_input(PointerInput {
            pos: drawer.mouse_pos().map(|(x, y)| Point::new(x as i32, y as i32)),
            left: drawer.left_mouse_down(),
            right: drawer.right_mouse_down(),
        });

        // 4) Classify → resolve → track → composite
        let report = session.process_with(&mut detector, &live)?;

        if let Some(seg) = report.segment.filter(|s| !s.is_zero_length()) {
            debug!(from = ?seg.from, to = ?seg.to, mode = report.mode.label(), "Stroke");
        }

        // 5) HUD on top of the composited frame (never written to the canvas)
        let mut screen = report.frame.clone();
        hud::draw_palette(&mut screen, session.palette(), report.color);
        if show_landmarks {
            if let Some(hand) = &report.hand {
                hud::draw_landmarks(&mut screen, hand);
            }
        }
        hud::draw_pointer(&mut screen, &report, cfg.brush_thickness);
        hud::draw_status(&mut screen, report.mode, report.hand.is_some(), &hud_fps_text);

        // 6) Present
        drawer.present(&screen)?;

        // 7) FPS counter (log + HUD once per second)
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            info!("FPS: {:.1}", fps);
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!("Session ended");
    Ok(())
}
