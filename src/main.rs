//! Headless gamepad navigation driver.
//!
//! Polls the configured joystick, steers a virtual camera at roughly
//! 60 Hz and logs the camera pose once per second. Hold the four-button
//! salute to quit.
//!
//! Usage: `gamenav [options.toml]`

use std::path::Path;
use std::thread;
use std::time::Duration;

use gamenav::{
    Camera, NavigationController, NavigationHost, Options, RenderTarget,
    Viewport,
};
use glam::{DVec3, UVec2};
use web_time::Instant;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const POSE_LOG_INTERVAL: Duration = Duration::from_secs(1);

struct HeadlessHost {
    viewport: Viewport,
    exit_requested: bool,
}

impl HeadlessHost {
    fn new() -> Self {
        let camera = Camera::new(DVec3::new(0.0, 0.0, 5.0), DVec3::ZERO, DVec3::Y);
        Self {
            viewport: Viewport::new(camera, UVec2::new(1280, 720)),
            exit_requested: false,
        }
    }
}

impl NavigationHost for HeadlessHost {
    fn render_target(&mut self) -> Option<&mut dyn RenderTarget> {
        Some(&mut self.viewport)
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }
}

fn load_options() -> Options {
    let Some(arg) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&arg)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let options = load_options();
    let mut nav = NavigationController::new(&options);
    if !nav.reader().is_active() {
        log::error!(
            "No gamepad at {}, nothing to drive",
            options.gamepad.device_path
        );
        std::process::exit(1);
    }

    let mut host = HeadlessHost::new();
    let mut last_log = Instant::now();
    nav.reset_clock(last_log);

    while !host.exit_requested {
        thread::sleep(FRAME_INTERVAL);
        nav.on_timer(&mut host);

        if last_log.elapsed() >= POSE_LOG_INTERVAL {
            last_log = Instant::now();
            let camera = &host.viewport.camera;
            log::info!(
                "{:?} eye={:.2} focal={:.2} up={:.2} speed={}",
                nav.mode(),
                camera.position,
                camera.focal_point,
                camera.view_up,
                nav.max_speed()
            );
        }
    }

    nav.reader_mut().stop();
}
