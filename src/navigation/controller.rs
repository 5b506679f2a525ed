//! Per-frame navigation: fuses keyboard, pointer and gamepad input into
//! camera and model motion.
//!
//! The host forwards window events through [`NavigationController::on_key_down`],
//! [`on_key_up`](NavigationController::on_key_up) and
//! [`on_mouse_move`](NavigationController::on_mouse_move), and calls
//! [`on_timer`](NavigationController::on_timer) once per rendered frame.
//!
//! # Example
//!
//! ```ignore
//! let mut nav = NavigationController::new(&Options::default());
//! // window callbacks
//! nav.on_key_down(KeySym::W, &mut host);
//! nav.on_mouse_move(IVec2::new(x, y), UVec2::new(w, h), &mut host);
//! // every frame
//! nav.on_timer(&mut host);
//! ```

use glam::{DVec3, IVec2, UVec2};
use web_time::Instant;

use super::state::{
    Destination, FlightState, InputAccumulators, MaxSpeed, ModelSpinState,
    NavigationMode,
};
use crate::camera::motion::{self, clamp_speed, ORBIT_RATE};
use crate::camera::{NavigationHost, RenderTarget};
use crate::gamepad::GamepadInputReader;
use crate::input::{KeyAction, KeyBindings, KeySym};
use crate::options::{MotionOptions, Options, DESTINATION_COUNT};

/// Keyboard/mouse/gamepad camera navigator.
pub struct NavigationController {
    reader: GamepadInputReader,
    motion: MotionOptions,
    destinations: [Destination; DESTINATION_COUNT],
    key_bindings: KeyBindings,
    pub(super) input: InputAccumulators,
    pub(super) max_speed: MaxSpeed,
    pub(super) mode: NavigationMode,
    pub(super) mode_button_down: bool,
    pub(super) flight: FlightState,
    pub(super) spin: ModelSpinState,
    pub(super) rotate_requested: bool,
    model_pivot: Option<DVec3>,
    advanced_settings: bool,
    last_tick: Instant,
}

impl NavigationController {
    /// Build a controller and start polling the configured gamepad.
    ///
    /// Without a gamepad the controller runs on keyboard and mouse alone.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self::with_reader(options, GamepadInputReader::open(&options.gamepad))
    }

    /// Build a controller around an existing reader and start it.
    #[must_use]
    pub fn with_reader(options: &Options, mut reader: GamepadInputReader) -> Self {
        if let Err(e) = reader.start_reading() {
            log::warn!("Gamepad polling unavailable: {e}");
        }
        Self {
            reader,
            motion: options.motion.clone(),
            destinations: options.flight.destinations.each_ref().map(Destination::from),
            key_bindings: KeyBindings::default(),
            input: InputAccumulators::default(),
            max_speed: MaxSpeed::new(options.motion.clamped_max_speed()),
            mode: NavigationMode::default(),
            mode_button_down: false,
            flight: FlightState::default(),
            spin: ModelSpinState::default(),
            rotate_requested: false,
            model_pivot: None,
            advanced_settings: false,
            last_tick: Instant::now(),
        }
    }

    // ── Accessors ──

    /// Current navigation mode.
    #[must_use]
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Current movement speed limit.
    #[must_use]
    pub fn max_speed(&self) -> f64 {
        self.max_speed.get()
    }

    /// Accumulated input for the coming tick.
    #[must_use]
    pub fn input(&self) -> &InputAccumulators {
        &self.input
    }

    /// Fly-to state.
    #[must_use]
    pub fn flight(&self) -> &FlightState {
        &self.flight
    }

    /// Whether a fly-to is in progress.
    #[must_use]
    pub fn is_flying(&self) -> bool {
        self.flight.active
    }

    /// Model spin state.
    #[must_use]
    pub fn model_spin(&self) -> &ModelSpinState {
        &self.spin
    }

    /// Whether the rotate button is held. Reserved: nothing consumes it
    /// during a tick.
    #[must_use]
    pub fn rotate_requested(&self) -> bool {
        self.rotate_requested
    }

    /// Whether the keypad view-angle keys are enabled.
    #[must_use]
    pub fn advanced_settings(&self) -> bool {
        self.advanced_settings
    }

    /// The gamepad reader.
    #[must_use]
    pub fn reader(&self) -> &GamepadInputReader {
        &self.reader
    }

    /// The gamepad reader, mutably.
    pub fn reader_mut(&mut self) -> &mut GamepadInputReader {
        &mut self.reader
    }

    /// Fly-to destination for a face button.
    #[must_use]
    pub fn destination(&self, index: usize) -> Option<&Destination> {
        self.destinations.get(index)
    }

    /// Attach a model that the shoulder buttons spin about `pivot`.
    pub fn attach_model(&mut self, pivot: DVec3) {
        self.model_pivot = Some(pivot);
        self.spin.rotation = 0.0;
    }

    /// Detach the model; spin input becomes inert.
    pub fn detach_model(&mut self) {
        self.model_pivot = None;
    }

    /// Restart `dt` measurement from `now`.
    pub fn reset_clock(&mut self, now: Instant) {
        self.last_tick = now;
    }

    // ── Window events ──

    /// A key went down.
    pub fn on_key_down(&mut self, key: KeySym, host: &mut dyn NavigationHost) {
        self.handle_key(key, true, host);
    }

    /// A key came up.
    pub fn on_key_up(&mut self, key: KeySym, host: &mut dyn NavigationHost) {
        self.handle_key(key, false, host);
    }

    fn handle_key(&mut self, key: KeySym, down: bool, host: &mut dyn NavigationHost) {
        let Some(action) = self.key_bindings.lookup(key) else {
            return;
        };
        let max = self.max_speed.get();
        let look = self.motion.gamepad_look_speed;
        let held = |value: f64| if down { value } else { 0.0 };

        match action {
            KeyAction::MoveForward => self.input.keyboard_speed.y = held(max),
            KeyAction::MoveBackward => self.input.keyboard_speed.y = held(-max),
            KeyAction::StrafeLeft => self.input.keyboard_speed.x = held(-max),
            KeyAction::StrafeRight => self.input.keyboard_speed.x = held(max),
            KeyAction::RollLeft => self.input.keyboard_roll = held(look),
            KeyAction::RollRight => self.input.keyboard_roll = held(-look),
            KeyAction::SpeedUp if down => {
                self.max_speed.increment();
                log::debug!("Max speed {}", self.max_speed.get());
            }
            KeyAction::SpeedDown if down => {
                self.max_speed.decrement();
                log::debug!("Max speed {}", self.max_speed.get());
            }
            KeyAction::Exit if down => host.request_exit(),
            // Flips on release so a held key toggles once.
            KeyAction::ToggleAdvanced if !down => {
                self.advanced_settings = !self.advanced_settings;
            }
            KeyAction::NarrowViewAngle if down && self.advanced_settings => {
                adjust_view_angle(host, -1.0);
            }
            KeyAction::WidenViewAngle if down && self.advanced_settings => {
                adjust_view_angle(host, 1.0);
            }
            _ => {}
        }
    }

    /// The pointer moved to `position` in a viewport of `size`.
    pub fn on_mouse_move(
        &mut self,
        position: IVec2,
        size: UVec2,
        host: &mut dyn NavigationHost,
    ) {
        if host.render_target().is_none() {
            return;
        }
        self.input.mouse.handle_move(position, size);
        host.recenter_pointer();
    }

    // ── Frame tick ──

    /// Advance one frame using the wall clock.
    pub fn on_timer(&mut self, host: &mut dyn NavigationHost) {
        self.tick_at(host, Instant::now());
    }

    /// Advance one frame as if the clock read `now`.
    pub fn tick_at(&mut self, host: &mut dyn NavigationHost, now: Instant) {
        if self.reader.is_active() {
            let snapshot = self.reader.snapshot().clone();
            self.interpret_gamepad(&snapshot, host);
        }

        let dt = now.saturating_duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;

        if self.input.moving_forward() {
            self.move_to_focal_point(dt, host);
        }
        if self.input.strafing() {
            self.pan(dt, host);
        }
        if self.input.rolling() {
            self.camera_roll(dt, host);
        }
        if self.input.look_delta.x != 0.0 {
            self.camera_yaw(dt, host);
        }
        // Vertical stick is a vertical pan, not a pitch.
        if self.input.look_delta.y != 0.0 {
            self.up(dt, host);
        }
        if self.flight.active {
            self.fly(dt, host);
        }
        if self.spin.rotate_speed != 0.0 {
            self.model_rotate(dt, host);
        }

        self.input.mouse.reset();
        host.recenter_pointer();
    }

    // ── Camera operations ──

    /// Turn left/right from pointer motion and the right stick.
    pub fn camera_yaw(&mut self, dt: f64, host: &mut dyn NavigationHost) {
        let Some(target) = host.render_target() else {
            return;
        };
        let angle = motion::yaw_angle(
            self.input.mouse.delta().x,
            target.viewport_size().x,
            self.motion.mouse_look_speed,
            self.input.look_delta.x,
            self.motion.gamepad_look_speed,
            dt,
        );
        let camera = target.camera_mut();
        camera.yaw(angle);
        camera.orthogonalize_view_up();
        target.reset_clipping_range();
    }

    /// Tilt up/down from pointer motion and the right stick. Not part of
    /// the default tick.
    pub fn camera_pitch(&mut self, dt: f64, host: &mut dyn NavigationHost) {
        let Some(target) = host.render_target() else {
            return;
        };
        let angle = motion::pitch_angle(
            self.input.mouse.delta().y,
            target.viewport_size().y,
            self.motion.mouse_look_speed,
            self.input.look_delta.y,
            self.motion.gamepad_look_speed,
            dt,
        );
        let camera = target.camera_mut();
        camera.pitch(angle);
        camera.orthogonalize_view_up();
        target.reset_clipping_range();
    }

    /// Roll from the keyboard and gamepad roll rates.
    pub fn camera_roll(&mut self, dt: f64, host: &mut dyn NavigationHost) {
        let Some(target) = host.render_target() else {
            return;
        };
        let angle = (self.input.keyboard_roll + self.input.gamepad_roll) * dt;
        let camera = target.camera_mut();
        camera.roll(angle);
        camera.orthogonalize_view_up();
        target.reset_clipping_range();
    }

    /// Strafe at the combined, clamped x speed.
    pub fn pan(&mut self, dt: f64, host: &mut dyn NavigationHost) {
        let Some(target) = host.render_target() else {
            return;
        };
        let speed = clamp_speed(
            self.input.keyboard_speed.x + self.input.gamepad_speed.x,
            self.max_speed.get(),
        );
        motion::pan(target.camera_mut(), speed * dt);
        finish_translation(target);
    }

    /// Dolly at the combined, clamped y speed.
    pub fn move_to_focal_point(&mut self, dt: f64, host: &mut dyn NavigationHost) {
        let Some(target) = host.render_target() else {
            return;
        };
        let speed = clamp_speed(
            self.input.keyboard_speed.y + self.input.gamepad_speed.y,
            self.max_speed.get(),
        );
        motion::dolly(target.camera_mut(), speed * dt);
        finish_translation(target);
    }

    /// Rise or sink with the right stick's vertical deflection.
    pub fn up(&mut self, dt: f64, host: &mut dyn NavigationHost) {
        let Some(target) = host.render_target() else {
            return;
        };
        let speed = clamp_speed(self.input.look_delta.y, self.max_speed.get());
        motion::elevate(target.camera_mut(), speed * dt);
        finish_translation(target);
    }

    /// Orbit the eye about the focal point. Reserved for the rotate
    /// button; not part of the default tick.
    pub fn rotate(&mut self, dt: f64, host: &mut dyn NavigationHost) {
        let Some(target) = host.render_target() else {
            return;
        };
        let camera = target.camera_mut();
        camera.azimuth(ORBIT_RATE * dt);
        camera.orthogonalize_view_up();
        finish_translation(target);
    }

    /// Advance the active flight one step.
    pub fn fly(&mut self, dt: f64, host: &mut dyn NavigationHost) {
        let Some(destination) = self.flight.destination else {
            self.flight.cancel();
            return;
        };
        let Some(target) = host.render_target() else {
            return;
        };
        let step = motion::fly_step(
            target.camera_mut(),
            destination.position,
            destination.view_direction,
            dt,
        );
        finish_translation(target);

        if step.converged() {
            self.flight.active = false;
            log::info!(
                "Arrived at destination {}",
                self.flight.target.map_or(0, |i| i + 1)
            );
        }
    }

    /// Spin the attached model by one tick of the shoulder-button speed.
    ///
    /// The step is fixed per tick and does not scale with `dt`.
    pub fn model_rotate(&mut self, _dt: f64, host: &mut dyn NavigationHost) {
        let Some(pivot) = self.model_pivot else {
            return;
        };
        let Some(target) = host.render_target() else {
            return;
        };
        self.spin.rotation += self.spin.rotate_speed * motion::MODEL_SPIN_GAIN;
        target.set_model_transform(motion::model_spin_transform(
            pivot,
            self.spin.rotation,
        ));
    }

    pub(super) fn select_destination(&mut self, index: usize) {
        let Some(destination) = self.destinations.get(index).copied() else {
            return;
        };
        if !(self.flight.active && self.flight.target == Some(index)) {
            log::info!("Flying to destination {}", index + 1);
        }
        self.flight.select(index, destination);
    }
}

/// Lights and clipping upkeep after the eye moved.
fn finish_translation(target: &mut dyn RenderTarget) {
    if target.lights_follow_camera() {
        target.update_lights_to_follow_camera();
    }
    target.reset_clipping_range();
}

fn adjust_view_angle(host: &mut dyn NavigationHost, delta: f64) {
    if let Some(target) = host.render_target() {
        let camera = target.camera_mut();
        let angle = camera.view_angle + delta;
        camera.set_view_angle(angle);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::time::Duration;

    use glam::{DAffine3, DVec2};

    use super::*;
    use crate::camera::{Camera, Viewport};
    use crate::gamepad::reader::tests::ScriptedDevice;
    use crate::gamepad::RawInputEvent;
    use crate::options::GamepadOptions;

    const EPS: f64 = 1e-9;

    /// Window host backed by a [`Viewport`].
    pub(crate) struct TestHost {
        pub(crate) viewport: Option<TrackingViewport>,
        pub(crate) exits: usize,
        pub(crate) recenters: usize,
    }

    /// Viewport that counts upkeep calls.
    pub(crate) struct TrackingViewport {
        pub(crate) inner: Viewport,
        pub(crate) clip_resets: usize,
        pub(crate) light_updates: usize,
    }

    impl RenderTarget for TrackingViewport {
        fn camera_mut(&mut self) -> &mut Camera {
            self.inner.camera_mut()
        }

        fn viewport_size(&self) -> UVec2 {
            self.inner.viewport_size()
        }

        fn reset_clipping_range(&mut self) {
            self.clip_resets += 1;
        }

        fn lights_follow_camera(&self) -> bool {
            true
        }

        fn update_lights_to_follow_camera(&mut self) {
            self.light_updates += 1;
        }

        fn set_model_transform(&mut self, transform: DAffine3) {
            self.inner.set_model_transform(transform);
        }
    }

    impl TestHost {
        /// Eye at (0,0,5) looking down -Z in an 800x600 viewport.
        pub(crate) fn looking_down_z() -> Self {
            let camera = Camera::new(
                DVec3::new(0.0, 0.0, 5.0),
                DVec3::new(0.0, 0.0, 4.0),
                DVec3::Y,
            );
            Self {
                viewport: Some(TrackingViewport {
                    inner: Viewport::new(camera, UVec2::new(800, 600)),
                    clip_resets: 0,
                    light_updates: 0,
                }),
                exits: 0,
                recenters: 0,
            }
        }

        pub(crate) fn without_target() -> Self {
            Self {
                viewport: None,
                exits: 0,
                recenters: 0,
            }
        }

        pub(crate) fn camera(&self) -> &Camera {
            &self.viewport.as_ref().unwrap().inner.camera
        }

        pub(crate) fn model_transform(&self) -> Option<DAffine3> {
            self.viewport.as_ref().unwrap().inner.model_transform
        }
    }

    impl NavigationHost for TestHost {
        fn render_target(&mut self) -> Option<&mut dyn RenderTarget> {
            let target: &mut dyn RenderTarget = self.viewport.as_mut()?;
            Some(target)
        }

        fn recenter_pointer(&mut self) {
            self.recenters += 1;
        }

        fn request_exit(&mut self) {
            self.exits += 1;
        }
    }

    pub(crate) fn keyboard_only() -> NavigationController {
        NavigationController::with_reader(
            &Options::default(),
            GamepadInputReader::disconnected(),
        )
    }

    /// Tick exactly `dt` seconds after the previous tick.
    pub(crate) fn tick(nav: &mut NavigationController, host: &mut TestHost, dt: f64) {
        let start = Instant::now();
        nav.reset_clock(start);
        nav.tick_at(host, start + Duration::from_secs_f64(dt));
    }

    #[test]
    fn absent_gamepad_still_moves_with_keyboard() {
        let options = Options {
            gamepad: GamepadOptions {
                device_path: "/nonexistent/gamenav/js0".into(),
                ..GamepadOptions::default()
            },
            ..Options::default()
        };
        let mut nav = NavigationController::new(&options);
        assert!(!nav.reader().is_active());

        let mut host = TestHost::looking_down_z();
        nav.on_key_down(KeySym::W, &mut host);
        assert_eq!(nav.input().keyboard_speed.y, nav.max_speed());

        tick(&mut nav, &mut host, 0.1);
        let step = nav.max_speed() * 0.1;
        let cam = host.camera();
        assert!((cam.position - DVec3::new(0.0, 0.0, 5.0 - step)).length() < EPS);
        assert!((cam.focal_point - DVec3::new(0.0, 0.0, 4.0 - step)).length() < EPS);
    }

    #[test]
    fn key_release_stops_motion() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.on_key_down(KeySym::D, &mut host);
        assert_eq!(nav.input().keyboard_speed.x, 1.0);
        nav.on_key_up(KeySym::D, &mut host);
        assert_eq!(nav.input().keyboard_speed.x, 0.0);

        let before = host.camera().clone();
        tick(&mut nav, &mut host, 0.1);
        assert_eq!(*host.camera(), before);
    }

    #[test]
    fn strafe_keys_pan_sideways() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.on_key_down(KeySym::A, &mut host);
        tick(&mut nav, &mut host, 0.5);
        assert!((host.camera().position - DVec3::new(-0.5, 0.0, 5.0)).length() < EPS);
        let viewport = host.viewport.as_ref().unwrap();
        assert_eq!(viewport.light_updates, 1);
        assert_eq!(viewport.clip_resets, 1);
    }

    fn upkeep(host: &TestHost) -> (usize, usize) {
        let viewport = host.viewport.as_ref().unwrap();
        (viewport.light_updates, viewport.clip_resets)
    }

    #[test]
    fn eye_moves_refresh_lights_and_clipping() {
        let mut nav = keyboard_only();
        nav.input.keyboard_speed.y = 1.0;
        nav.input.look_delta.y = 0.5;
        nav.select_destination(0);

        let moves: [fn(&mut NavigationController, f64, &mut dyn NavigationHost); 4] = [
            NavigationController::move_to_focal_point,
            NavigationController::up,
            NavigationController::rotate,
            NavigationController::fly,
        ];
        for op in moves {
            let mut host = TestHost::looking_down_z();
            op(&mut nav, 0.1, &mut host);
            assert_eq!(upkeep(&host), (1, 1));
        }
    }

    #[test]
    fn turns_refresh_clipping_only() {
        let mut nav = keyboard_only();
        nav.input.look_delta = DVec2::new(0.5, 0.5);
        nav.input.keyboard_roll = 20.0;

        let turns: [fn(&mut NavigationController, f64, &mut dyn NavigationHost); 3] = [
            NavigationController::camera_yaw,
            NavigationController::camera_pitch,
            NavigationController::camera_roll,
        ];
        for op in turns {
            let mut host = TestHost::looking_down_z();
            op(&mut nav, 0.1, &mut host);
            assert_eq!(upkeep(&host), (0, 1));
        }
    }

    #[test]
    fn detached_model_stops_spinning() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.attach_model(DVec3::ZERO);
        nav.spin.rotate_speed = 1.0;
        tick(&mut nav, &mut host, 0.1);
        assert_eq!(nav.model_spin().rotation, 3.0);
        let applied = host.model_transform();
        assert!(applied.is_some());

        nav.detach_model();
        tick(&mut nav, &mut host, 0.1);
        tick(&mut nav, &mut host, 0.1);
        assert_eq!(nav.model_spin().rotation, 3.0);
        assert_eq!(host.model_transform(), applied);
    }

    #[test]
    fn combined_speed_is_clamped_to_max() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.on_key_down(KeySym::W, &mut host);
        nav.input.gamepad_speed.y = nav.max_speed();
        tick(&mut nav, &mut host, 1.0);
        // two sources at full speed still move max_speed * dt
        assert!((host.camera().position.z - 4.0).abs() < EPS);
    }

    #[test]
    fn speed_keys_stay_in_range() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        for _ in 0..300 {
            nav.on_key_down(KeySym::BracketRight, &mut host);
            nav.on_key_up(KeySym::BracketRight, &mut host);
        }
        assert_eq!(nav.max_speed(), 200.0);
        for _ in 0..300 {
            nav.on_key_down(KeySym::BracketLeft, &mut host);
        }
        assert_eq!(nav.max_speed(), 0.0);
    }

    #[test]
    fn roll_keys_use_look_speed() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.on_key_down(KeySym::Q, &mut host);
        assert_eq!(nav.input().keyboard_roll, 20.0);
        tick(&mut nav, &mut host, 0.5);
        let tilt = host.camera().view_up.angle_between(DVec3::Y).to_degrees();
        assert!((tilt - 10.0).abs() < 1e-6);

        nav.on_key_down(KeySym::E, &mut host);
        assert_eq!(nav.input().keyboard_roll, -20.0);
    }

    #[test]
    fn escape_requests_exit_on_press_only() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.on_key_down(KeySym::Escape, &mut host);
        nav.on_key_up(KeySym::Escape, &mut host);
        assert_eq!(host.exits, 1);
    }

    #[test]
    fn view_angle_keys_need_advanced_settings() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.on_key_down(KeySym::KeypadAdd, &mut host);
        assert_eq!(host.camera().view_angle, 30.0);

        nav.on_key_down(KeySym::Keypad5, &mut host);
        assert!(!nav.advanced_settings());
        nav.on_key_up(KeySym::Keypad5, &mut host);
        assert!(nav.advanced_settings());

        nav.on_key_down(KeySym::KeypadAdd, &mut host);
        nav.on_key_up(KeySym::KeypadAdd, &mut host);
        assert_eq!(host.camera().view_angle, 31.0);
        nav.on_key_down(KeySym::KeypadSubtract, &mut host);
        nav.on_key_down(KeySym::KeypadSubtract, &mut host);
        assert_eq!(host.camera().view_angle, 29.0);
    }

    #[test]
    fn mouse_delta_resets_every_tick() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.on_mouse_move(IVec2::new(420, 300), UVec2::new(800, 600), &mut host);
        assert_eq!(nav.input().mouse.delta(), DVec2::new(20.0, 0.0));
        assert_eq!(host.recenters, 1);

        tick(&mut nav, &mut host, 0.016);
        assert_eq!(nav.input().mouse.delta(), DVec2::ZERO);
        assert_eq!(host.recenters, 2);
    }

    #[test]
    fn mouse_yaw_rides_along_with_stick_yaw() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.on_mouse_move(IVec2::new(480, 300), UVec2::new(800, 600), &mut host);
        nav.input.look_delta.x = 0.5;
        tick(&mut nav, &mut host, 0.1);

        // -(80 px * 45 / 800) + 0.5 * 20 * 0.1 = -3.5 degrees
        let dop = host.camera().direction_of_projection();
        let expected = (-3.5f64).to_radians();
        let want = DVec3::new(-expected.sin(), 0.0, -expected.cos());
        assert!((dop - want).length() < 1e-9);
    }

    #[test]
    fn no_render_target_is_a_quiet_no_op() {
        let mut nav = keyboard_only();
        let mut host = TestHost::without_target();
        nav.on_key_down(KeySym::W, &mut host);
        nav.input.look_delta = DVec2::new(0.5, 0.5);
        nav.attach_model(DVec3::ZERO);
        nav.spin.rotate_speed = 1.0;
        nav.select_destination(0);

        nav.on_mouse_move(IVec2::new(10, 10), UVec2::new(800, 600), &mut host);
        assert_eq!(nav.input().mouse.delta(), DVec2::ZERO);
        tick(&mut nav, &mut host, 0.1);

        assert!(nav.is_flying());
        assert_eq!(nav.model_spin().rotation, 0.0);
        assert_eq!(host.recenters, 1);
    }

    #[test]
    fn vertical_stick_pans_vertically_without_pitching() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.input.look_delta.y = -0.5;
        tick(&mut nav, &mut host, 0.2);

        let cam = host.camera();
        assert!((cam.position - DVec3::new(0.0, -0.1, 5.0)).length() < EPS);
        assert!((cam.direction_of_projection() - DVec3::NEG_Z).length() < EPS);
    }

    #[test]
    fn flight_converges_and_deactivates() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.select_destination(0);
        assert!(nav.is_flying());

        for _ in 0..10_000 {
            if !nav.is_flying() {
                break;
            }
            tick(&mut nav, &mut host, 0.1);
        }
        assert!(!nav.is_flying());
        let dest = *nav.destination(0).unwrap();
        let cam = host.camera();
        assert!(cam.position.distance(dest.position) <= motion::CONVERGENCE_THRESHOLD);
        assert!(
            cam.direction_of_projection().cross(dest.view_direction).length()
                <= motion::CONVERGENCE_THRESHOLD
        );
    }

    #[test]
    fn model_spin_needs_an_attached_model() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.spin.rotate_speed = 1.0;
        tick(&mut nav, &mut host, 0.1);
        assert!(host.model_transform().is_none());
        assert_eq!(nav.model_spin().rotation, 0.0);

        let pivot = DVec3::new(2.0, 0.0, 0.0);
        nav.attach_model(pivot);
        tick(&mut nav, &mut host, 0.1);
        tick(&mut nav, &mut host, 0.1);
        assert_eq!(nav.model_spin().rotation, 6.0);
        let xform = host.model_transform().unwrap();
        assert!((xform.transform_point3(pivot) - pivot).length() < EPS);
    }

    #[test]
    fn reserved_orbit_keeps_focal_point() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.rotate(0.9, &mut host);
        let cam = host.camera();
        assert_eq!(cam.focal_point, DVec3::new(0.0, 0.0, 4.0));
        assert!((cam.position - DVec3::new(1.0, 0.0, 4.0)).length() < 1e-9);
    }

    #[test]
    fn reserved_pitch_tilts_view() {
        let mut nav = keyboard_only();
        let mut host = TestHost::looking_down_z();
        nav.input.look_delta.y = 1.0;
        nav.camera_pitch(0.5, &mut host);
        let dop = host.camera().direction_of_projection();
        assert!((dop.angle_between(DVec3::NEG_Z).to_degrees() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn scripted_gamepad_drives_the_controller() {
        let (device, script) = ScriptedDevice::new(10, 7);
        let reader = GamepadInputReader::with_device(Box::new(device))
            .with_poll_interval(Duration::from_millis(1));
        let mut nav = NavigationController::with_reader(&Options::default(), reader);
        assert!(nav.reader().is_active());

        let mut host = TestHost::looking_down_z();
        script.push(RawInputEvent::button(8, 1));

        let deadline = Instant::now() + Duration::from_secs(5);
        while nav.mode() == NavigationMode::FreeFly && Instant::now() < deadline {
            nav.on_timer(&mut host);
            std::thread::sleep(Duration::from_millis(2));
        }
        assert_eq!(nav.mode(), NavigationMode::Turntable);

        // held across many ticks: no further toggles
        for _ in 0..20 {
            nav.on_timer(&mut host);
        }
        assert_eq!(nav.mode(), NavigationMode::Turntable);

        nav.reader_mut().stop();
        assert!(!nav.reader().is_active());
    }
}
