//! Incremental camera moves driven by per-tick speeds.
//!
//! Each function advances a [`Camera`] by one tick's worth of motion and
//! nothing else; clipping and light updates are the caller's business.

use glam::{DAffine3, DVec3};

use super::core::{rotate_point, Camera};

/// Distance and axis-norm below which a fly-to counts as arrived.
pub const CONVERGENCE_THRESHOLD: f64 = 0.1;
/// Fly-to turn rate in degrees per second.
pub const FLY_TURN_RATE: f64 = 50.0;
/// Degrees of model spin per tick per unit of spin speed.
pub const MODEL_SPIN_GAIN: f64 = 3.0;
/// Reserved orbit rate in degrees per second.
pub const ORBIT_RATE: f64 = 100.0;

/// Clamp a combined speed into `[-max_speed, max_speed]`.
#[must_use]
pub fn clamp_speed(speed: f64, max_speed: f64) -> f64 {
    let max_speed = max_speed.max(0.0);
    if speed.is_nan() {
        return 0.0;
    }
    speed.clamp(-max_speed, max_speed)
}

/// Strafe perpendicular to the view direction and view-up.
pub fn pan(camera: &mut Camera, displacement: f64) {
    let right = camera
        .direction_of_projection()
        .cross(camera.view_up)
        .normalize_or_zero();
    camera.translate(right * displacement);
}

/// Move along the view direction.
pub fn dolly(camera: &mut Camera, displacement: f64) {
    let dop = camera.direction_of_projection();
    camera.translate(dop * displacement);
}

/// Move straight up or down in world space.
pub fn elevate(camera: &mut Camera, displacement: f64) {
    camera.translate(DVec3::new(0.0, displacement, 0.0));
}

/// Yaw in degrees from one tick of mouse and right-stick input.
///
/// A full-width mouse sweep turns by `mouse_look_speed`; the stick turns
/// at `gamepad_look_speed` degrees per second at full deflection.
#[must_use]
pub fn yaw_angle(
    mouse_dx: f64,
    viewport_width: u32,
    mouse_look_speed: f64,
    look_x: f64,
    gamepad_look_speed: f64,
    dt: f64,
) -> f64 {
    let mouse = if viewport_width == 0 {
        0.0
    } else {
        mouse_dx * -mouse_look_speed / f64::from(viewport_width)
    };
    mouse + look_x * gamepad_look_speed * dt
}

/// Pitch in degrees, the vertical twin of [`yaw_angle`].
#[must_use]
pub fn pitch_angle(
    mouse_dy: f64,
    viewport_height: u32,
    mouse_look_speed: f64,
    look_y: f64,
    gamepad_look_speed: f64,
    dt: f64,
) -> f64 {
    let mouse = if viewport_height == 0 {
        0.0
    } else {
        mouse_dy * mouse_look_speed / f64::from(viewport_height)
    };
    mouse + look_y * gamepad_look_speed * dt
}

/// Progress of one fly-to step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlyStep {
    /// Eye is within [`CONVERGENCE_THRESHOLD`] of the destination.
    pub arrived: bool,
    /// View direction is within [`CONVERGENCE_THRESHOLD`] of the target.
    pub aligned: bool,
}

impl FlyStep {
    /// Both position and orientation have converged.
    #[must_use]
    pub fn converged(self) -> bool {
        self.arrived && self.aligned
    }
}

/// Advance the camera one tick towards `destination`, turning towards
/// `view_direction`.
///
/// The eye moves `dt / 2` units straight at the destination and the view
/// turns about the eye by `dt * FLY_TURN_RATE` degrees. Each half stops
/// once it is within [`CONVERGENCE_THRESHOLD`]; an exactly opposite view
/// direction yields no turn axis and counts as aligned.
pub fn fly_step(
    camera: &mut Camera,
    destination: DVec3,
    view_direction: DVec3,
    dt: f64,
) -> FlyStep {
    let to_destination = destination - camera.position;
    let arrived = to_destination.length() <= CONVERGENCE_THRESHOLD;
    if !arrived {
        camera.translate(to_destination.normalize() * dt / 2.0);
        camera.orthogonalize_view_up();
    }

    let axis = camera
        .direction_of_projection()
        .cross(view_direction.normalize_or_zero());
    let aligned = axis.length() <= CONVERGENCE_THRESHOLD;
    if !aligned {
        camera.focal_point = rotate_point(
            camera.focal_point,
            camera.position,
            axis,
            dt * FLY_TURN_RATE,
        );
        camera.orthogonalize_view_up();
    }

    FlyStep { arrived, aligned }
}

/// Transform spinning a model `degrees` about the world vertical axis
/// through `pivot`.
#[must_use]
pub fn model_spin_transform(pivot: DVec3, degrees: f64) -> DAffine3 {
    DAffine3::from_translation(pivot)
        * DAffine3::from_rotation_y(degrees.to_radians())
        * DAffine3::from_translation(-pivot)
}
