use glam::{DVec2, DVec3};

use crate::input::PointerCapture;
use crate::options::{DestinationOptions, MAX_SPEED_LIMIT};

/// How the gamepad steers the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    /// Full movement, look, fly-to and model spin.
    #[default]
    FreeFly,
    /// Planar movement only.
    Turntable,
}

impl NavigationMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::FreeFly => Self::Turntable,
            Self::Turntable => Self::FreeFly,
        }
    }
}

/// Per-tick input gathered from keyboard, mouse and gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputAccumulators {
    /// Pointer pixels moved since the last tick.
    pub mouse: PointerCapture,
    /// Right-stick deflection in `[-1, 1]`, refreshed from each snapshot.
    pub look_delta: DVec2,
    /// Strafe (x) and forward (y) speed from held keys.
    pub keyboard_speed: DVec2,
    /// Strafe (x) and forward (y) speed from the left stick / D-pad.
    pub gamepad_speed: DVec2,
    /// Roll rate from held keys, degrees per second.
    pub keyboard_roll: f64,
    /// Roll rate from the gamepad, degrees per second. Nothing on the
    /// fixed gamepad layout drives it yet.
    pub gamepad_roll: f64,
}

impl InputAccumulators {
    /// Whether anything asks for forward/backward motion.
    #[must_use]
    pub fn moving_forward(&self) -> bool {
        self.gamepad_speed.y != 0.0 || self.keyboard_speed.y != 0.0
    }

    /// Whether anything asks for sideways motion.
    #[must_use]
    pub fn strafing(&self) -> bool {
        self.gamepad_speed.x != 0.0 || self.keyboard_speed.x != 0.0
    }

    /// Whether anything asks for roll.
    #[must_use]
    pub fn rolling(&self) -> bool {
        self.gamepad_roll != 0.0 || self.keyboard_roll != 0.0
    }
}

/// Movement speed limit, always inside `[0, MAX_SPEED_LIMIT]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxSpeed(f64);

impl MaxSpeed {
    /// Clamp `value` into range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, MAX_SPEED_LIMIT))
    }

    /// Current limit.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Raise by one, saturating at the upper bound.
    pub fn increment(&mut self) {
        *self = Self::new(self.0 + 1.0);
    }

    /// Lower by one, saturating at zero.
    pub fn decrement(&mut self) {
        *self = Self::new(self.0 - 1.0);
    }
}

/// A fly-to target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Destination {
    /// Final eye position.
    pub position: DVec3,
    /// Final view direction.
    pub view_direction: DVec3,
}

impl From<&DestinationOptions> for Destination {
    fn from(opts: &DestinationOptions) -> Self {
        Self {
            position: opts.position(),
            view_direction: opts.view_direction(),
        }
    }
}

/// Scripted camera move towards one of the fixed destinations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightState {
    /// Still moving or turning.
    pub active: bool,
    /// Index of the selected destination.
    pub target: Option<usize>,
    /// Where the flight is heading.
    pub destination: Option<Destination>,
}

impl FlightState {
    /// Start (or retarget) a flight.
    pub fn select(&mut self, index: usize, destination: Destination) {
        self.target = Some(index);
        self.destination = Some(destination);
        self.active = true;
    }

    /// Stop without reaching the destination.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

/// Spin of the attached model about the world vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModelSpinState {
    /// Accumulated rotation in degrees.
    pub rotation: f64,
    /// Signed spin speed set by the shoulder buttons.
    pub rotate_speed: f64,
}
