use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Upper bound for the movement speed.
pub const MAX_SPEED_LIMIT: f64 = 200.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Movement and look sensitivities.
pub struct MotionOptions {
    /// Initial movement speed in world units per second.
    #[schemars(title = "Max Speed", range(min = 0.0, max = 200.0), extend("step" = 1.0))]
    pub max_speed: f64,
    /// Right-stick yaw rate in degrees per second; also the keyboard roll
    /// rate.
    #[schemars(title = "Gamepad Look Speed", range(min = 1.0, max = 180.0))]
    pub gamepad_look_speed: f64,
    /// Degrees of yaw for a mouse sweep across the full viewport width.
    #[schemars(title = "Mouse Look Speed", range(min = 1.0, max = 180.0))]
    pub mouse_look_speed: f64,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            max_speed: 1.0,
            gamepad_look_speed: 20.0,
            mouse_look_speed: 45.0,
        }
    }
}

impl MotionOptions {
    /// Configured max speed forced into `[0, MAX_SPEED_LIMIT]`.
    #[must_use]
    pub fn clamped_max_speed(&self) -> f64 {
        if self.max_speed.is_nan() {
            return 0.0;
        }
        self.max_speed.clamp(0.0, MAX_SPEED_LIMIT)
    }
}
