use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Gamepad", inline)]
#[serde(default)]
/// Joystick device and polling parameters.
pub struct GamepadOptions {
    /// Joystick device node.
    #[schemars(title = "Device Path")]
    pub device_path: String,
    /// Sleep between read attempts, in milliseconds.
    #[schemars(title = "Poll Interval (ms)", range(min = 1, max = 100))]
    pub poll_interval_ms: u64,
    /// Close the device when the reader stops instead of leaking the
    /// handle.
    #[schemars(title = "Close Device On Stop")]
    pub close_device_on_stop: bool,
}

impl Default for GamepadOptions {
    fn default() -> Self {
        Self {
            device_path: "/dev/input/js0".into(),
            poll_interval_ms: 10,
            close_device_on_stop: false,
        }
    }
}

impl GamepadOptions {
    /// Poll interval as a [`Duration`], never shorter than 1 ms.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}
