//! Gamepad input: raw driver events, the accumulated button/axis state,
//! device access, and the background reader that keeps the state current.

/// Device trait and the Linux joystick backend.
pub mod device;
/// Raw driver events.
pub mod event;
/// Background poll thread and snapshot hand-off.
pub mod reader;
/// Accumulated per-slot gamepad state.
pub mod state;

pub use device::{open_device, DeviceCapabilities, InputDevice};
pub use event::{EventKind, RawInputEvent};
pub use reader::{DeviceRelease, GamepadInputReader};
pub use state::GamepadState;
