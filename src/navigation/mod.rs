//! Camera navigation: the per-frame controller, its gamepad layout, and
//! the mode, flight and spin state it carries between ticks.

/// The per-frame navigation controller.
pub mod controller;
/// Fixed gamepad layout and snapshot interpretation.
pub mod gamepad;
/// Mode, speed, flight and spin state.
pub mod state;

pub use controller::NavigationController;
pub use state::{
    Destination, FlightState, InputAccumulators, MaxSpeed, ModelSpinState,
    NavigationMode,
};
