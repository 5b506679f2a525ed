//! Fixed gamepad layout and the per-tick snapshot interpretation.

use glam::DVec2;

use super::controller::NavigationController;
use super::state::NavigationMode;
use crate::camera::motion::clamp_speed;
use crate::camera::NavigationHost;
use crate::gamepad::GamepadState;

/// Axis value at full deflection.
pub const AXIS_FULL_SCALE: f64 = 32767.0;

/// Face buttons selecting fly-to destinations 1-4.
pub const FLY_TO_BUTTONS: [usize; 4] = [0, 1, 2, 3];
/// Buttons that quit when all held together.
pub const SALUTE_BUTTONS: [usize; 4] = [4, 5, 6, 7];
/// Shoulder button spinning the model one way.
pub const SPIN_LEFT_BUTTON: usize = 4;
/// Shoulder button spinning the model the other way.
pub const SPIN_RIGHT_BUTTON: usize = 5;
/// Edge-triggered mode switch.
pub const MODE_BUTTON: usize = 8;
/// Reserved rotate-intent button.
pub const ROTATE_BUTTON: usize = 9;

/// Left stick, horizontal.
pub const MOVE_X_AXIS: usize = 0;
/// Left stick, vertical.
pub const MOVE_Y_AXIS: usize = 1;
/// Right stick, horizontal.
pub const LOOK_X_AXIS: usize = 2;
/// Right stick, vertical.
pub const LOOK_Y_AXIS: usize = 3;
/// D-pad axes. The first gates a strafe from the second, the second gates
/// a reversed strafe from the third.
pub const DPAD_AXES: [usize; 3] = [4, 5, 6];

fn normalized(state: &GamepadState, axis: usize) -> f64 {
    f64::from(state.axis(axis)) / AXIS_FULL_SCALE
}

impl NavigationController {
    /// Fold one gamepad snapshot into the controller state.
    pub(super) fn interpret_gamepad(
        &mut self,
        state: &GamepadState,
        host: &mut dyn NavigationHost,
    ) {
        if SALUTE_BUTTONS.iter().all(|&b| state.pressed(b)) {
            log::info!("Four-button salute pressed, exiting");
            host.request_exit();
        }

        if state.pressed(MODE_BUTTON) {
            if !self.mode_button_down {
                self.mode = self.mode.toggled();
                self.mode_button_down = true;
                if self.mode == NavigationMode::Turntable {
                    self.flight.cancel();
                }
                log::info!("Switched to {:?} mode", self.mode);
            }
        } else {
            self.mode_button_down = false;
        }

        let max = self.max_speed.get();
        self.input.gamepad_speed.x =
            clamp_speed(normalized(state, MOVE_X_AXIS) * max, max);
        self.input.gamepad_speed.y =
            clamp_speed(-normalized(state, MOVE_Y_AXIS) * max, max);

        match self.mode {
            NavigationMode::Turntable => {
                self.input.look_delta = DVec2::ZERO;
                self.spin.rotate_speed = 0.0;
                self.rotate_requested = false;
            }
            NavigationMode::FreeFly => self.interpret_free_fly(state, max),
        }
    }

    fn interpret_free_fly(&mut self, state: &GamepadState, max: f64) {
        // Later buttons win when several are held.
        if let Some(index) = FLY_TO_BUTTONS
            .iter()
            .rposition(|&b| state.pressed(b))
        {
            self.select_destination(index);
        }

        self.rotate_requested = state.pressed(ROTATE_BUTTON);

        self.input.look_delta.x =
            (-normalized(state, LOOK_X_AXIS)).clamp(-1.0, 1.0);
        self.input.look_delta.y =
            (-normalized(state, LOOK_Y_AXIS)).clamp(-1.0, 1.0);

        let [gate_a, source_a, source_b] = DPAD_AXES;
        if state.axis(gate_a) != 0 {
            self.input.gamepad_speed.x =
                clamp_speed(normalized(state, source_a) * max, max);
        } else if state.axis(source_a) != 0 {
            self.input.gamepad_speed.x =
                clamp_speed(-normalized(state, source_b) * max, max);
        } else {
            self.spin.rotate_speed = 0.0;
        }

        let left = state.pressed(SPIN_LEFT_BUTTON);
        let right = state.pressed(SPIN_RIGHT_BUTTON);
        self.spin.rotate_speed = match (left, right) {
            (true, false) => -max,
            (false, true) => max,
            _ => 0.0,
        };
    }
}
