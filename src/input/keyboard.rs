use rustc_hash::FxHashMap;

use super::event::KeySym;

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move along the view direction while held.
    MoveForward,
    /// Move against the view direction while held.
    MoveBackward,
    /// Strafe left while held.
    StrafeLeft,
    /// Strafe right while held.
    StrafeRight,
    /// Roll counter-clockwise while held.
    RollLeft,
    /// Roll clockwise while held.
    RollRight,
    /// Raise the max speed by one.
    SpeedUp,
    /// Lower the max speed by one.
    SpeedDown,
    /// Quit the application.
    Exit,
    /// Toggle the advanced settings flag.
    ToggleAdvanced,
    /// Narrow the view angle by one degree (advanced settings only).
    NarrowViewAngle,
    /// Widen the view angle by one degree (advanced settings only).
    WidenViewAngle,
}

/// Fixed key map, resolved once when the controller is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: FxHashMap<KeySym, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = [
            (KeySym::W, KeyAction::MoveForward),
            (KeySym::S, KeyAction::MoveBackward),
            (KeySym::A, KeyAction::StrafeLeft),
            (KeySym::D, KeyAction::StrafeRight),
            (KeySym::Q, KeyAction::RollLeft),
            (KeySym::E, KeyAction::RollRight),
            (KeySym::BracketRight, KeyAction::SpeedUp),
            (KeySym::BracketLeft, KeyAction::SpeedDown),
            (KeySym::Escape, KeyAction::Exit),
            (KeySym::Keypad5, KeyAction::ToggleAdvanced),
            (KeySym::KeypadSubtract, KeyAction::NarrowViewAngle),
            (KeySym::KeypadAdd, KeyAction::WidenViewAngle),
        ]
        .into_iter()
        .collect();
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the action bound to a key.
    #[must_use]
    pub fn lookup(&self, key: KeySym) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}
