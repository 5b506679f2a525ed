use std::str::FromStr;

/// Keys the navigation controller responds to.
///
/// Hosts translate their native key events into this closed set once; keys
/// outside it are never delivered to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySym {
    /// `W`
    W,
    /// `A`
    A,
    /// `S`
    S,
    /// `D`
    D,
    /// `Q`
    Q,
    /// `E`
    E,
    /// `]`
    BracketRight,
    /// `[`
    BracketLeft,
    /// Escape.
    Escape,
    /// Numeric keypad 5.
    Keypad5,
    /// Numeric keypad minus.
    KeypadSubtract,
    /// Numeric keypad plus.
    KeypadAdd,
}

/// Error returned when a key name has no [`KeySym`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl std::fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unbound key `{}`", self.0)
    }
}

impl std::error::Error for UnknownKey {}

impl FromStr for KeySym {
    type Err = UnknownKey;

    /// Parse an X11 keysym name (`"w"`, `"bracketright"`, `"KP_5"`, ...).
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let key = match name {
            "w" | "W" => Self::W,
            "a" | "A" => Self::A,
            "s" | "S" => Self::S,
            "d" | "D" => Self::D,
            "q" | "Q" => Self::Q,
            "e" | "E" => Self::E,
            "bracketright" => Self::BracketRight,
            "bracketleft" => Self::BracketLeft,
            "Escape" => Self::Escape,
            "KP_5" | "KP_Begin" => Self::Keypad5,
            "KP_Subtract" => Self::KeypadSubtract,
            "KP_Add" => Self::KeypadAdd,
            other => return Err(UnknownKey(other.to_owned())),
        };
        Ok(key)
    }
}

#[cfg(feature = "winit")]
impl KeySym {
    /// Map a winit physical key code, if it is one the controller uses.
    #[must_use]
    pub fn from_winit(code: winit::keyboard::KeyCode) -> Option<Self> {
        use winit::keyboard::KeyCode;
        let key = match code {
            KeyCode::KeyW => Self::W,
            KeyCode::KeyA => Self::A,
            KeyCode::KeyS => Self::S,
            KeyCode::KeyD => Self::D,
            KeyCode::KeyQ => Self::Q,
            KeyCode::KeyE => Self::E,
            KeyCode::BracketRight => Self::BracketRight,
            KeyCode::BracketLeft => Self::BracketLeft,
            KeyCode::Escape => Self::Escape,
            KeyCode::Numpad5 => Self::Keypad5,
            KeyCode::NumpadSubtract => Self::KeypadSubtract,
            KeyCode::NumpadAdd => Self::KeypadAdd,
            _ => return None,
        };
        Some(key)
    }
}
