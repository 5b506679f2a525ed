//! Keyboard and mouse input: the closed key set, the fixed key bindings,
//! and pointer-capture mouse look.

/// Key symbols delivered by the host.
pub mod event;
/// Key → action bindings.
pub mod keyboard;
/// Pointer-capture mouse motion.
pub mod mouse;

pub use event::{KeySym, UnknownKey};
pub use keyboard::{KeyAction, KeyBindings};
pub use mouse::PointerCapture;
