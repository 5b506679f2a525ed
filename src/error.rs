//! Crate-level error types.

use std::fmt;
use std::path::PathBuf;

use crate::gamepad::EventKind;

/// Errors produced by the gamenav crate.
#[derive(Debug)]
pub enum NavError {
    /// The gamepad device could not be opened.
    DeviceAbsent {
        /// Device path that was tried.
        path: PathBuf,
        /// Underlying open failure.
        source: std::io::Error,
    },
    /// The device opened but refused a capability query.
    DeviceQuery(std::io::Error),
    /// No joystick backend exists for this platform.
    Unsupported(String),
    /// A decoded event addressed a slot the device never declared.
    InvalidEventIndex {
        /// Whether the event targeted a button or an axis.
        kind: EventKind,
        /// Slot index carried by the event.
        index: u8,
        /// Number of slots of that kind on the device.
        capacity: usize,
    },
    /// Failed to spawn the gamepad poll thread.
    ThreadSpawn(std::io::Error),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceAbsent { path, source } => {
                write!(f, "gamepad {} unavailable: {source}", path.display())
            }
            Self::DeviceQuery(e) => write!(f, "gamepad query failed: {e}"),
            Self::Unsupported(msg) => write!(f, "unsupported: {msg}"),
            Self::InvalidEventIndex {
                kind,
                index,
                capacity,
            } => write!(
                f,
                "{kind:?} event index {index} out of range (device has \
                 {capacity})"
            ),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DeviceAbsent { source, .. } => Some(source),
            Self::DeviceQuery(e) | Self::ThreadSpawn(e) | Self::Io(e) => {
                Some(e)
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for NavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
