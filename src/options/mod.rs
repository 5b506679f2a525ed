//! Navigation options with TOML preset support.
//!
//! Device, motion and fly-to settings live here. Options serialize to/from
//! TOML; every section uses `#[serde(default)]` so a file overriding a
//! single value is enough. Key and gamepad bindings are fixed and are not
//! part of the options.

mod flight;
mod gamepad;
mod motion;

use std::path::Path;

pub use flight::{DestinationOptions, FlightOptions, DESTINATION_COUNT};
pub use gamepad::GamepadOptions;
pub use motion::{MotionOptions, MAX_SPEED_LIMIT};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Joystick device and polling.
    pub gamepad: GamepadOptions,
    /// Movement and look sensitivities.
    pub motion: MotionOptions,
    /// Fly-to destinations.
    pub flight: FlightOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`NavError::Io`] if the file cannot be read,
    /// [`NavError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(NavError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string.
    ///
    /// # Errors
    ///
    /// [`NavError::OptionsParse`] if the text is not valid options TOML.
    pub fn from_toml(content: &str) -> Result<Self, NavError> {
        toml::from_str(content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`NavError::OptionsParse`] if serialization fails, [`NavError::Io`]
    /// if the file or its parent directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NavError::Io)?;
        }
        std::fs::write(path, content).map_err(NavError::Io)
    }
}
