use glam::DVec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of fly-to destinations, one per face button.
pub const DESTINATION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Destination", inline)]
/// A fly-to target: where the eye ends up and which way it looks.
pub struct DestinationOptions {
    /// Final eye position.
    pub position: [f64; 3],
    /// Final view direction.
    pub view_direction: [f64; 3],
}

impl DestinationOptions {
    /// Eye position as a vector.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        DVec3::from_array(self.position)
    }

    /// View direction as a vector.
    #[must_use]
    pub fn view_direction(&self) -> DVec3 {
        DVec3::from_array(self.view_direction)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Flight", inline)]
#[serde(default)]
/// Fly-to destinations selected by gamepad buttons 0–3.
pub struct FlightOptions {
    /// Destinations in button order.
    pub destinations: [DestinationOptions; DESTINATION_COUNT],
}

impl Default for FlightOptions {
    fn default() -> Self {
        Self {
            destinations: [
                DestinationOptions {
                    position: [0.0, 0.0, 0.0],
                    view_direction: [1.0, 0.0, 0.0],
                },
                DestinationOptions {
                    position: [0.0, 1.0, 0.0],
                    view_direction: [0.0, -1.0, 0.0],
                },
                DestinationOptions {
                    position: [0.0, 0.0, 1.0],
                    view_direction: [0.0, 0.0, -1.0],
                },
                DestinationOptions {
                    position: [1.0, 0.0, 0.0],
                    view_direction: [-1.0, 0.0, 0.0],
                },
            ],
        }
    }
}
