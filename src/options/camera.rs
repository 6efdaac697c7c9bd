use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::DEFAULT_MAX_ELEVATION;
use crate::error::AxleError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera smoothing and clamp parameters.
pub struct CameraOptions {
    /// Smoothness of look and inclination changes (0 snaps, 1 creeps).
    #[schemars(title = "Look Smoothness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub look_smoothness: f64,
    /// Smoothness of position changes (0 snaps, 1 creeps).
    #[schemars(title = "Position Smoothness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub position_smoothness: f64,
    /// Largest elevation above or below level, in degrees.
    #[schemars(title = "Max Elevation", range(min = 1.0, max = 90.0), extend("step" = 0.5))]
    pub max_elevation_degrees: f64,
    /// Heading the initial look direction reads as, in degrees.
    #[schemars(skip)]
    pub initial_heading_degrees: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            look_smoothness: 0.0,
            position_smoothness: 0.0,
            max_elevation_degrees: DEFAULT_MAX_ELEVATION.to_degrees(),
            initial_heading_degrees: 0.0,
        }
    }
}

impl CameraOptions {
    /// Check every field is in range.
    pub fn validate(&self) -> Result<(), AxleError> {
        for (name, value) in [
            ("look_smoothness", self.look_smoothness),
            ("position_smoothness", self.position_smoothness),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AxleError::InvalidOption(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if !(self.max_elevation_degrees > 0.0
            && self.max_elevation_degrees <= 90.0)
        {
            return Err(AxleError::InvalidOption(format!(
                "max_elevation_degrees must be within (0, 90], got {}",
                self.max_elevation_degrees
            )));
        }
        if !self.initial_heading_degrees.is_finite() {
            return Err(AxleError::InvalidOption(
                "initial_heading_degrees must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
