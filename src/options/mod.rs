//! Camera configuration with TOML support.
//!
//! Options serialize to/from TOML strings; where those strings live is up to
//! the host.

mod camera;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AxleError;

/// Top-level options container. Sub-structs use `#[serde(default)]` so
/// partial TOML (e.g. only `[camera] look_smoothness`) works.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera smoothing and clamp parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse and validate options from TOML. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, AxleError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| AxleError::OptionsParse(e.to_string()))?;
        options.validate()?;
        log::debug!("parsed camera options: {:?}", options.camera);
        Ok(options)
    }

    /// Render options as pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String, AxleError> {
        toml::to_string_pretty(self)
            .map_err(|e| AxleError::OptionsParse(e.to_string()))
    }

    /// Check every section is in range.
    pub fn validate(&self) -> Result<(), AxleError> {
        self.camera.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Camera, DEFAULT_MAX_ELEVATION};
    use crate::math::Vector3;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml_string().unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
look_smoothness = 0.8
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.look_smoothness, 0.8);
        assert_eq!(opts.camera.position_smoothness, 0.0);
        assert!(
            (opts.camera.max_elevation_degrees
                - DEFAULT_MAX_ELEVATION.to_degrees())
            .abs()
                < 1e-12
        );
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Options::from_toml_str("").unwrap(), Options::default());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = Options::from_toml_str("[camera]\nlook_smoothness = 1.5\n")
            .unwrap_err();
        assert!(matches!(err, AxleError::InvalidOption(_)));

        let err =
            Options::from_toml_str("[camera]\nmax_elevation_degrees = 0.0\n")
                .unwrap_err();
        assert!(matches!(err, AxleError::InvalidOption(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml_str("[camera\n").unwrap_err();
        assert!(matches!(err, AxleError::OptionsParse(_)));
        let err =
            Options::from_toml_str("[camera]\nlook_smoothness = \"fast\"\n")
                .unwrap_err();
        assert!(matches!(err, AxleError::OptionsParse(_)));
    }

    #[test]
    fn options_configure_camera() {
        let opts = Options::from_toml_str(
            r"
[camera]
look_smoothness = 0.25
position_smoothness = 1.0
max_elevation_degrees = 30.0
initial_heading_degrees = 90.0
",
        )
        .unwrap();
        let camera = Camera::from_options(
            Vector3::ZERO,
            Vector3::UP,
            Vector3::new(0.0, 1.0, 0.0),
            &opts.camera,
        );
        let (look, position) = camera.smoothing_coefficients();
        assert!((look - 0.75).abs() < 1e-12);
        assert!((position - 0.001).abs() < 1e-12);
        let (min, max) = camera.elevation_limits();
        assert!((max - 30f64.to_radians()).abs() < 1e-12);
        assert!((min + 30f64.to_radians()).abs() < 1e-12);
        assert!((camera.horizontal_angle_degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let camera = &schema_value["properties"]["camera"]["properties"];
        assert!(camera.get("look_smoothness").is_some());
        assert!(camera.get("position_smoothness").is_some());
        assert!(camera.get("max_elevation_degrees").is_some());
        assert!(camera.get("initial_heading_degrees").is_none());
    }
}
