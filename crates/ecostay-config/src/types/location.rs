//! Initial map location configuration

use serde::{Deserialize, Serialize};

/// Starting point for the location picker
///
/// Latitude and longitude are not range-checked: the picker passes any
/// coordinate through to the backend unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Initial map zoom level (slippy-map scale, 1 = whole world)
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            zoom: default_zoom(),
        }
    }
}

impl crate::validation::Validate for LocationConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::validate_range;

        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(ConfigError::ValidationError {
                field: "location".to_string(),
                message: "latitude and longitude must be finite numbers".to_string(),
            });
        }

        validate_range("location.zoom", f64::from(self.zoom), 1.0, 18.0)?;
        Ok(())
    }
}

fn default_latitude() -> f64 {
    48.8566
}

fn default_longitude() -> f64 {
    2.3522
}

fn default_zoom() -> u8 {
    6
}
