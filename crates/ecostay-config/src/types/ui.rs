//! Terminal UI timing configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Interval of the hero title style cycle, in milliseconds
    #[serde(default = "default_style_cycle_ms")]
    pub style_cycle_ms: u64,

    /// How long the event loop waits for input before redrawing
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            style_cycle_ms: default_style_cycle_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl crate::validation::Validate for UiConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::validate_positive;

        validate_positive("ui.style_cycle_ms", self.style_cycle_ms, 0)?;
        validate_positive("ui.tick_rate_ms", self.tick_rate_ms, 0)?;
        Ok(())
    }
}

fn default_style_cycle_ms() -> u64 {
    500
}

fn default_tick_rate_ms() -> u64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        assert!(UiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_tick_rate_invalid() {
        let config = UiConfig {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = UiConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let deserialized: UiConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, deserialized);
    }
}
