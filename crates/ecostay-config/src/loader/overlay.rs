//! Partial configuration layers
//!
//! A layer only carries the fields its source actually set. Applying it
//! replaces exactly those fields of the accumulated config, so a later
//! layer can restore a value equal to the default.

use crate::{types::*, Config};
use serde::Deserialize;

/// Fields set by one configuration source
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigOverlay {
    pub api: ApiOverlay,
    pub search: SearchOverlay,
    pub location: LocationOverlay,
    pub ui: UiOverlay,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiOverlay {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchOverlay {
    pub top_n: Option<u32>,
    pub default_query: Option<String>,
    pub reveal_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocationOverlay {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub zoom: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiOverlay {
    pub style_cycle_ms: Option<u64>,
    pub tick_rate_ms: Option<u64>,
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl ConfigOverlay {
    /// True when the source set no field at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write every set field onto `base`
    pub fn apply(self, mut base: Config) -> Config {
        set(&mut base.api.endpoint, self.api.endpoint);
        set(&mut base.api.timeout_secs, self.api.timeout_secs);

        set(&mut base.search.top_n, self.search.top_n);
        set(&mut base.search.default_query, self.search.default_query);
        set(&mut base.search.reveal_delay_ms, self.search.reveal_delay_ms);

        set(&mut base.location.latitude, self.location.latitude);
        set(&mut base.location.longitude, self.location.longitude);
        set(&mut base.location.zoom, self.location.zoom);

        set(&mut base.ui.style_cycle_ms, self.ui.style_cycle_ms);
        set(&mut base.ui.tick_rate_ms, self.ui.tick_rate_ms);
        base
    }
}

/// A complete config sets every field
impl From<Config> for ConfigOverlay {
    fn from(config: Config) -> Self {
        let Config {
            api,
            search,
            location,
            ui,
        } = config;
        Self {
            api: ApiOverlay {
                endpoint: Some(api.endpoint),
                timeout_secs: Some(api.timeout_secs),
            },
            search: SearchOverlay {
                top_n: Some(search.top_n),
                default_query: Some(search.default_query),
                reveal_delay_ms: Some(search.reveal_delay_ms),
            },
            location: LocationOverlay {
                latitude: Some(location.latitude),
                longitude: Some(location.longitude),
                zoom: Some(location.zoom),
            },
            ui: UiOverlay {
                style_cycle_ms: Some(ui.style_cycle_ms),
                tick_rate_ms: Some(ui.tick_rate_ms),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_fields_win() {
        let mut base = Config::default();
        base.search.default_query = "near the station".to_string();

        let mut overlay = ConfigOverlay::default();
        overlay.search.top_n = Some(20);

        let config = overlay.apply(base);
        assert_eq!(config.search.top_n, 20);
        assert_eq!(config.search.default_query, "near the station");
    }

    #[test]
    fn test_default_valued_field_restores_default() {
        let mut base = Config::default();
        base.search.top_n = 8;
        base.search.reveal_delay_ms = 0;

        let mut overlay = ConfigOverlay::default();
        overlay.search.top_n = Some(4);
        overlay.search.reveal_delay_ms = Some(400);

        let config = overlay.apply(base);
        assert_eq!(config.search.top_n, 4);
        assert_eq!(config.search.reveal_delay_ms, 400);
    }

    #[test]
    fn test_empty_overlay_keeps_base() {
        let mut base = Config::default();
        base.ui.tick_rate_ms = 50;
        base.location.zoom = 9;

        let overlay = ConfigOverlay::default();
        assert!(overlay.is_empty());
        assert_eq!(overlay.apply(base.clone()), base);
    }

    #[test]
    fn test_location_partial() {
        let mut base = Config::default();
        base.location.longitude = 5.5;

        let mut overlay = ConfigOverlay::default();
        overlay.location.latitude = Some(45.0);

        let config = overlay.apply(base);
        assert_eq!(config.location.latitude, 45.0);
        assert_eq!(config.location.longitude, 5.5);
    }

    #[test]
    fn test_full_config_replaces_everything() {
        let mut base = Config::default();
        base.api.timeout_secs = 5;
        base.location.latitude = 10.0;

        let config = ConfigOverlay::from(Config::default()).apply(base);
        assert_eq!(config, Config::default());
    }
}
