//! Environment variable configuration overlay
//!
//! Variables follow `ECOSTAY_<SECTION>_<FIELD>=value`, for example:
//! - `ECOSTAY_API_ENDPOINT=http://10.0.0.2:8000/recommend`
//! - `ECOSTAY_SEARCH_TOP_N=8`
//! - `ECOSTAY_LOCATION_LATITUDE=45.0`

use super::overlay::{ApiOverlay, ConfigOverlay, LocationOverlay, SearchOverlay, UiOverlay};
use crate::{error::ConfigError, Result};
use std::env;
use std::str::FromStr;

const PREFIX: &str = "ECOSTAY_";
const SECTIONS: [&str; 4] = ["api", "search", "location", "ui"];

/// Parse configuration from environment variables
///
/// Returns `None` when no `ECOSTAY_` variable is set. Variables that fail to
/// parse are logged and skipped.
pub fn from_env() -> Result<Option<ConfigOverlay>> {
    let env_vars: Vec<(String, String)> =
        env::vars().filter(|(k, _)| k.starts_with(PREFIX)).collect();

    if env_vars.is_empty() {
        return Ok(None);
    }

    let mut overlay = ConfigOverlay::default();
    for (key, value) in env_vars {
        if let Err(e) = apply_env_var(&mut overlay, &key, &value) {
            tracing::warn!(var = %key, error = %e, "ignoring environment variable");
        }
    }

    Ok(Some(overlay))
}

/// Apply a single environment variable to config
fn apply_env_var(config: &mut ConfigOverlay, key: &str, value: &str) -> Result<()> {
    let stripped = key.strip_prefix(PREFIX).unwrap_or(key);

    let Some((section, field)) = stripped.split_once('_') else {
        return Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: "Expected format: ECOSTAY_<section>_<field>".to_string(),
        });
    };

    let section = section.to_lowercase();
    let field = field.to_lowercase();

    match section.as_str() {
        "api" => apply_api_var(&mut config.api, &field, value),
        "search" => apply_search_var(&mut config.search, &field, value),
        "location" => apply_location_var(&mut config.location, &field, value),
        "ui" => apply_ui_var(&mut config.ui, &field, value),
        _ => Err(ConfigError::invalid_enum(
            "environment section",
            section,
            &SECTIONS,
        )),
    }
}

fn parse_value<T: FromStr>(section: &str, field: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| ConfigError::EnvVarError {
        var: format!("{}{}_{}", PREFIX, section.to_uppercase(), field.to_uppercase()),
        message: format!("Invalid {}: {}", kind, value),
    })
}

fn unknown_field(section: &str, field: &str) -> ConfigError {
    ConfigError::EnvVarError {
        var: format!("{}{}_{}", PREFIX, section.to_uppercase(), field.to_uppercase()),
        message: format!("Unknown field: {}", field),
    }
}

fn apply_api_var(config: &mut ApiOverlay, field: &str, value: &str) -> Result<()> {
    match field {
        "endpoint" => config.endpoint = Some(value.to_string()),
        "timeout_secs" => config.timeout_secs = Some(parse_value("api", field, value, "integer")?),
        _ => return Err(unknown_field("api", field)),
    }
    Ok(())
}

fn apply_search_var(config: &mut SearchOverlay, field: &str, value: &str) -> Result<()> {
    match field {
        "top_n" => config.top_n = Some(parse_value("search", field, value, "integer")?),
        "default_query" => config.default_query = Some(value.to_string()),
        "reveal_delay_ms" => {
            config.reveal_delay_ms = Some(parse_value("search", field, value, "integer")?)
        }
        _ => return Err(unknown_field("search", field)),
    }
    Ok(())
}

fn apply_location_var(config: &mut LocationOverlay, field: &str, value: &str) -> Result<()> {
    match field {
        "latitude" | "lat" => {
            config.latitude = Some(parse_value("location", field, value, "float")?)
        }
        "longitude" | "lng" => {
            config.longitude = Some(parse_value("location", field, value, "float")?)
        }
        "zoom" => config.zoom = Some(parse_value("location", field, value, "integer")?),
        _ => return Err(unknown_field("location", field)),
    }
    Ok(())
}

fn apply_ui_var(config: &mut UiOverlay, field: &str, value: &str) -> Result<()> {
    match field {
        "style_cycle_ms" => {
            config.style_cycle_ms = Some(parse_value("ui", field, value, "integer")?)
        }
        "tick_rate_ms" => {
            config.tick_rate_ms = Some(parse_value("ui", field, value, "integer")?)
        }
        _ => return Err(unknown_field("ui", field)),
    }
    Ok(())
}

// Env vars are process-global; serialize the tests that touch them.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
pub(crate) fn cleanup_env_vars() {
    let keys: Vec<String> = env::vars()
        .filter(|(k, _)| k.starts_with(PREFIX))
        .map(|(k, _)| k)
        .collect();
    for key in keys {
        env::remove_var(&key);
    }
}
