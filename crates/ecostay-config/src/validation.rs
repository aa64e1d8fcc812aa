//! Validation trait and helpers for configuration types

use crate::error::{ConfigError, Result};

/// Trait for validating configuration values
///
/// Implement this for any config type that needs checks beyond what the
/// type system gives us. Errors name the offending field.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Validate a float is within an inclusive range
pub fn validate_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Validate an integer is strictly above a minimum
pub fn validate_positive(field: impl Into<String>, value: u64, min: u64) -> Result<()> {
    if value <= min {
        return Err(ConfigError::InvalidInteger {
            field: field.into(),
            value,
            min,
        });
    }
    Ok(())
}

/// Validate a URL uses an http(s) scheme
pub fn validate_http_url(field: impl Into<String>, value: &str) -> Result<()> {
    let field = field.into();
    if value.is_empty() {
        return Err(ConfigError::ValidationError {
            field,
            message: "URL cannot be empty".to_string(),
        });
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ConfigError::ValidationError {
            field,
            message: format!("URL must start with http:// or https://, got: {}", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_valid() {
        assert!(validate_range("test", 0.5, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_range_invalid() {
        assert!(validate_range("test", 1.5, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_positive_valid() {
        assert!(validate_positive("test", 5, 0).is_ok());
    }

    #[test]
    fn test_positive_invalid() {
        assert!(validate_positive("test", 0, 0).is_err());
    }

    #[test]
    fn test_http_url() {
        assert!(validate_http_url("api.endpoint", "http://localhost:8000/recommend").is_ok());
        assert!(validate_http_url("api.endpoint", "https://example.com").is_ok());
        assert!(validate_http_url("api.endpoint", "localhost:8000").is_err());
        assert!(validate_http_url("api.endpoint", "").is_err());
    }
}
