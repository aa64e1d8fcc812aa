//! Recommendation API configuration

use serde::{Deserialize, Serialize};

/// Where and how the recommendation request is sent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Full URL of the recommendation endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl crate::validation::Validate for ApiConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::{validate_http_url, validate_positive};

        validate_http_url("api.endpoint", &self.endpoint)?;
        validate_positive("api.timeout_secs", self.timeout_secs, 0)?;
        Ok(())
    }
}

fn default_endpoint() -> String {
    "http://localhost:8000/recommend".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let config = ApiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint, "http://localhost:8000/recommend");
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = ApiConfig {
            endpoint: "localhost:8000/recommend".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_invalid() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
