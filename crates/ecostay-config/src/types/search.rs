//! Search configuration

use serde::{Deserialize, Serialize};

/// Search submission behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Number of hotels requested per search (`top_n` on the wire)
    #[serde(default = "default_top_n")]
    pub top_n: u32,

    /// Query text pre-filled in the search box
    #[serde(default = "default_query")]
    pub default_query: String,

    /// Delay between hiding the hero and revealing results, in milliseconds
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            default_query: default_query(),
            reveal_delay_ms: default_reveal_delay_ms(),
        }
    }
}

impl crate::validation::Validate for SearchConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::validate_positive;

        validate_positive("search.top_n", u64::from(self.top_n), 0)?;
        if self.top_n > 100 {
            return Err(ConfigError::ValidationError {
                field: "search.top_n".to_string(),
                message: format!("top_n too large ({}), use <= 100", self.top_n),
            });
        }

        if self.reveal_delay_ms > 5_000 {
            return Err(ConfigError::ValidationError {
                field: "search.reveal_delay_ms".to_string(),
                message: format!(
                    "reveal delay of {}ms would stall the results view, use <= 5000",
                    self.reveal_delay_ms
                ),
            });
        }

        Ok(())
    }
}

fn default_top_n() -> u32 {
    4
}

fn default_query() -> String {
    "I want a quiet hotel with great Wi-Fi".to_string()
}

fn default_reveal_delay_ms() -> u64 {
    400
}
