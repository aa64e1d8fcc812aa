//! Configuration type definitions
//!
//! One module per concern. Each type carries its own defaults and
//! validation.

pub mod api;
pub mod location;
pub mod search;
pub mod ui;

pub use api::ApiConfig;
pub use location::LocationConfig;
pub use search::SearchConfig;
pub use ui::UiConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration, organized by functional area
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Recommendation endpoint settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Search submission behavior
    #[serde(default)]
    pub search: SearchConfig,

    /// Initial map location
    #[serde(default)]
    pub location: LocationConfig,

    /// Terminal UI timing
    #[serde(default)]
    pub ui: UiConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.api.validate()?;
        self.search.validate()?;
        self.location.validate()?;
        self.ui.validate()?;
        Ok(())
    }
}
