//! Configuration management for the EcoStay client
//!
//! This crate provides a validated configuration system with support for:
//! - Multiple formats (YAML, TOML, JSON)
//! - Config validation with helpful error messages
//! - Layered loading (file + environment + explicit overrides)
//!
//! # Example
//!
//! ```no_run
//! use ecostay_config::Config;
//!
//! // Load from default location (.ecostay.{toml,yml,json})
//! let config = Config::load()?;
//!
//! // Or load from specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! let endpoint = config.api.endpoint;
//! let top_n = config.search.top_n;
//! # Ok::<(), ecostay_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ConfigError, ErrorFormatter, Result};
pub use loader::{ConfigBuilder, ConfigOverlay};
pub use types::*;

pub use validation::Validate;
