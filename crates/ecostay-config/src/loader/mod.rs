//! Configuration loading from various sources

pub mod env;
pub mod file;
pub mod formats;
pub mod overlay;

pub use overlay::ConfigOverlay;

use crate::{Config, Result, Validate};
use std::path::{Path, PathBuf};

/// Format for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Configuration source for layered loading
#[derive(Debug, Clone)]
pub enum ConfigSource {
    File(PathBuf),
    Environment,
    /// Explicit fields (CLI flags, tests)
    Explicit(ConfigOverlay),
}

/// Builder for loading and layering configurations
///
/// Each source sets only the fields it names; later sources win, in the
/// order they were added. Unset fields keep their defaults.
///
/// ```no_run
/// use ecostay_config::loader::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".ecostay.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), ecostay_config::ConfigError>(())
/// ```
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(ConfigSource::File(path.as_ref().to_path_buf()));
        self
    }

    pub fn with_env(mut self) -> Self {
        self.sources.push(ConfigSource::Environment);
        self
    }

    /// Replace every field with the values of a complete config
    pub fn with_config(mut self, config: Config) -> Self {
        self.sources.push(ConfigSource::Explicit(config.into()));
        self
    }

    /// Set only the fields present in `overlay`
    pub fn with_overlay(mut self, overlay: ConfigOverlay) -> Self {
        self.sources.push(ConfigSource::Explicit(overlay));
        self
    }

    /// Apply all sources in order and validate the result
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        for source in self.sources {
            let overlay = match source {
                ConfigSource::File(path) => file::load_overlay(&path)?,
                ConfigSource::Environment => match env::from_env()? {
                    Some(overlay) => overlay,
                    None => continue,
                },
                ConfigSource::Explicit(overlay) => overlay,
            };
            config = overlay.apply(config);
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// File names probed by [`Config::load`], in order
pub const DEFAULT_PATHS: [&str; 4] = [
    ".ecostay.toml",
    ".ecostay.yml",
    ".ecostay.yaml",
    ".ecostay.json",
];

impl Config {
    /// Load configuration from the first default file found in the
    /// current directory, then apply the environment overlay.
    ///
    /// Falls back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let mut builder = ConfigBuilder::new();

        if let Some(path) = DEFAULT_PATHS.iter().find(|p| Path::new(p).exists()) {
            builder = builder.with_file(path);
        }

        builder.with_env().build()
    }

    /// Load configuration from a specific file plus the environment overlay
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(crate::ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}
