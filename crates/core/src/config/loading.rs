//! Configuration loading from files and environment variables

use crate::error::{Error, Result};
use config::{Config as ConfigLib, ConfigBuilder as LibConfigBuilder, Environment, File};
use std::path::Path;

use super::defaults::*;
use super::{global_config_path, Config};

/// Helper to set a config default with consistent error mapping
fn set_config_default<T: Into<config::Value>>(
    builder: LibConfigBuilder<config::builder::DefaultState>,
    key: &str,
    value: T,
) -> Result<LibConfigBuilder<config::builder::DefaultState>> {
    builder
        .set_default(key, value)
        .map_err(|e| Error::config(format!("Failed to set {key} default: {e}")))
}

impl Config {
    /// Loads configuration from a TOML file with environment variable overrides
    ///
    /// Environment variables are prefixed with `PLUGINGEN_` and use double underscores
    /// for nested values. For example:
    /// - `PLUGINGEN_PHP__LANGUAGE_LEVEL=8.1`
    /// - `PLUGINGEN_OUTPUT__INDENT="  "`
    pub fn from_file(path: &Path) -> Result<Self> {
        let builder = ConfigLib::builder();

        // Set defaults explicitly (config crate doesn't apply serde defaults for missing sections)
        let builder = set_config_default(
            builder,
            "php.language_level",
            default_language_level().as_str(),
        )?;
        let builder = set_config_default(builder, "output.indent", default_indent())?;
        let builder = set_config_default(
            builder,
            "output.method_visibility",
            default_method_visibility(),
        )?;
        let mut builder =
            set_config_default(builder, "output.body_comment", default_body_comment())?;

        if path.exists() {
            tracing::debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        // Add environment variables with PLUGINGEN_ prefix
        builder = builder.add_source(
            Environment::with_prefix("PLUGINGEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .ignore_empty(true),
        );

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))
    }

    /// Creates a config from a TOML string (useful for testing)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from a single file
    ///
    /// Precedence (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Config file (~/.plugingen/config.toml or custom --config path)
    /// 3. Environment variables (PLUGINGEN_*)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => global_config_path()?,
        };
        Self::from_file(&path)
    }
}
