//! Configuration module for plugin generation
//!
//! Configuration can be loaded from TOML files and/or environment variables.
//! It selects the target PHP language level (and with it the
//! [`FeatureProfile`]) and controls the layout of rendered methods.

mod defaults;
mod loading;


use crate::error::{Error, Result};
use crate::features::{FeatureProfile, PhpLanguageLevel};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use defaults::*;

/// Returns the path to the global configuration file
///
/// The global config is stored at `~/.plugingen/config.toml`.
pub fn global_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::config("Unable to determine home directory".to_string()))?;
    Ok(home_dir.join(".plugingen").join("config.toml"))
}

/// Target runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhpConfig {
    /// PHP language level of the project the plugin is generated into
    #[serde(default = "default_language_level")]
    pub language_level: PhpLanguageLevel,

    /// Force scalar type hints on or off regardless of language level
    #[serde(default)]
    pub scalar_type_hints: Option<bool>,

    /// Force nullable types on or off regardless of language level
    #[serde(default)]
    pub nullable_types: Option<bool>,

    /// Force return type declarations on or off regardless of language level
    #[serde(default)]
    pub return_type_declarations: Option<bool>,

    /// Force the `void` return type on or off regardless of language level
    #[serde(default)]
    pub void_return_type: Option<bool>,
}

impl Default for PhpConfig {
    fn default() -> Self {
        Self {
            language_level: default_language_level(),
            scalar_type_hints: None,
            nullable_types: None,
            return_type_declarations: None,
            void_return_type: None,
        }
    }
}

/// Layout of rendered plugin methods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Indentation unit for method bodies
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Visibility keyword of generated methods
    #[serde(default = "default_method_visibility")]
    pub method_visibility: String,

    /// Placeholder comment written into generated method bodies
    #[serde(default = "default_body_comment")]
    pub body_comment: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            method_visibility: default_method_visibility(),
            body_comment: default_body_comment(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Target runtime configuration
    #[serde(default)]
    pub php: PhpConfig,

    /// Rendering configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.indent.is_empty() {
            return Err(Error::config("output.indent cannot be empty".to_string()));
        }
        if !self.output.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(Error::config(format!(
                "output.indent must contain only spaces or tabs, got {:?}",
                self.output.indent
            )));
        }

        if !VALID_VISIBILITIES.contains(&self.output.method_visibility.as_str()) {
            return Err(Error::config(format!(
                "Invalid method visibility '{}'. Must be one of: {:?}",
                self.output.method_visibility, VALID_VISIBILITIES
            )));
        }

        let profile = self.feature_profile();
        if profile.void_return_type && !profile.return_type_declarations {
            return Err(Error::config(
                "php.void_return_type requires php.return_type_declarations".to_string(),
            ));
        }

        Ok(())
    }

    /// Feature profile for the configured language level with overrides applied
    pub fn feature_profile(&self) -> FeatureProfile {
        let base = self.php.language_level.feature_profile();
        FeatureProfile {
            scalar_type_hints: self.php.scalar_type_hints.unwrap_or(base.scalar_type_hints),
            nullable_types: self.php.nullable_types.unwrap_or(base.nullable_types),
            return_type_declarations: self
                .php
                .return_type_declarations
                .unwrap_or(base.return_type_declarations),
            void_return_type: self.php.void_return_type.unwrap_or(base.void_return_type),
        }
    }

    /// Saves the configuration as TOML
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
