//! Configuration loading and management

use crate::config::types::{AutoEscapeMode, UndefinedMode};
use crate::constants::{CONFIG_EXTENSIONS, DEFAULT_TEMPLATE_EXTENSION};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Options handed to the template engine when a view is built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineOptions {
    /// Appended to every template name, including the leading dot.
    #[serde(default = "get_default_extension")]
    pub extension: String,
    #[serde(default)]
    pub auto_escape: AutoEscapeMode,
    #[serde(default)]
    pub undefined: UndefinedMode,
    #[serde(default)]
    pub trim_blocks: bool,
    #[serde(default)]
    pub lstrip_blocks: bool,
    #[serde(default)]
    pub keep_trailing_newline: bool,
    #[serde(default)]
    pub debug: bool,
    /// Registers the case conversion and regex filters.
    #[serde(default = "get_default_standard_filters")]
    pub standard_filters: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            extension: get_default_extension(),
            auto_escape: AutoEscapeMode::default(),
            undefined: UndefinedMode::default(),
            trim_blocks: false,
            lstrip_blocks: false,
            keep_trailing_newline: false,
            debug: false,
            standard_filters: get_default_standard_filters(),
        }
    }
}

impl EngineOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(Error::InvalidOption(format!(
                "extension '{}' must start with '.' and have at least 1 character after it",
                self.extension
            )));
        }
        Ok(())
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

/// Everything needed to build a view: the template root and engine options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewConfig {
    /// Template root, used verbatim as a prefix of every template name.
    pub path: String,
    #[serde(flatten)]
    pub options: EngineOptions,
}

impl ViewConfig {
    pub fn new(path: impl Into<String>, options: EngineOptions) -> Self {
        Self { path: path.into(), options }
    }

    /// Loads a view configuration from a `.json`, `.yaml` or `.yml` file.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let display = config_path.display().to_string();
        let format = config_path
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| CONFIG_EXTENSIONS.contains(ext))
            .ok_or_else(|| Error::ConfigFormat {
                path: display.clone(),
                expected: CONFIG_EXTENSIONS.join(", "),
            })?;

        debug!("Loading view config from {display}");
        let content = std::fs::read_to_string(config_path)?;
        let config: ViewConfig = match format {
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: display.clone(),
                reason: e.to_string(),
            })?,
            _ => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: display.clone(),
                reason: e.to_string(),
            })?,
        };

        config.options.validate()?;
        Ok(config)
    }
}

fn get_default_extension() -> String {
    DEFAULT_TEMPLATE_EXTENSION.to_string()
}

fn get_default_standard_filters() -> bool {
    true
}
