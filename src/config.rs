//! Configuration management for the application.
//!
//! This module handles loading and validating configuration in TOML
//! format with platform-specific directory resolution. Every setting has a
//! default matching stock VCV Rack widgets, so a missing file is not an error.

use crate::constants::{
    COMPONENTS_LAYER_LABEL, DEFAULT_CUSTOM_WIDGET, DEFAULT_LIGHT_WIDGET, DEFAULT_PARAM_WIDGET,
    DEFAULT_PORT_WIDGET,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for locating component markers in a panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// `inkscape:label` of the layer holding the markers
    pub layer_label: String,
    /// Fail when more than one layer carries the label instead of using the first
    pub strict_layer: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            layer_label: COMPONENTS_LAYER_LABEL.to_string(),
            strict_layer: false,
        }
    }
}

/// Widget types used in generated statements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Knob for params without an explicit widget (e.g. "RoundBlackKnob")
    pub default_param_widget: String,
    /// Jack for inputs and outputs (e.g. "PJ301MPort")
    pub port_widget: String,
    /// Light widget (e.g. "MediumLight<RedLight>")
    pub light_widget: String,
    /// Placeholder type for custom widgets
    pub custom_widget: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_param_widget: DEFAULT_PARAM_WIDGET.to_string(),
            port_widget: DEFAULT_PORT_WIDGET.to_string(),
            light_widget: DEFAULT_LIGHT_WIDGET.to_string(),
            custom_widget: DEFAULT_CUSTOM_WIDGET.to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Panel extraction settings
    pub extract: ExtractConfig,
    /// Source generation settings
    pub generator: GeneratorConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/Panelgen/`
    /// - macOS: `~/Library/Application Support/Panelgen/`
    /// - Windows: `%APPDATA%\Panelgen\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Panelgen");

        Ok(config_dir)
    }

    /// Gets the full path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from `path`, or from the default location if `None`.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an existing file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - the layer label is not empty
    /// - every widget type is a non-empty token without whitespace
    pub fn validate(&self) -> Result<()> {
        if self.extract.layer_label.trim().is_empty() {
            anyhow::bail!("extract.layer_label must not be empty");
        }

        let widgets = [
            ("default_param_widget", &self.generator.default_param_widget),
            ("port_widget", &self.generator.port_widget),
            ("light_widget", &self.generator.light_widget),
            ("custom_widget", &self.generator.custom_widget),
        ];
        for (key, value) in widgets {
            if value.is_empty() {
                anyhow::bail!("generator.{key} must not be empty");
            }
            if value.chars().any(char::is_whitespace) {
                anyhow::bail!("generator.{key} must not contain whitespace (got \"{value}\")");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.extract.layer_label, "components");
        assert!(!config.extract.strict_layer);
        assert_eq!(config.generator.default_param_widget, "RoundBlackKnob");
        assert_eq!(config.generator.port_widget, "PJ301MPort");
        assert_eq!(config.generator.light_widget, "MediumLight<RedLight>");
        assert_eq!(config.generator.custom_widget, "Widget");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        config.generator.port_widget = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.generator.light_widget = "Medium Light".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.extract.layer_label = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"[extract]
layer_label = "markers"
strict_layer = true

[generator]
default_param_widget = "Trimpot"
port_widget = "CL1362Port"
light_widget = "SmallLight<GreenLight>"
custom_widget = "LedDisplay"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(
            config.extract,
            ExtractConfig {
                layer_label: "markers".to_string(),
                strict_layer: true,
            }
        );
        assert_eq!(config.generator.default_param_widget, "Trimpot");
        assert_eq!(config.generator.light_widget, "SmallLight<GreenLight>");
        assert_eq!(config.generator.custom_widget, "LedDisplay");
    }

    #[test]
    fn test_config_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::new());
    }

    #[test]
    fn test_config_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[generator]\nport_widget = \"CL1362Port\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.generator.port_widget, "CL1362Port");
        assert_eq!(config.generator.default_param_widget, "RoundBlackKnob");
        assert_eq!(config.extract, ExtractConfig::default());
    }

    #[test]
    fn test_config_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        fs::write(&path, "[generator\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());

        fs::write(&path, "[extract]\nlayer_label = \"\"\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}
