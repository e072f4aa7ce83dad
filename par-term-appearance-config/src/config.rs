//! The appearance section of the configuration file.
//!
//! Covers:
//! - Parsing the section from YAML (`from_yaml_str`, `load_from`)
//! - Strict range checks for the input layer (`validate`)
//! - Lenient repair of out-of-range values after loading (`normalize`)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::defaults::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::error::ConfigError;
use crate::types::{ScaleOption, ThemeCategory, TitleBarMode, nearest_scale_percent};

/// Appearance preferences as stored in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Identifier of the terminal font (PostScript name)
    #[serde(default)]
    pub terminal_font: String,

    /// Terminal font size in pixels, 1..=1024
    #[serde(default = "crate::defaults::terminal_font_size")]
    pub terminal_font_size: u32,

    /// Theme identifier for the terminal category
    #[serde(default)]
    pub theme_terminal: String,

    /// Theme identifier for the text & syntax category
    #[serde(default)]
    pub theme_syntax: String,

    /// Theme identifier for the interface category
    #[serde(default, alias = "theme_gui")]
    pub theme_interface: String,

    /// Interface zoom, one of the [`ScaleOption`] percentages
    #[serde(default = "crate::defaults::ui_scale_percent")]
    pub ui_scale_percent: u32,

    /// Window title bar style (requires restart)
    #[serde(default = "crate::defaults::title_bar_style")]
    pub title_bar_style: TitleBarMode,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            terminal_font: String::new(),
            terminal_font_size: crate::defaults::terminal_font_size(),
            theme_terminal: String::new(),
            theme_syntax: String::new(),
            theme_interface: String::new(),
            ui_scale_percent: crate::defaults::ui_scale_percent(),
            title_bar_style: crate::defaults::title_bar_style(),
        }
    }
}

impl AppearanceConfig {
    /// Parse an appearance section from YAML without repairing values.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(contents)?)
    }

    /// Serialize the section back to YAML for the config writer.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Load an appearance section from a YAML file and repair any
    /// out-of-range values.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading appearance config from {:?}", path);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read appearance config {:?}", path))?;
        let mut config = Self::from_yaml_str(&contents)?;
        config.normalize();
        Ok(config)
    }

    /// Theme identifier configured for `category`
    pub fn theme(&self, category: ThemeCategory) -> &str {
        match category {
            ThemeCategory::Terminal => &self.theme_terminal,
            ThemeCategory::Syntax => &self.theme_syntax,
            ThemeCategory::Interface => &self.theme_interface,
        }
    }

    /// Reject values outside the accepted ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.terminal_font_size) {
            return Err(ConfigError::Validation(format!(
                "terminal_font_size {} is outside {}..={}",
                self.terminal_font_size, MIN_FONT_SIZE, MAX_FONT_SIZE
            )));
        }
        if ScaleOption::find(self.ui_scale_percent).is_none() {
            return Err(ConfigError::Validation(format!(
                "ui_scale_percent {} is not one of the available zoom levels",
                self.ui_scale_percent
            )));
        }
        Ok(())
    }

    /// Clamp the font size and snap the UI scale to a known option.
    ///
    /// Returns `true` if any field was changed.
    pub fn normalize(&mut self) -> bool {
        let mut changed = false;

        let clamped = self.terminal_font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if clamped != self.terminal_font_size {
            log::warn!(
                "terminal_font_size {} out of range, clamped to {}",
                self.terminal_font_size,
                clamped
            );
            self.terminal_font_size = clamped;
            changed = true;
        }

        if ScaleOption::find(self.ui_scale_percent).is_none() {
            let snapped = nearest_scale_percent(self.ui_scale_percent);
            log::warn!(
                "ui_scale_percent {} is not a zoom level, using {}",
                self.ui_scale_percent,
                snapped
            );
            self.ui_scale_percent = snapped;
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppearanceConfig::default();
        assert_eq!(config.terminal_font, "");
        assert_eq!(config.terminal_font_size, 13);
        assert_eq!(config.ui_scale_percent, 100);
        assert_eq!(config.title_bar_style, TitleBarMode::ThemeDrawn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = AppearanceConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, AppearanceConfig::default());
    }

    #[test]
    fn test_yaml_deserialization() {
        let yaml = r#"
terminal_font: "DejaVuSansMono"
terminal_font_size: 16
theme_terminal: "default-terminal"
theme_syntax: "default-syntax"
theme_gui: "two-dark-ui"
ui_scale_percent: 150
title_bar_style: native
"#;
        let config = AppearanceConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.terminal_font, "DejaVuSansMono");
        assert_eq!(config.terminal_font_size, 16);
        assert_eq!(config.theme(ThemeCategory::Terminal), "default-terminal");
        assert_eq!(config.theme(ThemeCategory::Syntax), "default-syntax");
        assert_eq!(config.theme(ThemeCategory::Interface), "two-dark-ui");
        assert_eq!(config.ui_scale_percent, 150);
        assert_eq!(config.title_bar_style, TitleBarMode::Native);
    }

    #[test]
    fn test_yaml_serialization() {
        let config = AppearanceConfig {
            theme_interface: "two-dark-ui".to_string(),
            ..AppearanceConfig::default()
        };
        let yaml = config.to_yaml_string().unwrap();
        assert!(yaml.contains("terminal_font_size: 13"));
        assert!(yaml.contains("theme_interface: two-dark-ui"));
        assert!(yaml.contains("title_bar_style: theme"));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = AppearanceConfig::from_yaml_str("terminal_font_size: [not a number").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_font_size_out_of_range() {
        let config = AppearanceConfig {
            terminal_font_size: 0,
            ..AppearanceConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));

        let config = AppearanceConfig {
            terminal_font_size: 1025,
            ..AppearanceConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_scale() {
        let config = AppearanceConfig {
            ui_scale_percent: 101,
            ..AppearanceConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ui_scale_percent 101"));
    }

    #[test]
    fn test_normalize_repairs_values() {
        let mut config = AppearanceConfig {
            terminal_font_size: 5000,
            ui_scale_percent: 140,
            ..AppearanceConfig::default()
        };
        assert!(config.normalize());
        assert_eq!(config.terminal_font_size, 1024);
        assert_eq!(config.ui_scale_percent, 150);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_normalize_leaves_valid_config_alone() {
        let mut config = AppearanceConfig::default();
        assert!(!config.normalize());
        assert_eq!(config, AppearanceConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "terminal_font_size: 0").unwrap();
        writeln!(file, "ui_scale_percent: 60").unwrap();
        writeln!(file, "title_bar_style: native").unwrap();

        let config = AppearanceConfig::load_from(file.path()).unwrap();
        assert_eq!(config.terminal_font_size, 1);
        assert_eq!(config.ui_scale_percent, 65);
        assert_eq!(config.title_bar_style, TitleBarMode::Native);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppearanceConfig::load_from(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read appearance config"));
    }

    #[test]
    fn test_load_from_invalid_yaml_downcasts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title_bar_style: sideways").unwrap();

        let err = AppearanceConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Parse(_))
        ));
    }
}
