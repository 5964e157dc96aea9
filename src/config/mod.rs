//! Configuration management for OSI Journey
//!
//! This module provides configuration loading/saving, theme management and
//! the runtime configuration handed to the GUI.

pub mod loader;
pub mod theme;

use crate::activation::{ActivationRules, LengthUnit};
use crate::config::theme::{Theme, ThemeManager};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for OSI Journey
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI configuration
    pub ui: UiConfig,

    /// Stage activation configuration
    pub activation: ActivationConfig,
}

impl Config {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.ui.validate()
    }
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// UI theme name
    pub theme_name: String,

    /// Body font size in points
    pub font_size: u32,

    /// Initial window dimensions
    pub window_width: u32,
    pub window_height: u32,

    /// Hint shown in the empty address field
    pub placeholder: String,

    /// Show a one-line description under each OSI layer
    pub show_layer_descriptions: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_name: theme::DEFAULT_THEME.to_string(),
            font_size: 14,
            window_width: 1200,
            window_height: 720,
            placeholder: "Type something like example.com".to_string(),
            show_layer_descriptions: false,
        }
    }
}

impl UiConfig {
    pub const MIN_FONT_SIZE: u32 = 8;
    pub const MAX_FONT_SIZE: u32 = 72;
    pub const MIN_WINDOW_WIDTH: u32 = 400;
    pub const MIN_WINDOW_HEIGHT: u32 = 300;

    /// Validate the UI configuration
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_FONT_SIZE..=Self::MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(Error::ConfigValidationFailed {
                field: "ui.font_size".to_string(),
                reason: format!(
                    "Font size {} must be between {} and {}",
                    self.font_size,
                    Self::MIN_FONT_SIZE,
                    Self::MAX_FONT_SIZE
                ),
            });
        }

        if self.window_width < Self::MIN_WINDOW_WIDTH {
            return Err(Error::ConfigValidationFailed {
                field: "ui.window_width".to_string(),
                reason: format!(
                    "Window width {} is below the minimum {}",
                    self.window_width,
                    Self::MIN_WINDOW_WIDTH
                ),
            });
        }

        if self.window_height < Self::MIN_WINDOW_HEIGHT {
            return Err(Error::ConfigValidationFailed {
                field: "ui.window_height".to_string(),
                reason: format!(
                    "Window height {} is below the minimum {}",
                    self.window_height,
                    Self::MIN_WINDOW_HEIGHT
                ),
            });
        }

        if self.theme_name.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "ui.theme_name".to_string(),
                reason: "Theme name cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Stage activation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationConfig {
    /// How the input length is counted against the thresholds
    pub length_unit: LengthUnit,
}

impl ActivationConfig {
    pub fn rules(&self) -> ActivationRules {
        ActivationRules::new(self.length_unit)
    }
}

/// Runtime configuration manager
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Current configuration
    config: Config,
    /// Theme manager
    theme_manager: ThemeManager,
    /// Configuration file path, when loaded from or saved to a file
    config_path: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Load configuration from the default search paths, falling back to defaults
    pub fn new() -> Result<Self> {
        let mut loader = loader::ConfigLoader::new();
        let config = loader.load_with(loader::LoadOptions::default())?;
        let mut runtime = Self::from_config(config);
        runtime.config_path = loader.current_path().map(Path::to_path_buf);
        Ok(runtime)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let config = loader::ConfigLoader::load_from_path(path)?;
        let mut runtime = Self::from_config(config);
        runtime.config_path = Some(path.to_path_buf());
        Ok(runtime)
    }

    /// Wrap an already loaded configuration
    ///
    /// An unknown theme name falls back to the default theme.
    pub fn from_config(config: Config) -> Self {
        let mut theme_manager = ThemeManager::new();
        if let Err(e) = theme_manager.set_theme(&config.ui.theme_name) {
            warn!("{}, using '{}'", e, theme_manager.current_theme_name());
        }

        Self {
            config,
            theme_manager,
            config_path: None,
        }
    }

    /// Save current configuration
    pub fn save(&mut self) -> Result<PathBuf> {
        let loader = loader::ConfigLoader::new();
        let path = match &self.config_path {
            Some(path) => {
                loader.save_to_path(&self.config, path)?;
                path.clone()
            }
            None => loader.save(&self.config)?,
        };
        self.config_path = Some(path.clone());
        Ok(path)
    }

    /// Get current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Switch theme, keeping the configuration in sync
    pub fn set_theme(&mut self, theme_name: &str) -> Result<()> {
        self.theme_manager.set_theme(theme_name)?;
        self.config.ui.theme_name = theme_name.to_string();
        Ok(())
    }

    /// Get theme manager
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Active theme
    pub fn theme(&self) -> &Theme {
        self.theme_manager.current_theme()
    }

    /// Path the configuration came from, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Activation rules derived from the configuration
    pub fn activation_rules(&self) -> ActivationRules {
        self.config.activation.rules()
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
