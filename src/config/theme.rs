//! Theme and Styling Configuration
//!
//! Manages the built-in color themes and resolves layer color tokens to
//! concrete colors.

use crate::error::{Error, Result};
use crate::models::{Color, LayerColor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Theme used when the configuration names none or an unknown one
pub const DEFAULT_THEME: &str = "light";

/// Theme manager for OSI Journey
#[derive(Debug, Clone)]
pub struct ThemeManager {
    /// Available themes
    themes: HashMap<String, Theme>,
    /// Current active theme
    current_theme: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Theme description
    pub description: String,
    /// Whether egui should use its dark visuals as a base
    pub dark_mode: bool,
    /// Surface and text colors
    pub colors: ThemeColors,
    /// Highlight color per OSI layer token
    pub layers: LayerPalette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Window background
    pub background: Color,
    /// Card the three columns sit on
    pub panel: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text (sub-step descriptions)
    pub muted_text: Color,
    /// Fill of inactive rows
    pub inactive_fill: Color,
    /// Fill of active journey steps
    pub active_step_fill: Color,
    /// Text on an active layer row
    pub active_layer_text: Color,
    /// Icon color of an active journey step
    pub active_icon: Color,
    /// Icon color of an inactive journey step
    pub inactive_icon: Color,
    /// Fill of the sub-step cards
    pub detail_fill: Color,
    /// Focus ring of the address field
    pub focus: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPalette {
    pub purple: Color,
    pub indigo: Color,
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub orange: Color,
    pub red: Color,
}

impl LayerPalette {
    /// Resolve a layer color token
    pub fn get(&self, token: LayerColor) -> Color {
        match token {
            LayerColor::Purple => self.purple,
            LayerColor::Indigo => self.indigo,
            LayerColor::Blue => self.blue,
            LayerColor::Green => self.green,
            LayerColor::Yellow => self.yellow,
            LayerColor::Orange => self.orange,
            LayerColor::Red => self.red,
        }
    }
}

impl Default for LayerPalette {
    fn default() -> Self {
        Self {
            purple: Color::rgb(0xa8, 0x55, 0xf7),
            indigo: Color::rgb(0x63, 0x66, 0xf1),
            blue: Color::rgb(0x3b, 0x82, 0xf6),
            green: Color::rgb(0x22, 0xc5, 0x5e),
            yellow: Color::rgb(0xea, 0xb3, 0x08),
            orange: Color::rgb(0xf9, 0x73, 0x16),
            red: Color::rgb(0xef, 0x44, 0x44),
        }
    }
}

impl Theme {
    /// Light gray surfaces with blue highlights
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            description: "Light surfaces with blue step highlights".to_string(),
            dark_mode: false,
            colors: ThemeColors {
                background: Color::rgb(0xf9, 0xfa, 0xfb),
                panel: Color::rgb(0xff, 0xff, 0xff),
                text: Color::rgb(0x11, 0x18, 0x27),
                muted_text: Color::rgb(0x4b, 0x55, 0x63),
                inactive_fill: Color::rgb(0xf3, 0xf4, 0xf6),
                active_step_fill: Color::rgb(0xdb, 0xea, 0xfe),
                active_layer_text: Color::rgb(0xff, 0xff, 0xff),
                active_icon: Color::rgb(0x3b, 0x82, 0xf6),
                inactive_icon: Color::rgb(0x6b, 0x72, 0x80),
                detail_fill: Color::rgb(0xf9, 0xfa, 0xfb),
                focus: Color::rgb(0x3b, 0x82, 0xf6),
            },
            layers: LayerPalette::default(),
        }
    }

    /// Dark slate surfaces, same layer palette
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            description: "Dark slate surfaces for low-light rooms".to_string(),
            dark_mode: true,
            colors: ThemeColors {
                background: Color::rgb(0x11, 0x18, 0x27),
                panel: Color::rgb(0x1f, 0x29, 0x37),
                text: Color::rgb(0xf9, 0xfa, 0xfb),
                muted_text: Color::rgb(0x9c, 0xa3, 0xaf),
                inactive_fill: Color::rgb(0x37, 0x41, 0x51),
                active_step_fill: Color::rgb(0x1e, 0x3a, 0x8a),
                active_layer_text: Color::rgb(0xff, 0xff, 0xff),
                active_icon: Color::rgb(0x60, 0xa5, 0xfa),
                inactive_icon: Color::rgb(0x9c, 0xa3, 0xaf),
                detail_fill: Color::rgb(0x1f, 0x29, 0x37),
                focus: Color::rgb(0x60, 0xa5, 0xfa),
            },
            layers: LayerPalette::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl ThemeManager {
    /// Create a manager holding the built-in themes, with the default active
    pub fn new() -> Self {
        let themes = [Theme::light(), Theme::dark()]
            .into_iter()
            .map(|theme| (theme.name.clone(), theme))
            .collect();

        Self {
            themes,
            current_theme: DEFAULT_THEME.to_string(),
        }
    }

    /// Activate a theme by name
    pub fn set_theme(&mut self, theme_name: &str) -> Result<()> {
        if !self.themes.contains_key(theme_name) {
            return Err(Error::ThemeNotFound {
                theme_name: theme_name.to_string(),
            });
        }
        self.current_theme = theme_name.to_string();
        debug!("Theme set to '{}'", theme_name);
        Ok(())
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme
    }

    /// Currently active theme
    pub fn current_theme(&self) -> &Theme {
        // current_theme is only ever set to a registered name
        &self.themes[&self.current_theme]
    }

    /// Names of all available themes, sorted
    pub fn theme_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
