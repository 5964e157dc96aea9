//! Color utilities for UI rendering
//!
//! This module converts config colors to egui colors and caches the active
//! theme in egui form.

use crate::config::theme::{LayerPalette, Theme, ThemeColors};
use crate::models::{Color, LayerColor};
use eframe::egui;

/// Extension trait to convert config Color to egui::Color32
pub trait ToEguiColor {
    /// Convert to egui::Color32
    fn to_egui(&self) -> egui::Color32;

    /// Convert to egui::Color32 with custom alpha
    fn to_egui_with_alpha(&self, alpha: u8) -> egui::Color32;
}

impl ToEguiColor for Color {
    fn to_egui(&self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }

    fn to_egui_with_alpha(&self, alpha: u8) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, alpha)
    }
}

/// UI color provider that caches egui colors from the theme
#[derive(Debug, Clone)]
pub struct UiColors {
    pub dark_mode: bool,
    pub background: egui::Color32,
    pub panel: egui::Color32,
    pub text: egui::Color32,
    pub muted_text: egui::Color32,
    pub inactive_fill: egui::Color32,
    pub active_step_fill: egui::Color32,
    pub active_layer_text: egui::Color32,
    pub active_icon: egui::Color32,
    pub inactive_icon: egui::Color32,
    pub detail_fill: egui::Color32,
    pub focus: egui::Color32,

    /// Layer highlight colors
    pub layers: LayerEguiColors,
}

/// Layer palette converted to egui
#[derive(Debug, Clone)]
pub struct LayerEguiColors {
    pub purple: egui::Color32,
    pub indigo: egui::Color32,
    pub blue: egui::Color32,
    pub green: egui::Color32,
    pub yellow: egui::Color32,
    pub orange: egui::Color32,
    pub red: egui::Color32,
}

impl UiColors {
    /// Create UiColors from a Theme configuration
    pub fn from_theme(theme: &Theme) -> Self {
        let ThemeColors {
            background,
            panel,
            text,
            muted_text,
            inactive_fill,
            active_step_fill,
            active_layer_text,
            active_icon,
            inactive_icon,
            detail_fill,
            focus,
        } = &theme.colors;

        Self {
            dark_mode: theme.dark_mode,
            background: background.to_egui(),
            panel: panel.to_egui(),
            text: text.to_egui(),
            muted_text: muted_text.to_egui(),
            inactive_fill: inactive_fill.to_egui(),
            active_step_fill: active_step_fill.to_egui(),
            active_layer_text: active_layer_text.to_egui(),
            active_icon: active_icon.to_egui(),
            inactive_icon: inactive_icon.to_egui(),
            detail_fill: detail_fill.to_egui(),
            focus: focus.to_egui(),
            layers: LayerEguiColors::from_config(&theme.layers),
        }
    }

    /// Highlight color of a layer token
    pub fn layer(&self, token: LayerColor) -> egui::Color32 {
        self.layers.get(token)
    }
}

impl Default for UiColors {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

impl LayerEguiColors {
    pub fn from_config(config: &LayerPalette) -> Self {
        Self {
            purple: config.purple.to_egui(),
            indigo: config.indigo.to_egui(),
            blue: config.blue.to_egui(),
            green: config.green.to_egui(),
            yellow: config.yellow.to_egui(),
            orange: config.orange.to_egui(),
            red: config.red.to_egui(),
        }
    }

    pub fn get(&self, token: LayerColor) -> egui::Color32 {
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
