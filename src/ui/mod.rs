//! UI components and rendering
//!
//! egui components for the three columns and the address field. Components
//! only read session state and return [`SessionEvent`](crate::session::SessionEvent)s;
//! they never mutate the session themselves.

pub mod colors;
pub mod details;
pub mod input;
pub mod journey;
pub mod layers;
pub mod transition;

// Re-exports for convenience
pub use colors::{ToEguiColor, UiColors};
pub use details::DetailPanel;
pub use input::AddressInput;
pub use journey::JourneyPanel;
pub use layers::LayerPanel;

use eframe::egui;

/// Apply the theme colors and font size to the egui style
pub fn apply_style(ctx: &egui::Context, colors: &UiColors, font_size: f32) {
    let (theme, mut visuals) = if colors.dark_mode {
        (egui::Theme::Dark, egui::Visuals::dark())
    } else {
        (egui::Theme::Light, egui::Visuals::light())
    };
    ctx.set_theme(theme);

    visuals.window_fill = colors.background;
    visuals.panel_fill = colors.background;
    visuals.override_text_color = Some(colors.text);
    visuals.selection.stroke = egui::Stroke::new(1.0, colors.focus);
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(font_size));
    ctx.set_style(style);
}
