//! OSI layer column

use crate::activation::Activation;
use crate::catalog;
use crate::models::OsiLayer;
use crate::ui::colors::UiColors;
use crate::ui::transition;
use eframe::egui;

/// Fill and text color of a layer row
pub fn layer_row_colors(
    layer: &OsiLayer,
    active: bool,
    colors: &UiColors,
) -> (egui::Color32, egui::Color32) {
    if active {
        (colors.layer(layer.color), colors.active_layer_text)
    } else {
        (colors.inactive_fill, colors.text)
    }
}

/// Renders the seven layers, Application at the top
pub struct LayerPanel {
    font_size: f32,
    show_descriptions: bool,
}

impl LayerPanel {
    pub fn new(font_size: f32, show_descriptions: bool) -> Self {
        Self {
            font_size,
            show_descriptions,
        }
    }

    pub fn render(&self, ui: &mut egui::Ui, activation: &Activation, colors: &UiColors) {
        ui.label(
            egui::RichText::new("OSI Model Layers")
                .size(self.font_size + 4.0)
                .color(colors.text)
                .strong(),
        );
        ui.add_space(8.0);

        for layer in catalog::osi_layers() {
            let active = activation.is_layer_active(layer.id);
            let id = egui::Id::new(("osi_layer_row", layer.id.get()));
            let t = transition::progress(ui, id, active);
            let (idle_fill, idle_text) = layer_row_colors(layer, false, colors);
            let (lit_fill, lit_text) = layer_row_colors(layer, true, colors);
            let text = transition::blend(idle_text, lit_text, t);

            egui::Frame::new()
                .fill(transition::blend(idle_fill, lit_fill, t))
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(transition::grown_margin(12, 10, t))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    let mut label = egui::RichText::new(layer.label())
                        .size(self.font_size)
                        .color(text);
                    if active {
                        label = label.strong();
                    }
                    ui.label(label);

                    if self.show_descriptions {
                        if let Some(description) = layer.description {
                            let muted = if active { text } else { colors.muted_text };
                            ui.label(
                                egui::RichText::new(description)
                                    .size(self.font_size - 2.0)
                                    .color(muted),
                            );
                        }
                    }
                });
            ui.add_space(6.0);
        }
    }
}
