//! Detailed steps column
//!
//! Shows the sub-steps of the expanded journey step, or nothing.

use crate::models::SubStep;
use crate::ui::colors::UiColors;
use eframe::egui;

pub struct DetailPanel {
    font_size: f32,
}

impl DetailPanel {
    pub fn new(font_size: f32) -> Self {
        Self { font_size }
    }

    pub fn render(&self, ui: &mut egui::Ui, sub_steps: &[SubStep], colors: &UiColors) {
        ui.label(
            egui::RichText::new("Detailed Steps")
                .size(self.font_size + 4.0)
                .color(colors.text)
                .strong(),
        );
        ui.add_space(8.0);

        for sub_step in sub_steps {
            egui::Frame::new()
                .fill(colors.detail_fill)
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(14))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(sub_step.name)
                            .size(self.font_size)
                            .color(colors.text)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(sub_step.description)
                            .size(self.font_size - 2.0)
                            .color(colors.muted_text),
                    );
                });
            ui.add_space(8.0);
        }
    }
}
