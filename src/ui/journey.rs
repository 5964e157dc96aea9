//! Journey step column
//!
//! Each step is a clickable row; a click is reported as
//! [`SessionEvent::StepClicked`] and the session decides what it means.

use crate::activation::Activation;
use crate::catalog;
use crate::models::StepId;
use crate::session::SessionEvent;
use crate::ui::colors::UiColors;
use crate::ui::transition;
use eframe::egui;

/// Fill and icon color of a step row
pub fn step_row_colors(active: bool, colors: &UiColors) -> (egui::Color32, egui::Color32) {
    if active {
        (colors.active_step_fill, colors.active_icon)
    } else {
        (colors.inactive_fill, colors.inactive_icon)
    }
}

pub struct JourneyPanel {
    font_size: f32,
}

impl JourneyPanel {
    pub fn new(font_size: f32) -> Self {
        Self { font_size }
    }

    /// Render all steps; returns the click event, if any
    pub fn render(
        &self,
        ui: &mut egui::Ui,
        activation: &Activation,
        expanded: Option<StepId>,
        colors: &UiColors,
    ) -> Option<SessionEvent> {
        let mut clicked = None;

        ui.label(
            egui::RichText::new("Journey Steps")
                .size(self.font_size + 4.0)
                .color(colors.text)
                .strong(),
        );
        ui.add_space(8.0);

        for step in catalog::journey_steps() {
            let active = activation.is_step_active(step.id);
            let id = egui::Id::new(("journey_step_row", step.id.get()));
            let t = transition::progress(ui, id, active);
            let (idle_fill, idle_icon) = step_row_colors(false, colors);
            let (lit_fill, lit_icon) = step_row_colors(true, colors);
            let icon_color = transition::blend(idle_icon, lit_icon, t);
            let stroke = if expanded == Some(step.id) {
                egui::Stroke::new(2.0, colors.focus)
            } else {
                egui::Stroke::NONE
            };

            let frame = egui::Frame::new()
                .fill(transition::blend(idle_fill, lit_fill, t))
                .stroke(stroke)
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(transition::grown_margin(14, 12, t))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(step.icon.glyph())
                                .size(self.font_size + 6.0)
                                .color(icon_color),
                        );
                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new(step.category)
                                .size(self.font_size)
                                .color(colors.text)
                                .strong(),
                        );
                    });
                });

            let response = frame
                .response
                .interact(egui::Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.clicked() {
                clicked = Some(SessionEvent::StepClicked(step.id));
            }
            ui.add_space(8.0);
        }

        clicked
    }
}
