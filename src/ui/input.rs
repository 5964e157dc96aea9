//! Address input component
//!
//! The text field the learner types a web address into. Every edit is
//! reported immediately as a [`SessionEvent::InputChanged`].

use crate::session::SessionEvent;
use crate::ui::colors::UiColors;
use eframe::egui;

/// Address input component
pub struct AddressInput {
    /// Text currently in the widget
    buffer: String,
    /// Hint shown while empty
    placeholder: String,
    /// Font size for label and field
    font_size: f32,
    /// Request keyboard focus on the next render
    wants_focus: bool,
}

impl AddressInput {
    /// Create a new address input
    pub fn new(placeholder: impl Into<String>, font_size: f32) -> Self {
        Self {
            buffer: String::new(),
            placeholder: placeholder.into(),
            font_size,
            wants_focus: true,
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Render the field; returns an event when the text changed this frame
    ///
    /// `current` is the session's input value. If it differs from the widget
    /// buffer (e.g. the session was cleared elsewhere) the buffer follows it.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        current: &str,
        colors: &UiColors,
    ) -> Option<SessionEvent> {
        if self.buffer != current {
            self.buffer = current.to_string();
        }

        ui.label(
            egui::RichText::new("Enter a web address:")
                .size(self.font_size + 4.0)
                .color(colors.text)
                .strong(),
        );
        ui.add_space(6.0);

        let response = ui.add(
            egui::TextEdit::singleline(&mut self.buffer)
                .font(egui::FontId::proportional(self.font_size + 2.0))
                .desired_width(f32::INFINITY)
                .hint_text(self.placeholder.as_str()),
        );

        if self.wants_focus {
            response.request_focus();
            self.wants_focus = false;
        }

        if response.has_focus() {
            ui.painter().rect_stroke(
                response.rect.expand(1.0),
                egui::CornerRadius::same(4),
                egui::Stroke::new(2.0, colors.focus),
                egui::StrokeKind::Outside,
            );
        }

        if response.changed() {
            Some(SessionEvent::InputChanged(self.buffer.clone()))
        } else {
            None
        }
    }
}

impl Default for AddressInput {
    fn default() -> Self {
        Self::new(crate::config::UiConfig::default().placeholder, 14.0)
    }
}
