//! Main application structure
//!
//! `OsiJourneyApp` implements `eframe::App`. Each frame it renders the
//! address field and the three columns from the session state, then feeds
//! the events the components returned back into the session.
//!
//! ### UI Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Enter a web address: [______________________________] │
//! ├──────────────────┬──────────────────┬────────────────┤
//! │ OSI Model Layers │ Journey Steps    │ Detailed Steps │
//! │ 7. Application   │ ⌨ Physical Input │ (sub-steps of  │
//! │ ...              │ ...              │  the expanded  │
//! │ 1. Physical      │ ⛁ Server ...     │  step)         │
//! └──────────────────┴──────────────────┴────────────────┘
//! ```

use eframe::egui;
use osi_journey::config::RuntimeConfig;
use osi_journey::session::{SessionEvent, VisualizerSession};
use osi_journey::ui::{self, AddressInput, DetailPanel, JourneyPanel, LayerPanel, UiColors};
use tracing::{debug, info};

/// Main application state
pub struct OsiJourneyApp {
    /// Input, highlights and expansion
    session: VisualizerSession,
    /// Runtime configuration
    runtime_config: RuntimeConfig,
    /// Cached egui colors of the active theme
    ui_colors: UiColors,
    /// UI components
    address_input: AddressInput,
    layer_panel: LayerPanel,
    journey_panel: JourneyPanel,
    detail_panel: DetailPanel,
    /// Style is applied on the first frame
    style_applied: bool,
}

impl OsiJourneyApp {
    /// Create the application with a runtime configuration
    pub fn with_config(runtime_config: RuntimeConfig) -> Self {
        let ui_config = &runtime_config.config().ui;
        let font_size = ui_config.font_size as f32;

        let app = Self {
            session: VisualizerSession::new(runtime_config.activation_rules()),
            ui_colors: UiColors::from_theme(runtime_config.theme()),
            address_input: AddressInput::new(ui_config.placeholder.clone(), font_size),
            layer_panel: LayerPanel::new(font_size, ui_config.show_layer_descriptions),
            journey_panel: JourneyPanel::new(font_size),
            detail_panel: DetailPanel::new(font_size),
            style_applied: false,
            runtime_config,
        };

        info!(
            "Application created with theme '{}'",
            app.runtime_config.theme_manager().current_theme_name()
        );
        app
    }

    #[cfg(test)]
    fn session(&self) -> &VisualizerSession {
        &self.session
    }

    /// Apply an event from a UI component
    fn dispatch(&mut self, event: SessionEvent) {
        debug!("UI event: {:?}", event);
        self.session.handle(event);
    }

    fn setup_visual_style(&self, ctx: &egui::Context) {
        let font_size = self.runtime_config.config().ui.font_size as f32;
        ui::apply_style(ctx, &self.ui_colors, font_size);
    }

    /// Render the address field and the three columns; returns the events
    /// the components produced this frame
    fn render(&mut self, ui: &mut egui::Ui) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let colors = &self.ui_colors;
        let session = &self.session;

        egui::Frame::new()
            .fill(colors.panel)
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::same(20))
            .show(ui, |ui| {
                events.extend(self.address_input.render(ui, session.input(), colors));
            });

        ui.add_space(16.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.columns(3, |columns| {
                self.layer_panel
                    .render(&mut columns[0], session.activation(), colors);
                events.extend(self.journey_panel.render(
                    &mut columns[1],
                    session.activation(),
                    session.expanded(),
                    colors,
                ));
                self.detail_panel
                    .render(&mut columns[2], session.expanded_sub_steps(), colors);
            });
        });

        events
    }
}

impl Default for OsiJourneyApp {
    fn default() -> Self {
        Self::with_config(RuntimeConfig::default())
    }
}

impl eframe::App for OsiJourneyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_applied {
            self.setup_visual_style(ctx);
            self.style_applied = true;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && !self.session.input().is_empty() {
            self.dispatch(SessionEvent::InputChanged(String::new()));
        }

        let panel_frame = egui::Frame::new()
            .fill(self.ui_colors.background)
            .inner_margin(egui::Margin::same(24));

        let events = egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| self.render(ui))
            .inner;

        for event in events {
            self.dispatch(event);
        }
    }
}
