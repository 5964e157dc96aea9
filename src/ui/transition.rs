//! Highlight transitions for layer and step rows
//!
//! Rows ease between their inactive and active look over
//! [`TRANSITION_SECS`]. Active rows also grow slightly.

use eframe::egui;

/// Length of a highlight transition, in seconds
pub const TRANSITION_SECS: f32 = 0.3;

/// Extra inner margin, in points, of a fully active row
pub const ACTIVE_GROWTH: f32 = 3.0;

/// Animation progress of a row: 0.0 inactive, 1.0 active
pub fn progress(ui: &egui::Ui, id: egui::Id, active: bool) -> f32 {
    ui.ctx().animate_bool_with_time(id, active, TRANSITION_SECS)
}

/// Blend two colors channel by channel; `t` is clamped to `0..=1`
pub fn blend(from: egui::Color32, to: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let [r0, g0, b0, a0] = from.to_array();
    let [r1, g1, b1, a1] = to.to_array();
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    egui::Color32::from_rgba_premultiplied(mix(r0, r1), mix(g0, g1), mix(b0, b1), mix(a0, a1))
}

/// Inner margin of a row, grown by up to [`ACTIVE_GROWTH`] as it activates
pub fn grown_margin(x: i8, y: i8, t: f32) -> egui::Margin {
    let grow = (ACTIVE_GROWTH * t.clamp(0.0, 1.0)).round() as i8;
    egui::Margin::symmetric(x + grow, y + grow)
}
