//! Journey Step Model
//!
//! One stage of the illustrative request lifecycle, from the key press on the
//! client to the origin server answering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a journey step (1–7 in the built-in catalog)
///
/// Any value is representable so that a stale or foreign identifier can still
/// be held by the expansion state; catalog lookups for it simply find nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(pub u8);

impl StepId {
    /// Raw numeric identifier
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for StepId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

/// Display hint for the icon drawn next to a step's category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepIcon {
    Keyboard,
    Zap,
    Server,
    Globe,
    Network,
    Cloud,
    Database,
}

impl StepIcon {
    /// Glyph rendered with egui's default fonts
    pub fn glyph(self) -> &'static str {
        match self {
            StepIcon::Keyboard => "⌨",
            StepIcon::Zap => "⚡",
            StepIcon::Server => "🖥",
            StepIcon::Globe => "🌐",
            StepIcon::Network => "🔗",
            StepIcon::Cloud => "☁",
            StepIcon::Database => "🗄",
        }
    }
}

/// A named sub-step of a journey step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubStep {
    /// Identifier such as `"4c"`
    pub id: &'static str,
    /// Short name
    pub name: &'static str,
    /// One-sentence description
    pub description: &'static str,
}

/// A catalog entry in the request lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JourneyStep {
    pub id: StepId,
    /// Category label, e.g. "DNS Resolution"
    pub category: &'static str,
    pub icon: StepIcon,
    /// Sub-steps in display order
    pub sub_steps: &'static [SubStep],
}

impl JourneyStep {
    /// Find a sub-step by its identifier
    pub fn sub_step(&self, id: &str) -> Option<&'static SubStep> {
        self.sub_steps.iter().find(|s| s.id == id)
    }
}
