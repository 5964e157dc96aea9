//! Core data models for OSI Journey
//!
//! This module contains the domain entities shown by the visualization:
//! journey steps with their sub-steps, OSI layers, and the color type used by
//! themes.

pub mod color;
pub mod journey_step;
pub mod osi_layer;

// Re-exports for convenience
pub use color::Color;
pub use journey_step::{JourneyStep, StepIcon, StepId, SubStep};
pub use osi_layer::{LayerColor, LayerId, OsiLayer};
