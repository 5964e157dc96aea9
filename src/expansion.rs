//! Expanded journey step
//!
//! At most one step shows its sub-steps at a time. Clicking the expanded step
//! collapses it; clicking any other step switches to it.

use crate::catalog;
use crate::models::{StepId, SubStep};

/// Which journey step, if any, is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Expansion {
    expanded: Option<StepId>,
}

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> Option<StepId> {
        self.expanded
    }

    pub fn is_expanded(&self, id: StepId) -> bool {
        self.expanded == Some(id)
    }

    /// Apply a click on `id` and return the new expanded step
    pub fn toggle(&mut self, id: StepId) -> Option<StepId> {
        self.expanded = toggle(self.expanded, id);
        self.expanded
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Sub-steps to display; empty when nothing is expanded or the id is unknown
    pub fn sub_steps(&self) -> &'static [SubStep] {
        self.expanded.map(catalog::sub_steps).unwrap_or(&[])
    }
}

/// Next expanded step after a click on `clicked`
pub fn toggle(current: Option<StepId>, clicked: StepId) -> Option<StepId> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}
