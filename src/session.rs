//! Visualizer session state
//!
//! Single source of truth for one interactive session: the typed address,
//! the highlights derived from it, and the expanded journey step.
//!
//! Two events drive it:
//!
//! ```text
//!  InputChanged(text) ──► recompute Activation ──► (empty? collapse)
//!  StepClicked(id)    ──► toggle Expansion
//! ```
//!
//! Derived state is recomputed synchronously inside [`VisualizerSession::handle`],
//! so a render that follows an event always sees consistent state.

use crate::activation::{Activation, ActivationRules};
use crate::expansion::Expansion;
use crate::models::{StepId, SubStep};

/// Events emitted by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The text field now holds this value
    InputChanged(String),
    /// A journey step was clicked
    StepClicked(StepId),
}

#[derive(Debug, Clone, Default)]
pub struct VisualizerSession {
    input: String,
    rules: ActivationRules,
    activation: Activation,
    expansion: Expansion,
}

impl VisualizerSession {
    /// Create an empty session using `rules` for activation
    pub fn new(rules: ActivationRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn activation(&self) -> &Activation {
        &self.activation
    }

    pub fn expanded(&self) -> Option<StepId> {
        self.expansion.expanded()
    }

    /// Sub-steps of the expanded step, in catalog order
    pub fn expanded_sub_steps(&self) -> &'static [SubStep] {
        self.expansion.sub_steps()
    }

    pub fn rules(&self) -> ActivationRules {
        self.rules
    }

    /// Replace the activation rules and recompute the highlights
    pub fn set_rules(&mut self, rules: ActivationRules) {
        self.rules = rules;
        self.recompute();
    }

    /// Apply one event
    pub fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::InputChanged(value) => self.set_input(value),
            SessionEvent::StepClicked(id) => self.click_step(id),
        }
    }

    /// Replace the input value and recompute the highlights
    ///
    /// An empty value also collapses the expanded step.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.recompute();

        if self.input.is_empty() {
            if self.expansion.expanded().is_some() {
                debug!("Input cleared, collapsing expanded step");
            }
            self.expansion.collapse();
        }
    }

    /// Toggle the expansion of `id`
    pub fn click_step(&mut self, id: StepId) {
        let expanded = self.expansion.toggle(id);
        debug!("Step {} clicked, expanded: {:?}", id, expanded);
    }

    /// Reset to the empty input
    pub fn clear(&mut self) {
        self.set_input(String::new());
    }

    fn recompute(&mut self) {
        self.activation = self.rules.activate(&self.input);
        trace!(
            "Activation recomputed: steps={:?} layers={:?}",
            self.activation.steps(),
            self.activation.layers()
        );
    }
}
