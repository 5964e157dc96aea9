//! Stage activation
//!
//! Maps the typed address to the journey steps and OSI layers that should be
//! highlighted. The mapping is a pure function of the input string: every
//! threshold is checked against the whole input, thresholds are cumulative,
//! and the dot check is independent of length.
//!
//! | condition          | steps     | layers  |
//! |--------------------|-----------|---------|
//! | length > 0         | 1         | 1       |
//! | length > 2         | 2         | 2       |
//! | length > 4         | 3         | 7, 6    |
//! | length > 6         | 4         | 5, 4, 3 |
//! | contains `'.'`     | 5, 6, 7   | none    |
//!
//! Steps 5–7 deliberately add no layers.

use crate::models::{LayerId, StepId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How the length of the input is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// Unicode scalar values
    #[default]
    Chars,
    /// UTF-16 code units, matching a browser's `String.length`
    Utf16,
}

impl LengthUnit {
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthUnit::Chars => input.chars().count(),
            LengthUnit::Utf16 => input.encode_utf16().count(),
        }
    }
}

struct LengthThreshold {
    /// Activates when the length is strictly greater than this
    above: usize,
    step: StepId,
    layers: &'static [LayerId],
}

const LENGTH_THRESHOLDS: [LengthThreshold; 4] = [
    LengthThreshold {
        above: 0,
        step: StepId(1),
        layers: &[LayerId(1)],
    },
    LengthThreshold {
        above: 2,
        step: StepId(2),
        layers: &[LayerId(2)],
    },
    LengthThreshold {
        above: 4,
        step: StepId(3),
        layers: &[LayerId(7), LayerId(6)],
    },
    LengthThreshold {
        above: 6,
        step: StepId(4),
        layers: &[LayerId(5), LayerId(4), LayerId(3)],
    },
];

const DOT_STEPS: [StepId; 3] = [StepId(5), StepId(6), StepId(7)];

/// Highlighted steps and layers for one input value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Activation {
    steps: BTreeSet<StepId>,
    layers: BTreeSet<LayerId>,
}

impl Activation {
    /// Nothing highlighted
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &BTreeSet<StepId> {
        &self.steps
    }

    pub fn layers(&self) -> &BTreeSet<LayerId> {
        &self.layers
    }

    pub fn is_step_active(&self, id: StepId) -> bool {
        self.steps.contains(&id)
    }

    pub fn is_layer_active(&self, id: LayerId) -> bool {
        self.layers.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.layers.is_empty()
    }
}

/// Parameters of the mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivationRules {
    pub length_unit: LengthUnit,
}

impl ActivationRules {
    pub fn new(length_unit: LengthUnit) -> Self {
        Self { length_unit }
    }

    /// Derive the active steps and layers for `input`
    pub fn activate(&self, input: &str) -> Activation {
        let length = self.length_unit.measure(input);
        if length == 0 {
            return Activation::empty();
        }

        let mut activation = Activation::empty();
        for threshold in LENGTH_THRESHOLDS.iter().filter(|t| length > t.above) {
            activation.steps.insert(threshold.step);
            activation.layers.extend(threshold.layers.iter().copied());
        }

        if input.contains('.') {
            activation.steps.extend(DOT_STEPS);
        }

        activation
    }
}

/// Derive the active steps and layers for `input` with the default rules
pub fn activate(input: &str) -> Activation {
    ActivationRules::default().activate(input)
}
