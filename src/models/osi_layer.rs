//! OSI Layer Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an OSI layer (1 = Physical … 7 = Application)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(pub u8);

impl LayerId {
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for LayerId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

/// Color token a layer is highlighted with; themes resolve it to a concrete color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerColor {
    Purple,
    Indigo,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
}

impl LayerColor {
    pub const ALL: [LayerColor; 7] = [
        LayerColor::Purple,
        LayerColor::Indigo,
        LayerColor::Blue,
        LayerColor::Green,
        LayerColor::Yellow,
        LayerColor::Orange,
        LayerColor::Red,
    ];

    /// Token name as used in theme files
    pub fn name(self) -> &'static str {
        match self {
            LayerColor::Purple => "purple",
            LayerColor::Indigo => "indigo",
            LayerColor::Blue => "blue",
            LayerColor::Green => "green",
            LayerColor::Yellow => "yellow",
            LayerColor::Orange => "orange",
            LayerColor::Red => "red",
        }
    }
}

/// A catalog entry in the OSI model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OsiLayer {
    pub id: LayerId,
    pub name: &'static str,
    pub color: LayerColor,
    pub description: Option<&'static str>,
}

impl OsiLayer {
    /// Label in the form `"7. Application"`
    pub fn label(&self) -> String {
        format!("{}. {}", self.id, self.name)
    }
}
