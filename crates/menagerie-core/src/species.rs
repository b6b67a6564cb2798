//! Elemental creature species

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of elemental types a creature can hatch as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Fire,
    Water,
    Earth,
    Air,
    Light,
    Dark,
}

impl Species {
    /// All species, for uniform draws
    pub const ALL: [Species; 6] = [
        Species::Fire,
        Species::Water,
        Species::Earth,
        Species::Air,
        Species::Light,
        Species::Dark,
    ];

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Fire => "Fire",
            Species::Water => "Water",
            Species::Earth => "Earth",
            Species::Air => "Air",
            Species::Light => "Light",
            Species::Dark => "Dark",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
