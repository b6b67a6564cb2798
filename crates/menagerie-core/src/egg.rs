//! Egg tiers
//!
//! Three purchasable tiers in ascending price and rarity boost. Prices and
//! boosts live in [`crate::balance::Balance`]; this is just the enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Purchasable egg quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EggTier {
    Basic,
    Premium,
    Royal,
}

impl EggTier {
    /// All tiers in ascending price order
    pub const ALL: [EggTier; 3] = [EggTier::Basic, EggTier::Premium, EggTier::Royal];

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            EggTier::Basic => "Basic",
            EggTier::Premium => "Premium",
            EggTier::Royal => "Royal",
        }
    }
}

impl fmt::Display for EggTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
