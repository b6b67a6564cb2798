//! The persistent player record

use crate::clock::Timestamp;
use crate::creature::Creature;
use crate::egg::EggTier;
use crate::identity::PlayerId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Everything the game persists about one player
///
/// The creature collection is ordered: commands address creatures by
/// position, so insertion order is the player-visible index basis.
/// The coin balance never goes negative; every operation checks funds
/// before mutating anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub coins: i64,
    /// Held egg counts per tier (absent tier = zero)
    pub eggs: IndexMap<EggTier, u32>,
    pub creatures: Vec<Creature>,
    pub last_daily: Option<Timestamp>,
    pub streak: u32,
}

impl Player {
    /// A brand-new player with the configured starting balance
    pub fn new(id: PlayerId, starting_coins: i64) -> Self {
        Self {
            id,
            coins: starting_coins,
            eggs: IndexMap::new(),
            creatures: Vec::new(),
            last_daily: None,
            streak: 0,
        }
    }

    /// Look up a creature by zero-based slot
    pub fn creature(&self, slot: usize) -> Option<&Creature> {
        self.creatures.get(slot)
    }

    /// Mutable creature lookup by zero-based slot
    pub fn creature_mut(&mut self, slot: usize) -> Option<&mut Creature> {
        self.creatures.get_mut(slot)
    }

    /// Held egg count for a tier
    pub fn egg_count(&self, tier: EggTier) -> u32 {
        self.eggs.get(&tier).copied().unwrap_or(0)
    }

    /// Total eggs held across all tiers
    pub fn total_eggs(&self) -> u32 {
        self.eggs.values().sum()
    }
}
