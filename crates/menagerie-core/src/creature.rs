//! Creature records and their stat block

use crate::clock::Timestamp;
use crate::identity::CreatureId;
use crate::rarity::Rarity;
use crate::species::Species;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four trainable stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Attack,
    Defense,
    Health,
    Speed,
}

impl StatKind {
    /// All stat kinds, in display order
    pub const ALL: [StatKind; 4] = [
        StatKind::Attack,
        StatKind::Defense,
        StatKind::Health,
        StatKind::Speed,
    ];

    /// Parse the lowercase stat name handed across the command boundary
    ///
    /// Returns None for anything outside the four recognized names.
    pub fn parse(name: &str) -> Option<StatKind> {
        match name {
            "attack" => Some(StatKind::Attack),
            "defense" => Some(StatKind::Defense),
            "health" => Some(StatKind::Health),
            "speed" => Some(StatKind::Speed),
            _ => None,
        }
    }

    /// The lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Attack => "attack",
            StatKind::Defense => "defense",
            StatKind::Health => "health",
            StatKind::Speed => "speed",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A creature's four stat values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Stats {
    pub attack: i64,
    pub defense: i64,
    pub health: i64,
    pub speed: i64,
}

impl Stats {
    /// Read one stat by kind
    pub fn get(&self, kind: StatKind) -> i64 {
        match kind {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Health => self.health,
            StatKind::Speed => self.speed,
        }
    }

    /// Overwrite one stat by kind
    pub fn set(&mut self, kind: StatKind, value: i64) {
        match kind {
            StatKind::Attack => self.attack = value,
            StatKind::Defense => self.defense = value,
            StatKind::Health => self.health = value,
            StatKind::Speed => self.speed = value,
        }
    }

    /// Add to one stat by kind
    pub fn add(&mut self, kind: StatKind, amount: i64) {
        self.set(kind, self.get(kind) + amount);
    }
}

/// A creature owned by exactly one player
///
/// Ownership is positional: commands address creatures by their index in
/// the owner's collection, and the `id` is display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub species: Species,
    pub rarity: Rarity,
    /// Starts at 1; only merging raises it
    pub level: u32,
    /// Experience is tracked but no current operation consumes it
    pub xp: u32,
    pub xp_needed: u32,
    pub stats: Stats,
    /// Coins produced per elapsed hour
    pub coin_rate: i64,
    /// None means never collected: exactly one hour is due
    pub last_collected: Option<Timestamp>,
}

impl Creature {
    /// Player-facing name, derived from rarity and species
    pub fn display_name(&self) -> String {
        format!("{} {}", self.rarity, self.species)
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.id)
    }
}
