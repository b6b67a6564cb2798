//! Economy balance configuration
//!
//! Every tunable number in the game lives here: rarity tables, egg
//! pricing, fee formulas, jitter ranges, accrual caps. The struct
//! deserializes from RON with per-section defaults, so a balance file
//! only needs to spell out what it overrides. `Default` carries the
//! shipped numbers.

use crate::egg::EggTier;
use crate::rarity::Rarity;
use crate::rng::GameRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Balance loading/validation error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Invalid balance: {0}")]
    Invalid(String),
}

/// Result type alias for balance loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// An inclusive integer range, rolled with [`GameRng::range_i64`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    /// Create a range; `min` and `max` are both attainable
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Draw one value from the range
    pub fn roll(&self, rng: &mut GameRng) -> i64 {
        rng.range_i64(self.min, self.max)
    }
}

/// Rarity probability and stat-multiplier tables
///
/// Both arrays run in ascending tier order (Common first).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RarityTable {
    /// Probability of hatching each tier; must sum to 1
    pub chances: [f64; 6],
    /// Stat magnitude multiplier per tier
    pub multipliers: [i64; 6],
}

impl Default for RarityTable {
    fn default() -> Self {
        Self {
            chances: [0.35, 0.30, 0.20, 0.10, 0.04, 0.01],
            multipliers: [3, 6, 15, 30, 90, 180],
        }
    }
}

impl RarityTable {
    /// Probability of one tier
    pub fn chance(&self, tier: Rarity) -> f64 {
        self.chances[tier as usize]
    }

    /// Stat multiplier of one tier
    pub fn multiplier(&self, tier: Rarity) -> i64 {
        self.multipliers[tier as usize]
    }

    /// Cumulative probability mass of `tier` and every rarer tier
    pub fn tail_mass(&self, tier: Rarity) -> f64 {
        Rarity::ALL
            .iter()
            .filter(|t| **t >= tier)
            .map(|t| self.chance(*t))
            .sum()
    }
}

/// Creature synthesis parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Base-magnitude draw, scaled by the tier multiplier
    pub magnitude: IntRange,
    pub attack_jitter: IntRange,
    pub defense_jitter: IntRange,
    /// Applied on top of double the base magnitude
    pub health_jitter: IntRange,
    pub speed_jitter: IntRange,
    /// Display-only creature id draw
    pub id_range: IntRange,
    /// Coin rate = offset + multiplier / 2
    pub coin_rate_offset: i64,
    pub starting_xp_needed: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            magnitude: IntRange::new(5, 12),
            attack_jitter: IntRange::new(-1, 4),
            defense_jitter: IntRange::new(1, 5),
            health_jitter: IntRange::new(5, 7),
            speed_jitter: IntRange::new(1, 8),
            id_range: IntRange::new(10_000, 99_999),
            coin_rate_offset: 20,
            starting_xp_needed: 100,
        }
    }
}

/// One purchasable egg tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EggDef {
    pub price: i64,
    /// Probability added to the high-rarity tail when hatching
    pub rarity_boost: f64,
}

/// The three egg tiers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EggParams {
    pub basic: EggDef,
    pub premium: EggDef,
    pub royal: EggDef,
}

impl Default for EggParams {
    fn default() -> Self {
        Self {
            basic: EggDef {
                price: 150,
                rarity_boost: 0.0,
            },
            premium: EggDef {
                price: 600,
                rarity_boost: 0.30,
            },
            royal: EggDef {
                price: 1200,
                rarity_boost: 0.45,
            },
        }
    }
}

impl EggParams {
    /// Definition for one tier
    pub fn def(&self, tier: EggTier) -> &EggDef {
        match tier {
            EggTier::Basic => &self.basic,
            EggTier::Premium => &self.premium,
            EggTier::Royal => &self.royal,
        }
    }
}

/// Merge fee and promotion parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeParams {
    pub base_fee: i64,
    /// Per combined input level
    pub level_fee: i64,
    /// Rarity-up chance per combined input level
    pub promote_per_level: f64,
    /// Rarity-up chance ceiling
    pub promote_cap: f64,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            base_fee: 140,
            level_fee: 20,
            promote_per_level: 0.30,
            promote_cap: 0.60,
        }
    }
}

/// Training fee and gain parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingParams {
    pub base_fee: i64,
    /// Per creature level
    pub level_fee: i64,
    /// Gain = offset + multiplier / 2; health gains double
    pub increase_offset: i64,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            base_fee: 80,
            level_fee: 10,
            increase_offset: 1,
        }
    }
}

/// Passive income and daily reward parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccrualParams {
    /// Hours of income a single collection can cover, at most
    pub collect_cap_hours: i64,
    pub daily_base: i64,
    /// Bonus coins per day of streak
    pub daily_step: i64,
    pub daily_bonus_cap: i64,
    pub daily_cooldown_hours: i64,
    /// Claiming later than this after the previous claim breaks the streak
    pub streak_window_hours: i64,
}

impl Default for AccrualParams {
    fn default() -> Self {
        Self {
            collect_cap_hours: 24,
            daily_base: 120,
            daily_step: 10,
            daily_bonus_cap: 3000,
            daily_cooldown_hours: 20,
            streak_window_hours: 48,
        }
    }
}

/// The complete balance sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    /// Coins a brand-new player starts with
    pub starting_coins: i64,
    pub rarity: RarityTable,
    pub generation: GenerationParams,
    pub eggs: EggParams,
    pub merge: MergeParams,
    pub training: TrainingParams,
    pub accrual: AccrualParams,
}

impl Default for Balance {
    fn default() -> Self {
        Self {
            starting_coins: 450,
            rarity: RarityTable::default(),
            generation: GenerationParams::default(),
            eggs: EggParams::default(),
            merge: MergeParams::default(),
            training: TrainingParams::default(),
            accrual: AccrualParams::default(),
        }
    }
}

impl Balance {
    /// Parse and validate a balance sheet from RON text
    pub fn from_ron_str(text: &str) -> ConfigResult<Balance> {
        let balance: Balance = ron::from_str(text)?;
        balance.validate()?;
        Ok(balance)
    }

    /// Load and validate a balance sheet from a RON file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Balance> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Check the internal consistency of the sheet
    pub fn validate(&self) -> ConfigResult<()> {
        let sum: f64 = self.rarity.chances.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::Invalid(format!(
                "rarity chances sum to {sum}, expected 1.0"
            )));
        }
        if self.rarity.chances.iter().any(|c| *c < 0.0) {
            return Err(ConfigError::Invalid("negative rarity chance".into()));
        }
        if self.rarity.multipliers.iter().any(|m| *m <= 0) {
            return Err(ConfigError::Invalid("non-positive stat multiplier".into()));
        }
        for (name, range) in [
            ("magnitude", self.generation.magnitude),
            ("attack_jitter", self.generation.attack_jitter),
            ("defense_jitter", self.generation.defense_jitter),
            ("health_jitter", self.generation.health_jitter),
            ("speed_jitter", self.generation.speed_jitter),
            ("id_range", self.generation.id_range),
        ] {
            if range.min > range.max {
                return Err(ConfigError::Invalid(format!(
                    "{name} range has min {} > max {}",
                    range.min, range.max
                )));
            }
        }
        for tier in EggTier::ALL {
            let def = self.eggs.def(tier);
            if def.price <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "{tier} egg price must be positive"
                )));
            }
            if !(0.0..1.0).contains(&def.rarity_boost) {
                return Err(ConfigError::Invalid(format!(
                    "{tier} egg boost {} outside [0, 1)",
                    def.rarity_boost
                )));
            }
        }
        if self.merge.promote_cap < 0.0 || self.merge.promote_cap > 1.0 {
            return Err(ConfigError::Invalid(
                "merge promote cap outside [0, 1]".into(),
            ));
        }
        if self.accrual.collect_cap_hours < 1 {
            return Err(ConfigError::Invalid(
                "collect cap must be at least one hour".into(),
            ));
        }
        if self.accrual.streak_window_hours <= self.accrual.daily_cooldown_hours {
            return Err(ConfigError::Invalid(
                "streak window must exceed the daily cooldown".into(),
            ));
        }
        Ok(())
    }

    /// Hourly coin rate for a tier: offset + multiplier / 2
    ///
    /// The one rate formula, used at generation and after merge alike.
    pub fn coin_rate(&self, tier: Rarity) -> i64 {
        self.generation.coin_rate_offset + self.rarity.multiplier(tier) / 2
    }

    /// Merge fee for two input levels
    pub fn merge_cost(&self, level_a: u32, level_b: u32) -> i64 {
        self.merge.base_fee + self.merge.level_fee * (level_a + level_b) as i64
    }

    /// Rarity-up probability for a combined input level
    pub fn promote_chance(&self, combined_level: u32) -> f64 {
        (self.merge.promote_per_level * combined_level as f64).min(self.merge.promote_cap)
    }

    /// Training fee for a creature level
    pub fn train_cost(&self, level: u32) -> i64 {
        self.training.base_fee + self.training.level_fee * level as i64
    }

    /// Stat gain one training session grants for a tier
    pub fn train_increase(&self, tier: Rarity) -> i64 {
        self.training.increase_offset + self.rarity.multiplier(tier) / 2
    }
}
