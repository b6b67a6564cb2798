//! Menagerie Core - economy and progression engines
//!
//! This crate owns all stateful game logic for the creature game:
//! - Typed player and creature records
//! - Weighted-random creature synthesis with egg-tier rarity boosts
//! - Merge (fusion) and training
//! - Lazy passive income and the daily streak reward
//! - The egg shop
//!
//! Every operation is pure with respect to time and randomness: `now`
//! arrives as a [`Timestamp`] argument and draws come from an explicit
//! [`GameRng`], so any sequence of operations can be replayed in tests.
//! Operations are atomic reject-or-apply: a rejection (see [`Error`])
//! leaves the records exactly as they were.
//!
//! Storage, chat transport, and text rendering live outside this crate;
//! callers load records, invoke one operation per command, and persist
//! on success.

pub mod accrual;
pub mod balance;
mod clock;
mod creature;
mod egg;
mod error;
pub mod generation;
mod identity;
mod player;
pub mod progression;
mod rarity;
mod rng;
pub mod shop;
mod species;

pub use accrual::{claim_daily, collect, CollectOutcome, DailyOutcome};
pub use balance::{Balance, ConfigError, ConfigResult, IntRange};
pub use clock::{Timestamp, SECS_PER_HOUR};
pub use creature::{Creature, StatKind, Stats};
pub use egg::EggTier;
pub use error::{Error, Result};
pub use generation::{generate_creature, roll_rarity};
pub use identity::{CreatureId, PlayerId};
pub use player::Player;
pub use progression::{merge, train, MergeOutcome, TrainOutcome};
pub use rarity::Rarity;
pub use rng::GameRng;
pub use shop::{buy_egg, hatch, HatchOutcome, PurchaseOutcome};
pub use species::Species;
