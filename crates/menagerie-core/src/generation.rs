//! Creature synthesis
//!
//! One uniform draw classified against the cumulative rarity tail, then
//! tier-scaled stats with independent per-stat jitter. Pure: the caller
//! decides what to do with the returned creature.

use crate::balance::{Balance, GenerationParams};
use crate::creature::{Creature, Stats};
use crate::identity::CreatureId;
use crate::rarity::Rarity;
use crate::rng::GameRng;
use crate::species::Species;

/// Classify one uniform draw into a rarity tier
///
/// `boost` is subtracted from the sample before classification, biasing
/// the outcome toward rarer tiers. Tiers are tested from rarest to most
/// common against their cumulative tail mass; Common is the catch-all,
/// so a boost-driven negative sample still classifies.
pub fn roll_rarity(rng: &mut GameRng, balance: &Balance, boost: f64) -> Rarity {
    let sample = rng.next_f64() - boost;
    for tier in Rarity::ALL.iter().rev().take(5) {
        if sample < balance.rarity.tail_mass(*tier) {
            return *tier;
        }
    }
    Rarity::Common
}

/// Synthesize a new creature
///
/// Species is drawn uniformly when not supplied. The base stat magnitude
/// is one small draw scaled by the tier multiplier; health sits on double
/// the base so it grows larger and slower than the other three stats.
pub fn generate_creature(
    rng: &mut GameRng,
    balance: &Balance,
    species: Option<Species>,
    boost: f64,
) -> Creature {
    let species = match species {
        Some(s) => s,
        // ALL is a non-empty const, pick cannot fail
        None => rng.pick(&Species::ALL).copied().unwrap_or(Species::Fire),
    };
    let rarity = roll_rarity(rng, balance, boost);
    let base = balance.generation.magnitude.roll(rng) * balance.rarity.multiplier(rarity);
    let id = CreatureId::new(balance.generation.id_range.roll(rng) as u32);
    let stats = roll_stats(rng, &balance.generation, base);

    Creature {
        id,
        species,
        rarity,
        level: 1,
        xp: 0,
        xp_needed: balance.generation.starting_xp_needed,
        stats,
        coin_rate: balance.coin_rate(rarity),
        last_collected: None,
    }
}

fn roll_stats(rng: &mut GameRng, params: &GenerationParams, base: i64) -> Stats {
    Stats {
        attack: base + params.attack_jitter.roll(rng),
        defense: base + params.defense_jitter.roll(rng),
        health: base * 2 + params.health_jitter.roll(rng),
        speed: base + params.speed_jitter.roll(rng),
    }
}
