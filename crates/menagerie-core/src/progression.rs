//! Merge and training
//!
//! Both operations are atomic reject-or-apply: every precondition is
//! checked before the first mutation, so a rejection leaves the player
//! record untouched.

use crate::balance::Balance;
use crate::creature::{Creature, StatKind};
use crate::error::{Error, Result};
use crate::identity::CreatureId;
use crate::player::Player;
use crate::rng::GameRng;

/// Result of a successful merge
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// The creature appended to the collection
    pub merged: Creature,
    pub cost: i64,
    /// Whether the rarity-up roll succeeded
    pub promoted: bool,
}

/// Result of a successful training session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainOutcome {
    pub stat: StatKind,
    pub before: i64,
    pub after: i64,
    pub cost: i64,
}

fn slot_error(slot: usize) -> Error {
    Error::Validation(format!("no creature in slot {}", slot + 1))
}

/// Fuse two same-species creatures into one higher-level creature
///
/// Preconditions in order, first failure wins: distinct slots, both slots
/// resolve, funds cover the fee, species match. The higher-level input is
/// the base (a tie keeps `slot_a`); the donor contributes half of each
/// stat. One rarity-up roll may promote the result a single tier, scaling
/// every stat by the multiplier ratio. The merged creature gets a fresh
/// id, a recomputed coin rate, and a reset accrual clock.
pub fn merge(
    player: &mut Player,
    slot_a: usize,
    slot_b: usize,
    rng: &mut GameRng,
    balance: &Balance,
) -> Result<MergeOutcome> {
    if slot_a == slot_b {
        return Err(Error::Validation(
            "a creature cannot merge with itself".into(),
        ));
    }
    let a = player.creature(slot_a).ok_or_else(|| slot_error(slot_a))?;
    let b = player.creature(slot_b).ok_or_else(|| slot_error(slot_b))?;

    let cost = balance.merge_cost(a.level, b.level);
    if player.coins < cost {
        return Err(Error::InsufficientFunds {
            required: cost,
            available: player.coins,
        });
    }
    if a.species != b.species {
        return Err(Error::PreconditionFailed(format!(
            "cannot merge {} with {}: species differ",
            a.species, b.species
        )));
    }

    // Higher level is the base; donor feeds half of each stat
    let (base, donor) = if a.level >= b.level { (a, b) } else { (b, a) };
    let combined_level = a.level + b.level;

    let mut merged = base.clone();
    merged.id = CreatureId::new(balance.generation.id_range.roll(rng) as u32);
    merged.level = base.level + 1;
    for kind in StatKind::ALL {
        merged
            .stats
            .set(kind, base.stats.get(kind) + donor.stats.get(kind) / 2);
    }

    let mut promoted = false;
    if let Some(next_tier) = merged.rarity.next() {
        if rng.chance(balance.promote_chance(combined_level)) {
            let ratio = balance.rarity.multiplier(next_tier) as f64
                / balance.rarity.multiplier(merged.rarity) as f64;
            for kind in StatKind::ALL {
                merged
                    .stats
                    .set(kind, (merged.stats.get(kind) as f64 * ratio) as i64);
            }
            merged.rarity = next_tier;
            promoted = true;
        }
    }
    merged.coin_rate = balance.coin_rate(merged.rarity);
    merged.last_collected = None;

    // All checks passed: apply. Higher slot first so the lower stays valid.
    let (hi, lo) = if slot_a > slot_b {
        (slot_a, slot_b)
    } else {
        (slot_b, slot_a)
    };
    player.creatures.remove(hi);
    player.creatures.remove(lo);
    player.creatures.push(merged.clone());
    player.coins -= cost;

    Ok(MergeOutcome {
        merged,
        cost,
        promoted,
    })
}

/// Raise one stat of one creature for a level-scaled fee
///
/// The gain is tier-dependent; health gains double. Level is unchanged
/// and stats have no cap.
pub fn train(
    player: &mut Player,
    slot: usize,
    stat: StatKind,
    balance: &Balance,
) -> Result<TrainOutcome> {
    let (level, rarity) = match player.creature(slot) {
        Some(c) => (c.level, c.rarity),
        None => return Err(slot_error(slot)),
    };

    let cost = balance.train_cost(level);
    if player.coins < cost {
        return Err(Error::InsufficientFunds {
            required: cost,
            available: player.coins,
        });
    }

    let mut gain = balance.train_increase(rarity);
    if stat == StatKind::Health {
        gain *= 2;
    }

    let creature = player.creature_mut(slot).ok_or_else(|| slot_error(slot))?;
    let before = creature.stats.get(stat);
    creature.stats.add(stat, gain);
    let after = creature.stats.get(stat);
    player.coins -= cost;

    Ok(TrainOutcome {
        stat,
        before,
        after,
        cost,
    })
}
