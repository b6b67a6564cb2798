//! The egg shop
//!
//! Buying adds an egg to the player's inventory; hatching consumes one
//! and appends a freshly generated creature, with the tier's rarity
//! boost applied to the draw.

use crate::balance::Balance;
use crate::creature::Creature;
use crate::egg::EggTier;
use crate::error::{Error, Result};
use crate::generation::generate_creature;
use crate::player::Player;
use crate::rng::GameRng;

/// Result of a successful egg purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseOutcome {
    pub tier: EggTier,
    pub price: i64,
    /// Eggs of this tier held after the purchase
    pub held: u32,
}

/// Result of a successful hatch
#[derive(Debug, Clone, PartialEq)]
pub struct HatchOutcome {
    pub creature: Creature,
    /// 1-based position of the new creature in the collection
    pub slot: usize,
}

/// Buy one egg of a tier
pub fn buy_egg(player: &mut Player, tier: EggTier, balance: &Balance) -> Result<PurchaseOutcome> {
    let price = balance.eggs.def(tier).price;
    if player.coins < price {
        return Err(Error::InsufficientFunds {
            required: price,
            available: player.coins,
        });
    }

    *player.eggs.entry(tier).or_insert(0) += 1;
    player.coins -= price;

    Ok(PurchaseOutcome {
        tier,
        price,
        held: player.egg_count(tier),
    })
}

/// Hatch one held egg of a tier into a new creature
pub fn hatch(
    player: &mut Player,
    tier: EggTier,
    rng: &mut GameRng,
    balance: &Balance,
) -> Result<HatchOutcome> {
    if player.egg_count(tier) == 0 {
        return Err(Error::PreconditionFailed(format!(
            "no {tier} egg to hatch"
        )));
    }

    let boost = balance.eggs.def(tier).rarity_boost;
    let creature = generate_creature(rng, balance, None, boost);
    if let Some(count) = player.eggs.get_mut(&tier) {
        *count -= 1;
    }
    player.creatures.push(creature.clone());

    Ok(HatchOutcome {
        creature,
        slot: player.creatures.len(),
    })
}
