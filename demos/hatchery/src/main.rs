//! Hatchery Walkthrough
//!
//! Demonstrates the menagerie economy with two players on a scripted
//! clock: hatching, passive income, daily rewards, merging, training,
//! and a creature trade.

use menagerie_core::{Balance, Creature, EggTier, PlayerId, StatKind, Timestamp};
use menagerie_db::Store;
use menagerie_game::{Game, ManualClock};
use std::sync::Arc;

/// One-based slots of the first two creatures sharing a species.
fn same_species_pair(creatures: &[Creature]) -> Option<(usize, usize)> {
    for i in 0..creatures.len() {
        for j in i + 1..creatures.len() {
            if creatures[i].species == creatures[j].species {
                return Some((i + 1, j + 1));
            }
        }
    }
    None
}

fn show_roster(game: &Game, id: PlayerId) {
    let player = game.profile(id).unwrap();
    println!("{id}: {} coins, streak {}", player.coins, player.streak);
    for (i, c) in player.creatures.iter().enumerate() {
        println!(
            "  slot {}: {} lvl {} [{} atk / {} def / {} hp / {} spd] earning {}/h",
            i + 1,
            c,
            c.level,
            c.stats.attack,
            c.stats.defense,
            c.stats.health,
            c.stats.speed,
            c.coin_rate,
        );
    }
}

fn main() {
    println!("=== Menagerie Hatchery Walkthrough ===\n");

    // A scripted clock so the whole run is reproducible
    let clock = Arc::new(ManualClock::new(Timestamp::from_unix(1_700_000_000)));
    let store = Store::in_memory().unwrap();
    let mut game = Game::with_clock(store, Balance::default(), 42, clock.clone());

    let ana = PlayerId::new(1);
    let ben = PlayerId::new(2);

    // First contact creates the profile with starting coins
    let profile = game.profile(ana).unwrap();
    println!("{ana} registers with {} coins", profile.coins);
    game.profile(ben).unwrap();
    println!("{ben} registers too\n");

    // Day 1: both buy a basic egg and hatch it
    for id in [ana, ben] {
        let bought = game.buy_egg(id, EggTier::Basic).unwrap();
        println!("{id} buys a {} egg for {} coins", bought.tier, bought.price);
        let hatched = game.hatch(id, EggTier::Basic).unwrap();
        println!("  out comes {} into slot {}", hatched.creature, hatched.slot);
    }

    // Daily rewards start a streak
    println!();
    for id in [ana, ben] {
        let daily = game.claim_daily(id).unwrap();
        println!(
            "{id} claims the daily: {} coins (streak {}, bonus {})",
            daily.reward, daily.streak, daily.bonus
        );
    }

    // Six hours later the creatures have earned their keep
    clock.advance_hours(6);
    println!("\n-- six hours pass --\n");
    for id in [ana, ben] {
        let collected = game.collect(id).unwrap();
        println!(
            "{id} collects {} coins from {} creature(s)",
            collected.total, collected.contributors
        );
    }

    // Next day: another collection round and a second daily
    clock.advance_hours(24);
    println!("\n-- a day passes --\n");
    for id in [ana, ben] {
        let collected = game.collect(id).unwrap();
        let daily = game.claim_daily(id).unwrap();
        println!(
            "{id} collects {} coins and claims the daily (streak {})",
            collected.total, daily.streak
        );
    }

    // Ben has saved up for a premium egg; its boost favors rarer tiers
    println!();
    let bought = game.buy_egg(ben, EggTier::Premium).unwrap();
    println!("{ben} buys a {} egg for {} coins", bought.tier, bought.price);
    let hatched = game.hatch(ben, EggTier::Premium).unwrap();
    println!("  out comes {} into slot {}", hatched.creature, hatched.slot);

    // Ana hatches a second creature and tries to merge her pair
    let bought = game.buy_egg(ana, EggTier::Basic).unwrap();
    println!("\n{ana} buys another {} egg", bought.tier);
    let hatched = game.hatch(ana, EggTier::Basic).unwrap();
    println!("  out comes {} into slot {}", hatched.creature, hatched.slot);

    let roster = game.profile(ana).unwrap().creatures;
    match same_species_pair(&roster) {
        Some((a, b)) => {
            let outcome = game.merge(ana, a, b).unwrap();
            println!(
                "  slots {a} and {b} share a species: merged into {} lvl {} for {} coins{}",
                outcome.merged,
                outcome.merged.level,
                outcome.cost,
                if outcome.promoted {
                    ", and it got promoted!"
                } else {
                    ""
                }
            );
        }
        None => {
            // Different species cannot merge; the engine says so
            let err = game.merge(ana, 1, 2).unwrap_err();
            println!("  no matching pair: {err}");
        }
    }

    // Training raises a single stat for a fee
    let outcome = game.train(ana, 1, StatKind::Attack).unwrap();
    println!(
        "{ana} trains attack: {} -> {} for {} coins",
        outcome.before, outcome.after, outcome.cost
    );

    // A trade: Ana offers her first creature, Ben answers with his
    println!();
    let offer = game.propose_trade(ana, ben, 1).unwrap();
    println!(
        "{ana} offers the creature in slot {} to {ben}",
        offer.offered_slot + 1
    );
    let settlement = game.respond_trade(ana, ben, 1).unwrap();
    println!(
        "{ben} accepts: gives {}, receives {}",
        settlement.responder_gave, settlement.proposer_gave
    );

    println!("\n=== Final Standings ===\n");
    show_roster(&game, ana);
    show_roster(&game, ben);
}
