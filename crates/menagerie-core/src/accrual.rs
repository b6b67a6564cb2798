//! Passive income and the daily reward
//!
//! Nothing here runs on a timer. Income accrues lazily from elapsed wall
//! time at collection, capped per pass; the daily reward is gated by a
//! cooldown and a streak window. `now` is always supplied by the caller.

use crate::balance::Balance;
use crate::clock::{Timestamp, SECS_PER_HOUR};
use crate::error::{Error, Result};
use crate::player::Player;

/// Result of a collection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOutcome {
    /// Coins awarded across the whole collection
    pub total: i64,
    /// Creatures that contributed at least one full hour
    pub contributors: usize,
}

impl CollectOutcome {
    /// A zero-yield pass mutated nothing and needs no persisting
    pub fn is_noop(&self) -> bool {
        self.total == 0
    }
}

/// Result of a successful daily claim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyOutcome {
    pub reward: i64,
    pub bonus: i64,
    pub streak: u32,
}

/// Collect pending income from every creature
///
/// A creature that has never been collected is due exactly one hour.
/// Otherwise elapsed hours are capped at the configured maximum, and a
/// creature under one full hour is left completely untouched so its
/// fractional time keeps pending. Coins land on the balance only when
/// the pass yielded anything.
pub fn collect(player: &mut Player, now: Timestamp, balance: &Balance) -> CollectOutcome {
    let cap = balance.accrual.collect_cap_hours as f64;
    let mut total = 0i64;
    let mut contributors = 0usize;

    for creature in &mut player.creatures {
        let hours = match creature.last_collected {
            None => 1.0,
            Some(last) => now.hours_since(last).min(cap),
        };
        if hours >= 1.0 {
            total += (creature.coin_rate as f64 * hours) as i64;
            creature.last_collected = Some(now);
            contributors += 1;
        }
    }

    if total > 0 {
        player.coins += total;
    }
    CollectOutcome {
        total,
        contributors,
    }
}

/// Claim the daily reward
///
/// Rejected while the cooldown runs, reporting whole hours left (ceiling,
/// never zero). A claim inside the streak window extends the streak; a
/// later claim restarts it at 1. The streak bonus is capped.
pub fn claim_daily(player: &mut Player, now: Timestamp, balance: &Balance) -> Result<DailyOutcome> {
    let cooldown_secs = balance.accrual.daily_cooldown_hours * SECS_PER_HOUR;
    if let Some(last) = player.last_daily {
        let elapsed = now.seconds_since(last);
        if elapsed < cooldown_secs {
            let remaining = cooldown_secs - elapsed;
            let hours_left = ((remaining + SECS_PER_HOUR - 1) / SECS_PER_HOUR).max(1);
            return Err(Error::CooldownActive { hours_left });
        }
    }

    let window_secs = balance.accrual.streak_window_hours * SECS_PER_HOUR;
    let streak = match player.last_daily {
        Some(last) if now.seconds_since(last) < window_secs => player.streak + 1,
        _ => 1,
    };
    let bonus = (streak as i64 * balance.accrual.daily_step).min(balance.accrual.daily_bonus_cap);
    let reward = balance.accrual.daily_base + bonus;

    player.streak = streak;
    player.last_daily = Some(now);
    player.coins += reward;

    Ok(DailyOutcome {
        reward,
        bonus,
        streak,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::{Creature, Stats};
    use crate::identity::{CreatureId, PlayerId};
    use crate::rarity::Rarity;
    use crate::species::Species;

    fn earner(rate: i64, last_collected: Option<Timestamp>) -> Creature {
        Creature {
            id: CreatureId::new(22222),
            species: Species::Water,
            rarity: Rarity::Common,
            level: 1,
            xp: 0,
            xp_needed: 100,
            stats: Stats {
                attack: 10,
                defense: 10,
                health: 20,
                speed: 10,
            },
            coin_rate: rate,
            last_collected,
        }
    }

    fn player_with(creatures: Vec<Creature>) -> Player {
        let mut player = Player::new(PlayerId::new(1), 100);
        player.creatures = creatures;
        player
    }

    #[test]
    fn test_collect_bootstrap_is_one_hour() {
        let balance = Balance::default();
        let now = Timestamp::from_unix(1_000_000);
        let mut player = player_with(vec![earner(21, None)]);

        let outcome = collect(&mut player, now, &balance);
        assert_eq!(outcome.total, 21, "never-collected is worth exactly 1h");
        assert_eq!(outcome.contributors, 1);
        assert_eq!(player.coins, 121);
        assert_eq!(player.creatures[0].last_collected, Some(now));
    }

    #[test]
    fn test_collect_twice_within_the_hour_is_noop() {
        let balance = Balance::default();
        let now = Timestamp::from_unix(1_000_000);
        let mut player = player_with(vec![earner(21, None)]);

        collect(&mut player, now, &balance);
        let later = now.add_secs(60);
        let second = collect(&mut player, later, &balance);

        assert!(second.is_noop());
        assert_eq!(second.total, 0);
        assert_eq!(player.coins, 121, "no additional coins within the hour");
        assert_eq!(
            player.creatures[0].last_collected,
            Some(now),
            "timestamp must not advance on a zero-yield pass"
        );
    }

    #[test]
    fn test_collect_caps_at_24_hours() {
        let balance = Balance::default();
        let now = Timestamp::from_unix(10_000_000);
        let long_ago = now.add_hours(-1000);
        let mut player = player_with(vec![earner(30, Some(long_ago))]);

        let outcome = collect(&mut player, now, &balance);
        assert_eq!(outcome.total, 30 * 24, "1000 idle hours pay as 24");
        assert_eq!(player.creatures[0].last_collected, Some(now));
    }

    #[test]
    fn test_collect_fractional_hours_floor() {
        let balance = Balance::default();
        let now = Timestamp::from_unix(1_000_000);
        let ninety_min_ago = now.add_secs(-90 * 60);
        let mut player = player_with(vec![earner(21, Some(ninety_min_ago))]);

        let outcome = collect(&mut player, now, &balance);
        assert_eq!(outcome.total, 31, "floor(21 * 1.5)");

        // The fresh fraction keeps pending
        let later = now.add_secs(30 * 60);
        let second = collect(&mut player, later, &balance);
        assert!(second.is_noop());
        assert_eq!(player.creatures[0].last_collected, Some(now));
    }

    #[test]
    fn test_collect_only_due_creatures_advance() {
        let balance = Balance::default();
        let now = Timestamp::from_unix(1_000_000);
        let due = earner(21, Some(now.add_hours(-2)));
        let fresh = earner(35, Some(now.add_secs(-600)));
        let mut player = player_with(vec![due, fresh]);

        let outcome = collect(&mut player, now, &balance);
        assert_eq!(outcome.total, 42);
        assert_eq!(outcome.contributors, 1);
        assert_eq!(player.creatures[0].last_collected, Some(now));
        assert_eq!(
            player.creatures[1].last_collected,
            Some(now.add_secs(-600)),
            "under-an-hour creature untouched"
        );
    }

    #[test]
    fn test_collect_empty_collection_is_noop() {
        let balance = Balance::default();
        let mut player = player_with(vec![]);
        let snapshot = player.clone();
        let outcome = collect(&mut player, Timestamp::from_unix(1), &balance);
        assert!(outcome.is_noop());
        assert_eq!(player, snapshot);
    }

    #[test]
    fn test_collect_tolerates_clock_skew() {
        let balance = Balance::default();
        let now = Timestamp::from_unix(1_000_000);
        let future = now.add_hours(2);
        let mut player = player_with(vec![earner(21, Some(future))]);
        let snapshot = player.clone();

        let outcome = collect(&mut player, now, &balance);
        assert!(outcome.is_noop(), "negative elapsed time yields nothing");
        assert_eq!(player, snapshot);
    }

    #[test]
    fn test_daily_first_claim() {
        let balance = Balance::default();
        let now = Timestamp::from_unix(1_000_000);
        let mut player = player_with(vec![]);

        let outcome = claim_daily(&mut player, now, &balance).expect("first claim");
        assert_eq!(outcome.streak, 1);
        assert_eq!(outcome.bonus, 10);
        assert_eq!(outcome.reward, 130);
        assert_eq!(player.coins, 230);
        assert_eq!(player.last_daily, Some(now));
    }

    #[test]
    fn test_daily_cooldown_reports_hours_left() {
        let balance = Balance::default();
        let t0 = Timestamp::from_unix(1_000_000);
        let mut player = player_with(vec![]);
        claim_daily(&mut player, t0, &balance).expect("first claim");
        let snapshot = player.clone();

        // One hour in: 19 whole hours to go
        match claim_daily(&mut player, t0.add_hours(1), &balance) {
            Err(Error::CooldownActive { hours_left }) => assert_eq!(hours_left, 19),
            other => panic!("expected CooldownActive, got {:?}", other),
        }
        // 19.5 hours in: the last half hour still counts as one
        match claim_daily(&mut player, t0.add_secs(19 * SECS_PER_HOUR + 1800), &balance) {
            Err(Error::CooldownActive { hours_left }) => assert_eq!(hours_left, 1),
            other => panic!("expected CooldownActive, got {:?}", other),
        }
        assert_eq!(player, snapshot, "rejections leave the record unchanged");
    }

    #[test]
    fn test_daily_claim_at_exactly_20_hours() {
        let balance = Balance::default();
        let t0 = Timestamp::from_unix(1_000_000);
        let mut player = player_with(vec![]);
        claim_daily(&mut player, t0, &balance).expect("first claim");

        let outcome = claim_daily(&mut player, t0.add_hours(20), &balance).expect("on the mark");
        assert_eq!(outcome.streak, 2);
    }

    #[test]
    fn test_daily_streak_increments_within_window() {
        let balance = Balance::default();
        let t0 = Timestamp::from_unix(1_000_000);
        let mut player = player_with(vec![]);
        claim_daily(&mut player, t0, &balance).expect("first claim");

        let outcome = claim_daily(&mut player, t0.add_hours(47), &balance).expect("second claim");
        assert_eq!(outcome.streak, 2, "47h keeps the streak");
    }

    #[test]
    fn test_daily_streak_breaks_outside_window() {
        let balance = Balance::default();
        let t0 = Timestamp::from_unix(1_000_000);
        let mut player = player_with(vec![]);
        claim_daily(&mut player, t0, &balance).expect("first claim");

        let outcome = claim_daily(&mut player, t0.add_hours(49), &balance).expect("late claim");
        assert_eq!(outcome.streak, 1, "49h resets the streak");
    }

    #[test]
    fn test_daily_streak_breaks_at_exactly_48_hours() {
        let balance = Balance::default();
        let t0 = Timestamp::from_unix(1_000_000);
        let mut player = player_with(vec![]);
        claim_daily(&mut player, t0, &balance).expect("first claim");

        let outcome = claim_daily(&mut player, t0.add_hours(48), &balance).expect("window edge");
        assert_eq!(outcome.streak, 1, "the window is strictly under 48h");
    }

    #[test]
    fn test_daily_bonus_is_capped() {
        let balance = Balance::default();
        let t0 = Timestamp::from_unix(1_000_000);
        let mut player = player_with(vec![]);
        player.streak = 300;
        player.last_daily = Some(t0);

        let outcome = claim_daily(&mut player, t0.add_hours(24), &balance).expect("claim");
        assert_eq!(outcome.streak, 301);
        assert_eq!(outcome.bonus, 3000, "10 * 301 capped at 3000");
        assert_eq!(outcome.reward, 3120);
    }
}
