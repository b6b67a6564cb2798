//! Game - session facade over the economy engines
//!
//! Game owns the store, the trade board, the balance sheet, the RNG,
//! and a clock. Each operation loads the acting player, runs one pure
//! engine, and saves only when the engine reports success, so a
//! rejected command never leaves a half-applied record behind.
//!
//! Slots in this API are numbered from 1, the way players see their
//! roster; the engines index from 0 and the conversion happens here.

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use menagerie_core::{
    accrual, progression, shop, Balance, CollectOutcome, DailyOutcome, EggTier, GameRng,
    HatchOutcome, MergeOutcome, Player, PlayerId, PurchaseOutcome, StatKind, TrainOutcome,
};
use menagerie_db::Store;
use menagerie_exchange::{Settlement, TradeBoard, TradeOffer};
use std::sync::Arc;

/// Central coordinator for one game world.
///
/// ```
/// use menagerie_core::{Balance, EggTier, PlayerId};
/// use menagerie_db::Store;
/// use menagerie_game::Game;
///
/// let store = Store::in_memory().unwrap();
/// let mut game = Game::new(store, Balance::default(), 7);
///
/// let player = game.profile(PlayerId::new(1)).unwrap();
/// assert_eq!(player.coins, 450);
///
/// game.buy_egg(PlayerId::new(1), EggTier::Basic).unwrap();
/// let hatched = game.hatch(PlayerId::new(1), EggTier::Basic).unwrap();
/// assert_eq!(hatched.slot, 1);
/// ```
pub struct Game {
    store: Store,
    board: TradeBoard,
    balance: Balance,
    rng: GameRng,
    clock: Arc<dyn Clock>,
}

impl Game {
    /// Create a game on the wall clock.
    pub fn new(store: Store, balance: Balance, seed: u64) -> Self {
        Self::with_clock(store, balance, seed, Arc::new(SystemClock))
    }

    /// Create a game with an explicit time source.
    pub fn with_clock(store: Store, balance: Balance, seed: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            board: TradeBoard::new(),
            balance,
            rng: GameRng::new(seed),
            clock,
        }
    }

    /// The balance sheet this game runs on.
    pub fn balance(&self) -> &Balance {
        &self.balance
    }

    /// Fetch a player's record, creating it on first contact.
    pub fn profile(&self, id: PlayerId) -> Result<Player> {
        Ok(self
            .store
            .get_or_create_player(id, self.balance.starting_coins)?)
    }

    /// IDs of every registered player.
    pub fn roster(&self) -> Result<Vec<PlayerId>> {
        Ok(self.store.player_ids()?)
    }

    /// Buy one egg of a tier.
    pub fn buy_egg(&mut self, id: PlayerId, tier: EggTier) -> Result<PurchaseOutcome> {
        let mut player = self.load_required(id)?;
        let outcome = shop::buy_egg(&mut player, tier, &self.balance)?;
        self.store.save_player(&player)?;
        Ok(outcome)
    }

    /// Hatch one held egg of a tier into a new creature.
    pub fn hatch(&mut self, id: PlayerId, tier: EggTier) -> Result<HatchOutcome> {
        let mut player = self.load_required(id)?;
        let outcome = shop::hatch(&mut player, tier, &mut self.rng, &self.balance)?;
        self.store.save_player(&player)?;
        Ok(outcome)
    }

    /// Collect accrued coins from every creature that has some due.
    pub fn collect(&mut self, id: PlayerId) -> Result<CollectOutcome> {
        let mut player = self.load_required(id)?;
        let outcome = accrual::collect(&mut player, self.clock.now(), &self.balance);
        if !outcome.is_noop() {
            self.store.save_player(&player)?;
        }
        Ok(outcome)
    }

    /// Claim the daily reward.
    pub fn claim_daily(&mut self, id: PlayerId) -> Result<DailyOutcome> {
        let mut player = self.load_required(id)?;
        let outcome = accrual::claim_daily(&mut player, self.clock.now(), &self.balance)?;
        self.store.save_player(&player)?;
        Ok(outcome)
    }

    /// Merge the creatures in two slots into one stronger creature.
    pub fn merge(&mut self, id: PlayerId, slot_a: usize, slot_b: usize) -> Result<MergeOutcome> {
        let a = Self::slot_index(slot_a)?;
        let b = Self::slot_index(slot_b)?;
        let mut player = self.load_required(id)?;
        let outcome = progression::merge(&mut player, a, b, &mut self.rng, &self.balance)?;
        self.store.save_player(&player)?;
        Ok(outcome)
    }

    /// Train one stat of the creature in a slot.
    pub fn train(&mut self, id: PlayerId, slot: usize, stat: StatKind) -> Result<TrainOutcome> {
        let slot = Self::slot_index(slot)?;
        let mut player = self.load_required(id)?;
        let outcome = progression::train(&mut player, slot, stat, &self.balance)?;
        self.store.save_player(&player)?;
        Ok(outcome)
    }

    /// Offer a creature to another registered player.
    pub fn propose_trade(
        &mut self,
        proposer: PlayerId,
        partner: PlayerId,
        slot: usize,
    ) -> Result<TradeOffer> {
        let slot = Self::slot_index(slot)?;
        let proposer_record = self.load_required(proposer)?;
        // An offer may only name a partner who is already registered.
        self.load_required(partner)?;
        Ok(self.board.propose(&proposer_record, partner, slot)?)
    }

    /// Settle a proposer's offer with one of the responder's creatures.
    pub fn respond_trade(
        &mut self,
        proposer: PlayerId,
        responder: PlayerId,
        slot: usize,
    ) -> Result<Settlement> {
        let slot = Self::slot_index(slot)?;
        let mut proposer_record = self.load_required(proposer)?;
        let mut responder_record = self.load_required(responder)?;
        let settlement = self
            .board
            .respond(&mut proposer_record, &mut responder_record, slot)?;
        // Both sides of the swap land in one commit.
        self.store
            .save_players(&[&proposer_record, &responder_record])?;
        Ok(settlement)
    }

    /// Withdraw the caller's outstanding offer, if any.
    pub fn cancel_trade(&self, who: PlayerId) -> Option<TradeOffer> {
        self.board.cancel(who)
    }

    /// The caller's outstanding offer, if any.
    pub fn pending_trade(&self, who: PlayerId) -> Option<TradeOffer> {
        self.board.pending(who)
    }

    fn load_required(&self, id: PlayerId) -> Result<Player> {
        match self.store.require_player(id) {
            Ok(player) => Ok(player),
            Err(menagerie_db::Error::NotFound(_)) => Err(menagerie_core::Error::PreconditionFailed(
                format!("{id} has no profile yet"),
            )
            .into()),
            Err(e) => Err(e.into()),
        }
    }

    // Players count slots from 1; a bare 0 is always a caller mistake.
    fn slot_index(slot: usize) -> Result<usize> {
        if slot == 0 {
            return Err(
                menagerie_core::Error::Validation("slots are numbered from 1".into()).into(),
            );
        }
        Ok(slot - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::Error;
    use menagerie_core::{generate_creature, Creature, Rarity, Species, Timestamp};

    const T0: i64 = 1_700_000_000;

    fn test_game() -> (Game, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(Timestamp::from_unix(T0)));
        let game = Game::with_clock(
            Store::in_memory().unwrap(),
            Balance::default(),
            7,
            clock.clone(),
        );
        (game, clock)
    }

    fn creature_of(species: Species, seed: u64) -> Creature {
        let mut rng = GameRng::new(seed);
        generate_creature(&mut rng, &Balance::default(), Some(species), 0.0)
    }

    fn seeded_player(game: &Game, id: u64, creatures: Vec<Creature>) -> PlayerId {
        let pid = PlayerId::new(id);
        let mut player = Player::new(pid, 450);
        player.creatures = creatures;
        game.store.save_player(&player).unwrap();
        pid
    }

    fn rejection(err: &Error) -> &menagerie_core::Error {
        err.rejection().expect("expected a rule rejection")
    }

    #[test]
    fn test_profile_bootstraps_new_player() {
        let (game, _) = test_game();
        let player = game.profile(PlayerId::new(1)).unwrap();
        assert_eq!(player.coins, 450);
        assert!(player.creatures.is_empty());
        assert_eq!(game.roster().unwrap(), vec![PlayerId::new(1)]);
    }

    #[test]
    fn test_operations_require_a_profile() {
        let (mut game, _) = test_game();
        let err = game.buy_egg(PlayerId::new(9), EggTier::Basic).unwrap_err();
        assert!(
            matches!(
                rejection(&err),
                menagerie_core::Error::PreconditionFailed(_)
            ),
            "got {err}"
        );
    }

    #[test]
    fn test_buy_hatch_and_collect_cycle() {
        let (mut game, clock) = test_game();
        let pid = PlayerId::new(1);
        game.profile(pid).unwrap();

        let bought = game.buy_egg(pid, EggTier::Basic).unwrap();
        assert_eq!(bought.price, 150);
        assert_eq!(game.profile(pid).unwrap().coins, 300);

        let hatched = game.hatch(pid, EggTier::Basic).unwrap();
        assert_eq!(hatched.slot, 1);
        let rate = hatched.creature.coin_rate;

        // A fresh creature owes exactly one hour of income.
        let first = game.collect(pid).unwrap();
        assert_eq!(first.total, rate);
        assert_eq!(game.profile(pid).unwrap().coins, 300 + rate);

        // Nothing else is due until an hour passes.
        let nothing = game.collect(pid).unwrap();
        assert!(nothing.is_noop());

        clock.advance_hours(2);
        let later = game.collect(pid).unwrap();
        assert_eq!(later.total, rate * 2);
        assert_eq!(game.profile(pid).unwrap().coins, 300 + rate * 3);
    }

    #[test]
    fn test_daily_flow_through_clock() {
        let (mut game, clock) = test_game();
        let pid = PlayerId::new(1);
        game.profile(pid).unwrap();

        let first = game.claim_daily(pid).unwrap();
        assert_eq!(first.streak, 1);
        assert_eq!(first.reward, 130);

        let err = game.claim_daily(pid).unwrap_err();
        assert!(
            matches!(rejection(&err), menagerie_core::Error::CooldownActive { .. }),
            "got {err}"
        );

        clock.advance_hours(20);
        let second = game.claim_daily(pid).unwrap();
        assert_eq!(second.streak, 2);
        assert_eq!(second.reward, 140);

        clock.advance_hours(49);
        let reset = game.claim_daily(pid).unwrap();
        assert_eq!(reset.streak, 1, "a 48h gap must reset the streak");
    }

    #[test]
    fn test_merge_consumes_and_persists() {
        let (mut game, _) = test_game();
        let pid = seeded_player(
            &game,
            1,
            vec![
                creature_of(Species::Fire, 21),
                creature_of(Species::Fire, 22),
            ],
        );

        let outcome = game.merge(pid, 1, 2).unwrap();
        assert_eq!(outcome.cost, 180);
        assert_eq!(outcome.merged.level, 2);

        let after = game.profile(pid).unwrap();
        assert_eq!(after.creatures.len(), 1);
        assert_eq!(after.coins, 450 - 180);
        assert_eq!(after.creatures[0], outcome.merged);
    }

    #[test]
    fn test_merge_rejects_slot_zero() {
        let (mut game, _) = test_game();
        let pid = seeded_player(&game, 1, vec![creature_of(Species::Fire, 21)]);

        let err = game.merge(pid, 0, 1).unwrap_err();
        assert!(
            matches!(rejection(&err), menagerie_core::Error::Validation(_)),
            "got {err}"
        );
        assert_eq!(game.profile(pid).unwrap().creatures.len(), 1);
    }

    #[test]
    fn test_train_persists_stat_gain() {
        let (mut game, _) = test_game();
        let mut creature = creature_of(Species::Air, 23);
        creature.rarity = Rarity::Common;
        let before_attack = creature.stats.attack;
        let pid = seeded_player(&game, 1, vec![creature]);

        let outcome = game.train(pid, 1, StatKind::Attack).unwrap();
        assert_eq!(outcome.cost, 90);
        assert_eq!(outcome.before, before_attack);
        assert_eq!(outcome.after, before_attack + 2);

        let after = game.profile(pid).unwrap();
        assert_eq!(after.coins, 450 - 90);
        assert_eq!(after.creatures[0].stats.attack, before_attack + 2);
    }

    #[test]
    fn test_trade_cycle_persists_both_sides() {
        let (mut game, _) = test_game();
        let x = creature_of(Species::Fire, 31);
        let y = creature_of(Species::Water, 32);
        let alice = seeded_player(&game, 1, vec![x.clone()]);
        let bob = seeded_player(&game, 2, vec![y.clone()]);

        game.propose_trade(alice, bob, 1).unwrap();
        assert!(game.pending_trade(alice).is_some());

        let settlement = game.respond_trade(alice, bob, 1).unwrap();
        assert_eq!(settlement.proposer_gave, x);
        assert_eq!(settlement.responder_gave, y);

        assert_eq!(game.profile(alice).unwrap().creatures, vec![y]);
        assert_eq!(game.profile(bob).unwrap().creatures, vec![x]);
        assert!(game.pending_trade(alice).is_none());
    }

    #[test]
    fn test_propose_requires_partner_profile() {
        let (mut game, _) = test_game();
        let alice = seeded_player(&game, 1, vec![creature_of(Species::Fire, 31)]);

        let err = game.propose_trade(alice, PlayerId::new(99), 1).unwrap_err();
        assert!(
            matches!(
                rejection(&err),
                menagerie_core::Error::PreconditionFailed(_)
            ),
            "got {err}"
        );
    }

    #[test]
    fn test_cancel_trade() {
        let (mut game, _) = test_game();
        let alice = seeded_player(&game, 1, vec![creature_of(Species::Fire, 31)]);
        let bob = seeded_player(&game, 2, vec![creature_of(Species::Water, 32)]);

        game.propose_trade(alice, bob, 1).unwrap();
        assert!(game.cancel_trade(alice).is_some());
        assert!(game.pending_trade(alice).is_none());
    }
}
