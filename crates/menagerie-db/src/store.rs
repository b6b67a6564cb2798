//! Database store wrapper.

use crate::error::{Error, Result};
use crate::models::*;
use menagerie_core::{Player, PlayerId};
use native_db::*;
use std::path::Path;
use std::sync::LazyLock;

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredPlayer>().unwrap();
    models
});

/// Database store for persistent player state.
pub struct Store {
    pub(crate) db: Database<'static>,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new()
            .create(&MODELS, path.as_ref())
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Save a player, replacing any previous record.
    pub fn save_player(&self, player: &Player) -> Result<()> {
        let stored = StoredPlayer::from_player(player)?;
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Save several players in one transaction.
    ///
    /// The records commit together or not at all, so a failure partway
    /// through never leaves half of a multi-player change on disk.
    pub fn save_players(&self, players: &[&Player]) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        for player in players {
            rw.upsert(StoredPlayer::from_player(player)?)?;
        }
        rw.commit()?;
        Ok(())
    }

    /// Load a player by ID.
    pub fn load_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredPlayer> = r.get().primary(id.raw())?;
        stored.map(|s| s.to_player()).transpose()
    }

    /// Load a player that must already exist.
    pub fn require_player(&self, id: PlayerId) -> Result<Player> {
        self.load_player(id)?
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Load a player, creating and saving a fresh record if missing.
    pub fn get_or_create_player(&self, id: PlayerId, starting_coins: i64) -> Result<Player> {
        if let Some(player) = self.load_player(id)? {
            return Ok(player);
        }
        let player = Player::new(id, starting_coins);
        self.save_player(&player)?;
        Ok(player)
    }

    /// Delete a player. Returns whether a record was removed.
    pub fn delete_player(&self, id: PlayerId) -> Result<bool> {
        let rw = self.db.rw_transaction()?;
        let stored: Option<StoredPlayer> = rw.get().primary(id.raw())?;
        let found = stored.is_some();
        if let Some(s) = stored {
            rw.remove(s)?;
        }
        rw.commit()?;
        Ok(found)
    }

    /// Load all players.
    pub fn load_all_players(&self) -> Result<Vec<Player>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredPlayer>()?;
        let iter = scan.all()?;
        let stored: std::result::Result<Vec<StoredPlayer>, _> = iter.collect();
        let stored = stored.map_err(|e| Error::Database(e.to_string()))?;
        stored.iter().map(|s| s.to_player()).collect()
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_core::{generate_creature, Balance, EggTier, GameRng, Timestamp};

    fn sample_player(id: u64) -> Player {
        let balance = Balance::default();
        let mut rng = GameRng::new(99);
        let mut player = Player::new(PlayerId::new(id), 777);
        *player.eggs.entry(EggTier::Premium).or_insert(0) += 2;
        player
            .creatures
            .push(generate_creature(&mut rng, &balance, None, 0.0));
        player
            .creatures
            .push(generate_creature(&mut rng, &balance, None, 0.30));
        player.last_daily = Some(Timestamp::from_unix(1_700_000_000));
        player.streak = 5;
        player
    }

    #[test]
    fn test_missing_player_is_none() {
        let store = Store::in_memory().unwrap();
        assert!(store.load_player(PlayerId::new(1)).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = Store::in_memory().unwrap();
        let player = sample_player(42);
        store.save_player(&player).unwrap();

        let loaded = store.load_player(player.id).unwrap().unwrap();
        assert_eq!(loaded, player);
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let store = Store::in_memory().unwrap();
        let mut player = sample_player(42);
        store.save_player(&player).unwrap();

        player.coins = 123;
        player.streak = 6;
        store.save_player(&player).unwrap();

        let loaded = store.load_player(player.id).unwrap().unwrap();
        assert_eq!(loaded.coins, 123);
        assert_eq!(loaded.streak, 6);
    }

    #[test]
    fn test_save_players_commits_both_records() {
        let store = Store::in_memory().unwrap();
        let mut alice = sample_player(1);
        let bob = sample_player(2);
        store.save_player(&alice).unwrap();
        alice.coins = 12;

        store.save_players(&[&alice, &bob]).unwrap();

        assert_eq!(store.require_player(alice.id).unwrap().coins, 12);
        assert_eq!(store.require_player(bob.id).unwrap(), bob);
    }

    #[test]
    fn test_get_or_create_bootstraps_then_reuses() {
        let store = Store::in_memory().unwrap();
        let fresh = store.get_or_create_player(PlayerId::new(7), 450).unwrap();
        assert_eq!(fresh.coins, 450);
        assert!(fresh.creatures.is_empty());
        assert_eq!(fresh.streak, 0);

        // A second call must return the saved record, not a new one.
        let mut updated = fresh.clone();
        updated.coins = 9000;
        store.save_player(&updated).unwrap();
        let again = store.get_or_create_player(PlayerId::new(7), 450).unwrap();
        assert_eq!(again.coins, 9000);
    }

    #[test]
    fn test_require_player_reports_missing() {
        let store = Store::in_memory().unwrap();
        let err = store.require_player(PlayerId::new(5)).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)), "got {err}");
    }

    #[test]
    fn test_delete_player() {
        let store = Store::in_memory().unwrap();
        let player = sample_player(42);
        store.save_player(&player).unwrap();

        assert!(store.delete_player(player.id).unwrap());
        assert!(store.load_player(player.id).unwrap().is_none());
        assert!(!store.delete_player(player.id).unwrap(), "already gone");
    }
}
