//! Common query patterns for the database.

use crate::error::{Error, Result};
use crate::models::*;
use crate::store::Store;
use menagerie_core::PlayerId;

impl Store {
    /// IDs of every stored player.
    pub fn player_ids(&self) -> Result<Vec<PlayerId>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredPlayer>()?;
        let iter = scan.all()?;
        let stored: std::result::Result<Vec<StoredPlayer>, _> = iter.collect();
        let stored = stored.map_err(|e| Error::Database(e.to_string()))?;
        Ok(stored.into_iter().map(|s| PlayerId::new(s.id)).collect())
    }

    /// Number of stored players.
    pub fn count_players(&self) -> Result<usize> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredPlayer>()?;
        let iter = scan.all()?;
        Ok(iter.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_core::Player;

    #[test]
    fn test_player_ids_lists_saved_players() {
        let store = Store::in_memory().unwrap();
        for id in [3u64, 1, 2] {
            store
                .save_player(&Player::new(PlayerId::new(id), 450))
                .unwrap();
        }

        let mut ids = store.player_ids().unwrap();
        ids.sort();
        assert_eq!(
            ids,
            vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]
        );
        assert_eq!(store.count_players().unwrap(), 3);
    }
}
