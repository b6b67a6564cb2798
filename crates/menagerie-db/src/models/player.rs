//! Player model for database storage.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use menagerie_core::{Creature, EggTier, Player, PlayerId, Timestamp};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// Stored player record in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredPlayer {
    /// Primary key - player ID.
    #[primary_key]
    pub id: u64,
    /// Coin balance.
    pub coins: i64,
    /// Serialized egg inventory.
    pub eggs: Vec<u8>,
    /// Serialized creature collection.
    pub creatures: Vec<u8>,
    /// Unix timestamp of the last daily claim.
    pub last_daily: Option<i64>,
    /// Consecutive daily claims.
    pub streak: u32,
}

impl StoredPlayer {
    /// Create from a menagerie Player.
    pub fn from_player(player: &Player) -> Result<Self> {
        let eggs =
            bincode::serialize(&player.eggs).map_err(|e| Error::Serialization(e.to_string()))?;
        let creatures = bincode::serialize(&player.creatures)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(Self {
            id: player.id.raw(),
            coins: player.coins,
            eggs,
            creatures,
            last_daily: player.last_daily.map(|t| t.unix()),
            streak: player.streak,
        })
    }

    /// Convert to a menagerie Player.
    pub fn to_player(&self) -> Result<Player> {
        let eggs: IndexMap<EggTier, u32> =
            bincode::deserialize(&self.eggs).map_err(|e| Error::Serialization(e.to_string()))?;
        let creatures: Vec<Creature> = bincode::deserialize(&self.creatures)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(Player {
            id: PlayerId::new(self.id),
            coins: self.coins,
            eggs,
            creatures,
            last_daily: self.last_daily.map(Timestamp::from_unix),
            streak: self.streak,
        })
    }
}
