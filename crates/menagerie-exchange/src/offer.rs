//! Trade offer records.

use menagerie_core::{Creature, PlayerId};
use serde::{Deserialize, Serialize};

/// Lifecycle of a trade offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeStatus {
    /// Proposed and awaiting the partner's response.
    Waiting,
    /// Settled by the partner; terminal.
    Settled,
}

/// One player's outstanding offer to trade a creature with a partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeOffer {
    /// Who made the offer. At most one offer per proposer at a time.
    pub proposer: PlayerId,
    /// Who may respond. Nobody else can settle this offer.
    pub partner: PlayerId,
    /// Zero-based index into the proposer's collection, captured at
    /// propose time. The collection may change before settlement, so
    /// this index is re-validated when the partner responds.
    pub offered_slot: usize,
    pub status: TradeStatus,
}

/// Record of a completed swap.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    /// The offer that settled, with its status advanced.
    pub offer: TradeOffer,
    /// The creature the proposer handed over.
    pub proposer_gave: Creature,
    /// The creature the responder handed over.
    pub responder_gave: Creature,
}
