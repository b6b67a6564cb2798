//! The shared trade board.

use crate::offer::{Settlement, TradeOffer, TradeStatus};
use indexmap::IndexMap;
use menagerie_core::{Error, Player, PlayerId, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-wide negotiation state, keyed by proposer.
///
/// Each proposer has at most one outstanding offer; proposing again
/// replaces it. Every transition reads and writes the board under a
/// single lock hold, so callers never observe a half-settled trade.
#[derive(Debug, Default)]
pub struct TradeBoard {
    offers: Mutex<IndexMap<PlayerId, TradeOffer>>,
}

impl TradeBoard {
    pub fn new() -> Self {
        Self {
            offers: Mutex::new(IndexMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<PlayerId, TradeOffer>> {
        // Entries are inserted and removed whole, so the map is
        // consistent even if a previous holder panicked.
        self.offers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Post an offer of one of the proposer's creatures to a partner.
    ///
    /// Replaces any earlier offer from the same proposer.
    pub fn propose(&self, proposer: &Player, partner: PlayerId, slot: usize) -> Result<TradeOffer> {
        if partner == proposer.id {
            return Err(Error::Validation("cannot trade with yourself".into()));
        }
        if proposer.creatures.is_empty() {
            return Err(Error::PreconditionFailed("no creatures to offer".into()));
        }
        if proposer.creature(slot).is_none() {
            return Err(Error::Validation(format!("no creature in slot {}", slot + 1)));
        }
        let offer = TradeOffer {
            proposer: proposer.id,
            partner,
            offered_slot: slot,
            status: TradeStatus::Waiting,
        };
        self.lock().insert(proposer.id, offer.clone());
        Ok(offer)
    }

    /// Settle the proposer's offer: the responder gives the creature in
    /// `slot` and takes the one the proposer offered.
    ///
    /// Only the partner named by the offer may respond. The offered
    /// index is re-validated here, since the proposer's collection may
    /// have changed since propose time. On any rejection both players
    /// and the board are left untouched and the offer stays open.
    pub fn respond(
        &self,
        proposer: &mut Player,
        responder: &mut Player,
        slot: usize,
    ) -> Result<Settlement> {
        let mut offers = self.lock();
        let offer = offers.get(&proposer.id).cloned().ok_or_else(|| {
            Error::PreconditionFailed(format!("no open trade from {}", proposer.id))
        })?;
        if offer.partner != responder.id {
            return Err(Error::PreconditionFailed(format!(
                "this trade is reserved for {}",
                offer.partner
            )));
        }
        if responder.creature(slot).is_none() {
            return Err(Error::Validation(format!("no creature in slot {}", slot + 1)));
        }
        if proposer.creature(offer.offered_slot).is_none() {
            return Err(Error::PreconditionFailed(
                "the offered creature is no longer available".into(),
            ));
        }

        // All checks passed: swap, then retire the offer, still under
        // the same lock hold.
        let proposer_gave = proposer.creatures.remove(offer.offered_slot);
        let responder_gave = responder.creatures.remove(slot);
        proposer.creatures.push(responder_gave.clone());
        responder.creatures.push(proposer_gave.clone());
        offers.shift_remove(&proposer.id);

        Ok(Settlement {
            offer: TradeOffer {
                status: TradeStatus::Settled,
                ..offer
            },
            proposer_gave,
            responder_gave,
        })
    }

    /// Withdraw the caller's outstanding offer, if any.
    pub fn cancel(&self, who: PlayerId) -> Option<TradeOffer> {
        self.lock().shift_remove(&who)
    }

    /// The caller's outstanding offer, if any.
    pub fn pending(&self, proposer: PlayerId) -> Option<TradeOffer> {
        self.lock().get(&proposer).cloned()
    }

    /// Number of offers currently waiting.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
