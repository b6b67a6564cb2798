//! Trade negotiation for the menagerie game.
//!
//! A trade swaps exactly one creature each way between two players. The
//! proposer posts an offer naming a partner and one of their own
//! creatures; the named partner settles it by picking a creature of
//! their own in return, or the proposer withdraws it. Offers live on a
//! process-wide [`TradeBoard`] and every transition happens under a
//! single lock hold, so a trade is observed either not at all or fully
//! settled.

mod board;
mod offer;

pub use board::TradeBoard;
pub use offer::{Settlement, TradeOffer, TradeStatus};
