//! Menagerie Game - session layer over the economy engines
//!
//! This crate wires the pure engines from menagerie-core to persistent
//! storage and the shared trade board, one operation per player command.
//!
//! ## Architecture
//!
//! ```text
//! Game (one per world)
//!  │
//!  ├── Store (menagerie-db) ← player records, saved only on success
//!  ├── TradeBoard (menagerie-exchange) ← in-memory offers, lock-guarded
//!  ├── Balance ← tuning sheet, loaded once
//!  ├── GameRng ← owned here; engines receive it explicitly
//!  └── Clock ← wall time or a scripted time line
//! ```
//!
//! ## Key Components
//!
//! - [`Game`]: the facade; load player, run engine, save on success
//! - [`Clock`]: time source trait, with [`SystemClock`] and [`ManualClock`]
//! - [`Error`]: rule rejections kept apart from storage failures

mod clock;
mod error;
mod game;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use game::Game;
