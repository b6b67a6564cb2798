//! Menagerie DB - Database layer using native_db
//!
//! Provides persistent storage for player records: coin balance, egg
//! inventory, creature collection, and daily-claim bookkeeping.

mod error;
mod models;
mod queries;
mod store;

pub use error::{Error, Result};
pub use store::Store;
