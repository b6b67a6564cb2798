//! Database models for persistent storage.

mod player;

pub use player::*;
