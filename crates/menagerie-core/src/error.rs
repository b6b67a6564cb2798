//! Rejection taxonomy shared by every engine operation
//!
//! All failures here are recoverable command rejections: the operation
//! left every record exactly as it found it.

use thiserror::Error;

/// Why an operation was rejected
#[derive(Error, Debug)]
pub enum Error {
    /// Bad argument shape or range (nonexistent slot, self-merge, self-trade)
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The player cannot afford the operation
    #[error("Insufficient funds: {required} coins required, {available} available")]
    InsufficientFunds { required: i64, available: i64 },

    /// A game-state precondition does not hold (species mismatch, stale trade)
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// The operation is rate-limited and the wait is not over
    #[error("Cooldown active: {hours_left}h remaining")]
    CooldownActive { hours_left: i64 },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
