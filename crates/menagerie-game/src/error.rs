//! Error types for the game facade.

use thiserror::Error;

/// Result type for game facade operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a game operation.
#[derive(Debug, Error)]
pub enum Error {
    /// A rule rejection from the economy engines. The player record is
    /// unchanged when this is returned.
    #[error(transparent)]
    Rules(#[from] menagerie_core::Error),

    /// Persistent storage failure.
    #[error("storage error: {0}")]
    Storage(#[from] menagerie_db::Error),
}

impl Error {
    /// The underlying rule rejection, if this is one.
    pub fn rejection(&self) -> Option<&menagerie_core::Error> {
        match self {
            Error::Rules(e) => Some(e),
            _ => None,
        }
    }
}

// Compile-time check that Error is Send + Sync for thread-safe error propagation.
// This function is never called but will fail to compile if the bound is not satisfied.
fn _assert_error_send_sync<T: Send + Sync>() {}
fn _error_is_send_sync() {
    _assert_error_send_sync::<Error>();
}
