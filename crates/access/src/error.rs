//! Access error types.

use thiserror::Error;

/// Access errors.
///
/// Resolution itself is total and never produces these; they come from the
/// edges (reading account records, gating on a session).
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The session did not carry a verified account.
    #[error("not authenticated: {0}")]
    NotAuthenticated(String),

    /// Failed to parse an account record.
    #[error("failed to parse account: {0}")]
    Parse(String),

    /// An I/O error occurred while reading an account record.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
