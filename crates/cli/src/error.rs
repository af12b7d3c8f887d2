//! CLI error types.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The account file does not exist.
    #[error("account file not found at {path}")]
    AccountNotFound { path: PathBuf },

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// An error occurred in the access layer.
    #[error(transparent)]
    Access(#[from] access::Error),

    /// Failed to render output.
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
