//! Favorites store error types.

use thiserror::Error;

/// Errors that can occur while persisting favorites.
#[derive(Error, Debug)]
pub enum FavoritesError {
    /// Failed to read or write the backing file.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize stored entries.
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
