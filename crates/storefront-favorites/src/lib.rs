//! Durable keyed store for favorite products.
//!
//! Keyed by product id; add-or-replace, delete-by-id, existence check, and a
//! recency-descending listing. Backed by a JSON file so favorites survive
//! process restart.

pub mod error;
pub mod store;

pub use error::FavoritesError;
pub use store::{FavoriteProduct, FavoritesStore};
