//! Favorite product entries and the keyed store.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use storefront_catalog::Product;
use tracing::debug;

use crate::error::FavoritesError;

/// A favorited product.
///
/// A denormalized copy of the catalog product at the time it was saved, so the
/// favorites list renders without re-fetching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteProduct {
    /// Product id (store key).
    pub id: String,
    /// Product title.
    pub title: String,
    /// Price at save time.
    pub price: f64,
    /// Product description.
    pub description: String,
    /// Category name.
    pub category: String,
    /// Image URI.
    pub image: String,
    /// Average rating at save time.
    pub rating: f64,
    /// Rating count at save time.
    pub rating_count: u64,
    /// Unix millis when the product was favorited.
    pub saved_at: i64,
}

impl FavoriteProduct {
    /// Build an entry from a catalog product, stamped with the current time.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            rating: product.rating.rate,
            rating_count: product.rating.count,
            saved_at: current_timestamp_millis(),
        }
    }
}

/// Keyed local store for favorite products, ordered by recency.
///
/// Entries are held in insertion order; add-or-replace moves an entry to the
/// most-recent position. A file-backed store rewrites the whole file on each
/// mutation, which is acceptable for favorites-sized data.
pub struct FavoritesStore {
    path: Option<PathBuf>,
    entries: Vec<FavoriteProduct>,
}

impl FavoritesStore {
    /// Open a file-backed store, loading existing entries if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FavoritesError> {
        let path = path.into();
        let entries = if path.exists() {
            let bytes = fs::read(&path)?;
            serde_json::from_slice(&bytes)?
        } else {
            Vec::new()
        };
        debug!(path = %path.display(), count = entries.len(), "favorites store opened");
        Ok(Self {
            path: Some(path),
            entries,
        })
    }

    /// Create an ephemeral in-memory store.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: Vec::new(),
        }
    }

    /// Add or replace a favorite. Replacing restamps recency.
    pub fn add(&mut self, favorite: FavoriteProduct) -> Result<(), FavoritesError> {
        self.entries.retain(|e| e.id != favorite.id);
        self.entries.push(favorite);
        self.persist()
    }

    /// Remove a favorite by product id. Returns whether an entry was removed.
    pub fn remove(&mut self, id: &str) -> Result<bool, FavoritesError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() < before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Check whether a product id is favorited.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// All favorites, most recently saved first.
    pub fn all(&self) -> Vec<FavoriteProduct> {
        self.entries.iter().rev().cloned().collect()
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<(), FavoritesError> {
        if let Some(path) = &self.path {
            let bytes = serde_json::to_vec(&self.entries)?;
            fs::write(path, bytes)?;
        }
        Ok(())
    }
}

/// Get current Unix timestamp in milliseconds.
fn current_timestamp_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
