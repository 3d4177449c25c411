//! Favorites screen: recency-ordered listing over the durable store.

use storefront_favorites::{FavoriteProduct, FavoritesError, FavoritesStore};

/// Drives the favorites list screen. Owns the store for the session.
pub struct FavoritesController {
    store: FavoritesStore,
}

impl FavoritesController {
    /// Create a controller over an opened store.
    pub fn new(store: FavoritesStore) -> Self {
        Self { store }
    }

    /// All favorites, most recently saved first.
    pub fn list(&self) -> Vec<FavoriteProduct> {
        self.store.all()
    }

    /// Remove a favorite by product id.
    pub fn remove(&mut self, id: &str) -> Result<bool, FavoritesError> {
        self.store.remove(id)
    }

    /// Whether any favorites exist.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Hand the store back, e.g. to share it with another screen.
    pub fn into_store(self) -> FavoritesStore {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{Product, Rating};

    fn product(id: &str, title: &str) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            price: 5.0,
            description: "desc".to_string(),
            category: "home".to_string(),
            image: "https://example.com/p.png".to_string(),
            rating: Rating::default(),
        }
    }

    #[test]
    fn test_list_and_remove() {
        let mut store = FavoritesStore::in_memory();
        store
            .add(FavoriteProduct::from_product(&product("1", "Mug")))
            .unwrap();
        store
            .add(FavoriteProduct::from_product(&product("2", "Lamp")))
            .unwrap();

        let mut favorites = FavoritesController::new(store);
        let titles: Vec<String> = favorites.list().into_iter().map(|f| f.title).collect();
        assert_eq!(titles, vec!["Lamp", "Mug"]);

        assert!(favorites.remove("2").unwrap());
        assert_eq!(favorites.list().len(), 1);
        assert!(!favorites.is_empty());
    }
}
