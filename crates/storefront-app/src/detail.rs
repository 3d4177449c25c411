//! Product detail screen: per-product load plus favorite toggling.

use std::sync::Arc;

use storefront_catalog::{CatalogClient, Product};
use storefront_favorites::{FavoriteProduct, FavoritesError, FavoritesStore};
use tracing::{debug, warn};

/// Observable state of the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// Fetch in flight.
    Loading,
    /// Fetch failed; carries a display-ready message.
    Error(String),
    /// Product loaded.
    Ready(Product),
}

/// Drives one product detail session.
///
/// The favorites store outlives any single screen, so it is passed into the
/// favorite operations rather than owned here.
pub struct DetailController<C: CatalogClient + ?Sized> {
    client: Arc<C>,
    product_id: String,
    view: DetailView,
}

impl<C: CatalogClient + ?Sized> DetailController<C> {
    /// Create a controller for the given product.
    pub fn new(client: Arc<C>, product_id: impl Into<String>) -> Self {
        Self {
            client,
            product_id: product_id.into(),
            view: DetailView::Loading,
        }
    }

    /// Fetch the product. Also serves as the explicit retry.
    pub async fn load(&mut self) {
        self.view = DetailView::Loading;
        match self.client.fetch_product(&self.product_id).await {
            Ok(product) => {
                debug!(id = %product.id, "product loaded");
                self.view = DetailView::Ready(product);
            }
            Err(e) => {
                warn!(id = %self.product_id, error = %e, "product load failed");
                self.view = DetailView::Error(e.display_message());
            }
        }
    }

    /// Explicit retry after a failed load.
    pub async fn retry(&mut self) {
        self.load().await;
    }

    /// Current view state.
    pub fn view(&self) -> &DetailView {
        &self.view
    }

    /// Whether this product is currently favorited.
    pub fn is_favorite(&self, favorites: &FavoritesStore) -> bool {
        favorites.contains(&self.product_id)
    }

    /// Toggle favorite membership for the loaded product.
    ///
    /// Returns the new membership. A no-op (`Ok(false)`) before the product
    /// has loaded, since there is nothing to denormalize into the store.
    pub fn toggle_favorite(
        &self,
        favorites: &mut FavoritesStore,
    ) -> Result<bool, FavoritesError> {
        let DetailView::Ready(product) = &self.view else {
            return Ok(false);
        };
        if favorites.contains(&product.id) {
            favorites.remove(&product.id)?;
            Ok(false)
        } else {
            favorites.add(FavoriteProduct::from_product(product))?;
            Ok(true)
        }
    }
}
