//! Catalog browsing view-state machine.
//!
//! Split per the redesign into a pure, synchronous state holder
//! ([`CatalogState`]) driven by discrete commands, and an async driver
//! ([`HomeController`]) that owns the catalog client and performs the
//! two-way fan-out fetch. The split keeps every transition and invariant
//! testable without any async machinery.

use std::sync::Arc;

use futures::try_join;
use storefront_catalog::{CatalogClient, Product};
use tracing::{debug, warn};

/// The (search text, selected category) pair driving visible-product
/// derivation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title or description.
    /// Empty means "no text filter".
    pub search_text: String,
    /// Category filter; `None` means "all categories".
    pub selected_category: Option<String>,
}

impl FilterCriteria {
    /// Whether a product satisfies both halves of the criteria.
    pub fn matches(&self, product: &Product) -> bool {
        product.matches_search(&self.search_text)
            && product.in_category(self.selected_category.as_deref())
    }
}

/// Externally observable state of the catalog screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Fetch in flight, no data yet.
    Loading,
    /// Fetch failed; carries a display-ready message.
    Error(String),
    /// Data available.
    Ready {
        /// Server-provided category list, unfiltered by search text.
        categories: Vec<String>,
        /// Snapshot subset satisfying the current filter, in snapshot order.
        visible_products: Vec<Product>,
        /// Active category filter (`None` = "All").
        selected_category: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Loading,
    Error(String),
    Ready,
}

/// Pure state holder for one catalog browsing session.
///
/// Owns the catalog snapshot, the active filter criteria, and the
/// load/error lifecycle. Construction enters `Loading` immediately; the
/// machine lives for the session and has no terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    snapshot: Vec<Product>,
    categories: Vec<String>,
    filter: FilterCriteria,
    phase: Phase,
    generation: u64,
}

impl CatalogState {
    /// Create a fresh session in `Loading`.
    pub fn new() -> Self {
        Self {
            snapshot: Vec::new(),
            categories: Vec::new(),
            filter: FilterCriteria::default(),
            phase: Phase::Loading,
            generation: 0,
        }
    }

    /// Begin a load (initial fetch or retry). Enters `Loading` and returns the
    /// generation token the eventual completion must present.
    ///
    /// Initiating a new load supersedes any in-flight one: the older
    /// generation's completion will be discarded rather than applied.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.generation
    }

    /// Apply a successful fan-out completion.
    ///
    /// Replaces the snapshot wholesale and recomputes the visible set against
    /// the CURRENT filter criteria, so a retry preserves any search text
    /// already entered. Returns `false` (and changes nothing) when the
    /// completion is stale.
    pub fn apply_success(
        &mut self,
        generation: u64,
        categories: Vec<String>,
        products: Vec<Product>,
    ) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "discarding stale load result");
            return false;
        }
        self.categories = categories;
        self.snapshot = products;
        self.phase = Phase::Ready;
        true
    }

    /// Apply a failed fan-out completion.
    ///
    /// Either fetch failing lands here: there is no partial `Ready` state, and
    /// the successful half of the pair is discarded along with the previous
    /// snapshot. Returns `false` when the completion is stale.
    pub fn apply_failure(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "discarding stale load failure");
            return false;
        }
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Unknown error occurred".to_string()
        } else {
            message
        };
        self.snapshot.clear();
        self.categories.clear();
        self.phase = Phase::Error(message);
        true
    }

    /// Record new search text and recompute synchronously.
    ///
    /// No fetch, no state transition. Text entered while `Loading` or `Error`
    /// is still recorded and takes effect once data arrives.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
    }

    /// Record a category selection (`None` = "All") and recompute
    /// synchronously. An unknown category yields an empty visible set.
    pub fn select_category(&mut self, category: Option<String>) {
        self.filter.selected_category = category;
    }

    /// The active filter criteria.
    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    /// The snapshot subset satisfying the current criteria, in snapshot order.
    ///
    /// A full linear scan on each call; no memoized index.
    pub fn visible_products(&self) -> Vec<Product> {
        self.snapshot
            .iter()
            .filter(|p| self.filter.matches(p))
            .cloned()
            .collect()
    }

    /// Derive the externally observable view state.
    pub fn view(&self) -> ViewState {
        match &self.phase {
            Phase::Loading => ViewState::Loading,
            Phase::Error(message) => ViewState::Error(message.clone()),
            Phase::Ready => ViewState::Ready {
                categories: self.categories.clone(),
                visible_products: self.visible_products(),
                selected_category: self.filter.selected_category.clone(),
            },
        }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Async driver for the catalog screen.
///
/// All mutating operations originate from one caller; `&mut self` serializes
/// them. Dropping the controller (or the future returned by [`load`]) before
/// the fan-out resolves simply discards the in-flight work.
///
/// [`load`]: HomeController::load
pub struct HomeController<C: CatalogClient + ?Sized> {
    client: Arc<C>,
    state: CatalogState,
}

impl<C: CatalogClient + ?Sized> HomeController<C> {
    /// Create a controller for a fresh session. The state starts in `Loading`;
    /// the caller drives the initial fetch with [`load`](Self::load).
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            state: CatalogState::new(),
        }
    }

    /// Initial fetch and explicit retry.
    ///
    /// Issues the categories and all-products fetches concurrently. Both must
    /// succeed for `Ready`; the first failure short-circuits the join and the
    /// machine enters `Error` without waiting on the sibling.
    pub async fn load(&mut self) {
        let generation = self.state.begin_load();
        let result = try_join!(
            self.client.fetch_categories(),
            self.client.fetch_all_products()
        );
        match result {
            Ok((categories, products)) => {
                debug!(
                    categories = categories.len(),
                    products = products.len(),
                    "catalog load complete"
                );
                self.state.apply_success(generation, categories, products);
            }
            Err(e) => {
                warn!(error = %e, "catalog load failed");
                self.state.apply_failure(generation, e.display_message());
            }
        }
    }

    /// Explicit retry; identical to a fresh load and never automatic.
    pub async fn retry(&mut self) {
        self.load().await;
    }

    /// Update the search text; synchronous, non-blocking.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.set_search_text(text);
    }

    /// Select a category (`None` = "All"); synchronous, non-blocking.
    pub fn select_category(&mut self, category: Option<String>) {
        self.state.select_category(category);
    }

    /// The current view state.
    pub fn view(&self) -> ViewState {
        self.state.view()
    }

    /// Direct access to the underlying state machine.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }
}
