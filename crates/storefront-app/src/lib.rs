//! View-state controllers for the Storefront client.
//!
//! Each screen session owns one controller. A controller composes collaborator
//! results (catalog client, favorites store, identity/profile service, location
//! provider) into an externally observable view state, and is driven by
//! discrete commands from a single caller:
//!
//! - **Home** — catalog browsing: concurrent categories + products fetch,
//!   search/category filtering, load/error/retry lifecycle. The view-state
//!   machine with the real transition logic.
//! - **Detail** — per-product load plus favorite toggling.
//! - **Checkout** — single-product order form with location-assisted address
//!   entry and a simulated submission.
//! - **Profile** — profile document CRUD with staged picture upload.
//! - **Favorites** — recency-ordered favorites listing.

pub mod checkout;
pub mod detail;
pub mod favorites;
pub mod home;
pub mod location;
pub mod profile;

pub use home::{CatalogState, FilterCriteria, HomeController, ViewState};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::checkout::{
        CheckoutController, CheckoutError, CheckoutState, OrderConfirmation, PaymentMethod,
    };
    pub use crate::detail::{DetailController, DetailView};
    pub use crate::favorites::FavoritesController;
    pub use crate::home::{CatalogState, FilterCriteria, HomeController, ViewState};
    pub use crate::location::{GeoPoint, LocationError, LocationProvider, PostalAddress};
    pub use crate::profile::{ProfileController, ProfileState};
}
