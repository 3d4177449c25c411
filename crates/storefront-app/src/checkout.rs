//! Checkout screen: single-product order form with simulated submission.

use std::sync::Arc;
use std::time::Duration;

use storefront_catalog::{CatalogClient, Product};
use thiserror::Error;
use tracing::{debug, warn};

use crate::location::LocationProvider;

/// Flat delivery fee added to every order.
pub const DELIVERY_FEE: f64 = 5.0;

/// Simulated submission latency.
const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    CashOnDelivery,
}

impl PaymentMethod {
    /// Human-readable name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// Errors raised when placing an order.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckoutError {
    /// Required form fields are missing.
    #[error("Checkout incomplete: missing {0}")]
    Incomplete(String),

    /// The product has not loaded, so there is nothing to order.
    #[error("Product not loaded")]
    ProductNotLoaded,
}

/// A successfully placed (simulated) order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    /// Generated order identifier.
    pub order_id: String,
    /// Product price plus delivery fee.
    pub total: f64,
    /// Delivery address as entered.
    pub address: String,
    /// Chosen payment method.
    pub payment_method: PaymentMethod,
}

/// Observable form state of the checkout screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutState {
    /// The product being ordered, once loaded.
    pub product: Option<Product>,
    /// Delivery address text.
    pub address: String,
    /// Chosen payment method.
    pub payment_method: Option<PaymentMethod>,
    /// Flat delivery fee.
    pub delivery_fee: f64,
    /// Location lookup in flight.
    pub loading_location: bool,
    /// Last location lookup failure, display-ready.
    pub location_error: Option<String>,
    /// Last product load failure, display-ready.
    pub error: Option<String>,
}

impl CheckoutState {
    fn new() -> Self {
        Self {
            product: None,
            address: String::new(),
            payment_method: None,
            delivery_fee: DELIVERY_FEE,
            loading_location: false,
            location_error: None,
            error: None,
        }
    }

    /// Order total: product price plus delivery fee, zero before load.
    pub fn total(&self) -> f64 {
        self.product
            .as_ref()
            .map(|p| p.price + self.delivery_fee)
            .unwrap_or(0.0)
    }

    /// Whether the form can be submitted.
    pub fn is_valid(&self) -> bool {
        !self.address.trim().is_empty() && self.payment_method.is_some()
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.payment_method.is_none() {
            missing.push("payment method");
        }
        missing
    }
}

/// Drives one checkout session for a single product.
pub struct CheckoutController<C: CatalogClient + ?Sized, L: LocationProvider + ?Sized> {
    client: Arc<C>,
    location: Arc<L>,
    product_id: String,
    state: CheckoutState,
}

impl<C: CatalogClient + ?Sized, L: LocationProvider + ?Sized> CheckoutController<C, L> {
    /// Create a controller for the given product.
    pub fn new(client: Arc<C>, location: Arc<L>, product_id: impl Into<String>) -> Self {
        Self {
            client,
            location,
            product_id: product_id.into(),
            state: CheckoutState::new(),
        }
    }

    /// Current form state.
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Fetch the product being ordered.
    pub async fn load_product(&mut self) {
        match self.client.fetch_product(&self.product_id).await {
            Ok(product) => {
                self.state.error = None;
                self.state.product = Some(product);
            }
            Err(e) => {
                warn!(id = %self.product_id, error = %e, "checkout product load failed");
                self.state.error = Some(e.display_message());
            }
        }
    }

    /// Update the delivery address.
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.state.address = address.into();
    }

    /// Choose a payment method.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.state.payment_method = Some(method);
    }

    /// Fill the address from the device location.
    ///
    /// Checks permission first; failures land in the `location_error` slot and
    /// never touch the address already entered.
    pub async fn use_current_location(&mut self) {
        if !self.location.has_permission() {
            self.state.location_error =
                Some(crate::location::LocationError::PermissionDenied.to_string());
            return;
        }

        self.state.loading_location = true;
        self.state.location_error = None;

        let location = Arc::clone(&self.location);
        let looked_up = async move {
            let point = location.current_location().await?;
            location.reverse_geocode(point).await
        }
        .await;

        self.state.loading_location = false;
        match looked_up {
            Ok(address) => {
                self.state.address = address.one_line();
            }
            Err(e) => {
                warn!(error = %e, "location lookup failed");
                self.state.location_error = Some(e.to_string());
            }
        }
    }

    /// Place the order.
    ///
    /// Submission is simulated: after validation the order is acknowledged
    /// with a generated id following a short delay. No backend order API
    /// exists for this catalog.
    pub async fn place_order(&mut self) -> Result<OrderConfirmation, CheckoutError> {
        let Some(product) = self.state.product.clone() else {
            return Err(CheckoutError::ProductNotLoaded);
        };
        if !self.state.is_valid() {
            return Err(CheckoutError::Incomplete(
                self.state.missing_fields().join(", "),
            ));
        }
        // is_valid guarantees a payment method is present.
        let payment_method = self
            .state
            .payment_method
            .ok_or(CheckoutError::Incomplete("payment method".to_string()))?;

        tokio::time::sleep(SUBMIT_DELAY).await;

        let confirmation = OrderConfirmation {
            order_id: generate_order_id(),
            total: product.price + self.state.delivery_fee,
            address: self.state.address.clone(),
            payment_method,
        };
        debug!(order_id = %confirmation.order_id, total = confirmation.total, "order placed");
        Ok(confirmation)
    }
}

/// Generate an order id from the clock and a process-wide counter.
fn generate_order_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("order_{:x}", timestamp ^ counter.rotate_left(32))
}
