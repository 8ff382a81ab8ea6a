//! Checkout errors.

use thiserror::Error;

use crate::{domain::catalog::CatalogServiceError, payments::PaymentsError};

/// Reasons a checkout session could not be created. The display text of each
/// variant is safe to show to shoppers.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Payment provider is not configured (missing STRIPE_SECRET_KEY).")]
    PaymentsNotConfigured,

    #[error("Invalid JSON body.")]
    InvalidJson,

    #[error("Cart is empty.")]
    EmptyCart,

    #[error("Product store is not configured (missing DATABASE_URL).")]
    StoreNotConfigured,

    #[error("Failed to load products.")]
    StoreUnavailable(#[source] CatalogServiceError),

    #[error("Unknown products in cart: {}", .0.join(", "))]
    UnknownProducts(Vec<String>),

    #[error("Product not purchasable: {0}")]
    NotPurchasable(String),

    #[error("Missing/invalid price reference for: {0}")]
    InvalidPriceReference(String),

    #[error("Failed to create checkout session.")]
    SessionFailed(#[source] PaymentsError),

    #[error("Payment provider did not return a checkout URL.")]
    MissingSessionUrl,
}

impl CheckoutError {
    /// Whether the shopper can fix this by changing the request.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidJson
                | Self::EmptyCart
                | Self::UnknownProducts(_)
                | Self::NotPurchasable(_)
                | Self::InvalidPriceReference(_)
        )
    }

    /// Short stable label for logs and metrics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PaymentsNotConfigured => "payments_not_configured",
            Self::InvalidJson => "invalid_json",
            Self::EmptyCart => "empty_cart",
            Self::StoreNotConfigured => "store_not_configured",
            Self::StoreUnavailable(_) => "store_unavailable",
            Self::UnknownProducts(_) => "unknown_products",
            Self::NotPurchasable(_) => "not_purchasable",
            Self::InvalidPriceReference(_) => "invalid_price_reference",
            Self::SessionFailed(_) => "session_failed",
            Self::MissingSessionUrl => "missing_session_url",
        }
    }
}
