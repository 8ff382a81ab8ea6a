//! Checkout service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    domain::{
        catalog::{CatalogService, CatalogServiceError},
        checkout::{
            cart::{distinct_slugs, parse_cart},
            errors::CheckoutError,
            line_items::build_line_items,
        },
    },
    payments::{CheckoutSessionRequest, PaymentGateway},
    site::SiteUrl,
};

/// Where to send the shopper to pay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRedirect {
    /// Payment provider session id.
    pub session_id: String,
    /// Hosted payment page to send the shopper to.
    pub url: String,
}

/// Validates carts against the product store before opening a payment session.
#[derive(Clone)]
pub struct StoreCheckoutService {
    catalog: Arc<dyn CatalogService>,
    payments: Option<Arc<dyn PaymentGateway>>,
    site: SiteUrl,
}

impl std::fmt::Debug for StoreCheckoutService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCheckoutService")
            .field("payments_configured", &self.payments.is_some())
            .field("site", &self.site)
            .finish_non_exhaustive()
    }
}

impl StoreCheckoutService {
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogService>,
        payments: Option<Arc<dyn PaymentGateway>>,
        site: SiteUrl,
    ) -> Self {
        Self {
            catalog,
            payments,
            site,
        }
    }
}

#[async_trait]
impl CheckoutService for StoreCheckoutService {
    fn is_configured(&self) -> bool {
        self.payments.is_some()
    }

    #[tracing::instrument(
        name = "checkout.create_session",
        skip(self, body),
        fields(body_bytes = body.len(), lines = tracing::field::Empty),
        err(Display)
    )]
    async fn create_session(&self, body: &[u8]) -> Result<CheckoutRedirect, CheckoutError> {
        let payments = self
            .payments
            .as_ref()
            .ok_or(CheckoutError::PaymentsNotConfigured)?;

        let lines = parse_cart(body)?;

        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        tracing::Span::current().record("lines", lines.len());

        let distinct = distinct_slugs(&lines);

        let records = self
            .catalog
            .find_purchase_records(&distinct)
            .await
            .map_err(|error| match error {
                CatalogServiceError::NotConfigured => CheckoutError::StoreNotConfigured,
                other => CheckoutError::StoreUnavailable(other),
            })?;

        let line_items = build_line_items(&lines, &distinct, &records)?;

        let session = payments
            .create_checkout_session(CheckoutSessionRequest {
                line_items,
                success_url: self.site.checkout_success_url(),
                cancel_url: self.site.checkout_cancel_url(),
            })
            .await
            .map_err(|error| {
                warn!(error = %error, "payment provider rejected checkout session");
                CheckoutError::SessionFailed(error)
            })?;

        let Some(url) = session.url else {
            return Err(CheckoutError::MissingSessionUrl);
        };

        info!(session_id = %session.id, "checkout session created");

        Ok(CheckoutRedirect {
            session_id: session.id,
            url,
        })
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Whether a payment provider is wired up.
    fn is_configured(&self) -> bool;

    /// Validate a raw cart body and open a hosted payment session for it.
    async fn create_session(&self, body: &[u8]) -> Result<CheckoutRedirect, CheckoutError>;
}
