//! Hosted payment sessions.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::checkout::ValidatedLineItem;

pub mod errors;
pub mod stripe;

pub use errors::PaymentsError;
pub use stripe::{StripeClient, StripeConfig};

/// Everything the provider needs to open a hosted payment page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionRequest {
    pub line_items: Vec<ValidatedLineItem>,
    pub success_url: String,
    pub cancel_url: String,
}

/// A session created by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedSession {
    pub id: String,
    pub url: Option<String>,
}

#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a one-off payment session for the given line items.
    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> Result<HostedSession, PaymentsError>;
}
