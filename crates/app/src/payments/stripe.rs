//! Stripe Checkout client.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::payments::{CheckoutSessionRequest, HostedSession, PaymentGateway, PaymentsError};

/// Default Stripe API origin.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// API version pinned on every request.
pub const DEFAULT_API_VERSION: &str = "2025-02-24.acacia";

/// Configuration for talking to Stripe.
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret API key, sent as a bearer token.
    pub secret_key: Zeroizing<String>,

    /// API origin, e.g. `"https://api.stripe.com"`.
    pub api_base: String,

    /// Value of the `Stripe-Version` header.
    pub api_version: String,
}

impl StripeConfig {
    #[must_use]
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: Zeroizing::new(secret_key.into()),
            api_base: DEFAULT_API_BASE.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
        }
    }
}

impl fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"[redacted]")
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .finish()
    }
}

/// HTTP client for Stripe Checkout sessions.
#[derive(Debug, Clone)]
pub struct StripeClient {
    config: StripeConfig,
    http: Client,
}

impl StripeClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeClient {
    #[tracing::instrument(
        name = "payments.stripe.create_checkout_session",
        skip(self, request),
        fields(line_items = request.line_items.len()),
        err
    )]
    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> Result<HostedSession, PaymentsError> {
        let url = format!(
            "{}/v1/checkout/sessions",
            self.config.api_base.trim_end_matches('/')
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.config.secret_key.as_str())
            .header("Stripe-Version", &self.config.api_version)
            .form(&session_form_params(&request))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PaymentsError::UnexpectedResponse(format!(
                "session request failed with status {status}: {text}"
            )));
        }

        let parsed: SessionResponse = response.json().await?;

        Ok(HostedSession {
            id: parsed.id,
            url: parsed.url.filter(|url| !url.is_empty()),
        })
    }
}

/// Form fields for a one-off payment session, line items in order.
pub(crate) fn session_form_params(request: &CheckoutSessionRequest) -> Vec<(String, String)> {
    let mut params = Vec::with_capacity(3 + request.line_items.len() * 2);

    params.push(("mode".to_owned(), "payment".to_owned()));
    params.push(("success_url".to_owned(), request.success_url.clone()));
    params.push(("cancel_url".to_owned(), request.cancel_url.clone()));

    for (index, item) in request.line_items.iter().enumerate() {
        params.push((
            format!("line_items[{index}][price]"),
            item.price_reference().to_owned(),
        ));
        params.push((
            format!("line_items[{index}][quantity]"),
            item.quantity().to_string(),
        ));
    }

    params
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    url: Option<String>,
}
