//! Payments Config

use clap::Args;

use windsor_app::payments::{
    StripeConfig,
    stripe::{DEFAULT_API_BASE, DEFAULT_API_VERSION},
};

use super::non_blank;

/// Stripe settings.
#[derive(Debug, Args)]
pub struct PaymentsConfig {
    /// Stripe secret API key
    #[arg(long, env = "STRIPE_SECRET_KEY", hide_env_values = true)]
    pub stripe_secret_key: Option<String>,

    /// Stripe API origin
    #[arg(long, env = "STRIPE_API_BASE", default_value = DEFAULT_API_BASE)]
    pub stripe_api_base: String,

    /// Stripe API version header
    #[arg(long, env = "STRIPE_API_VERSION", default_value = DEFAULT_API_VERSION)]
    pub stripe_api_version: String,
}

impl PaymentsConfig {
    /// Stripe client settings, or `None` when no secret key is set.
    pub(crate) fn to_stripe_config(&self) -> Option<StripeConfig> {
        let secret_key = non_blank(self.stripe_secret_key.as_deref())?;

        Some(StripeConfig {
            api_base: self.stripe_api_base.clone(),
            api_version: self.stripe_api_version.clone(),
            ..StripeConfig::new(secret_key)
        })
    }
}
