//! Public site origin used to build payment provider callback URLs.

/// Origin used when neither an explicit override nor a deployment host is set.
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Placeholder the payment provider substitutes with the session id.
pub const CHECKOUT_SESSION_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Resolved site origin without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(String);

impl SiteUrl {
    /// Resolve the origin: explicit override, else the inferred deployment
    /// host (served over https), else [`DEFAULT_SITE_URL`]. Blank values count
    /// as unset.
    #[must_use]
    pub fn resolve(explicit: Option<&str>, deployment_host: Option<&str>) -> Self {
        if let Some(explicit) = non_blank(explicit) {
            return Self::new(explicit);
        }

        if let Some(host) = non_blank(deployment_host) {
            return Self::new(&format!("https://{host}"));
        }

        Self::new(DEFAULT_SITE_URL)
    }

    fn new(origin: &str) -> Self {
        Self(origin.trim_end_matches('/').to_owned())
    }

    /// The origin as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Where the payment provider sends the shopper after paying.
    #[must_use]
    pub fn checkout_success_url(&self) -> String {
        format!(
            "{}/checkout/success?session_id={CHECKOUT_SESSION_PLACEHOLDER}",
            self.0
        )
    }

    /// Where the payment provider sends the shopper after abandoning payment.
    #[must_use]
    pub fn checkout_cancel_url(&self) -> String {
        format!("{}/cart", self.0)
    }
}

impl Default for SiteUrl {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_URL)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
