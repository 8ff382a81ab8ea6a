//! Server configuration module

use clap::Parser;

use windsor_app::{context::AppSettings, site::SiteUrl};

use crate::config::{
    db::DatabaseConfig,
    mail::MailConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    payments::PaymentsConfig,
    server::ServerRuntimeConfig,
    site::SiteConfig,
};

pub(crate) mod db;
pub(crate) mod mail;
pub(crate) mod observability;
pub(crate) mod payments;
pub(crate) mod server;
pub(crate) mod site;

/// Windsor JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "windsor-json", about = "Windsor storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Trace export and request timing settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Product store settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Payment provider settings.
    #[command(flatten)]
    pub payments: PaymentsConfig,

    /// Mail relay settings.
    #[command(flatten)]
    pub mail: MailConfig,

    /// Public site origin settings.
    #[command(flatten)]
    pub site: SiteConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Collaborator settings for the application context. Blank values
    /// count as unset.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            database_url: non_blank(self.database.database_url.as_deref()).map(str::to_owned),
            stripe: self.payments.to_stripe_config(),
            smtp: self.mail.to_smtp_config(),
            site_url: SiteUrl::resolve(
                self.site.site_url.as_deref(),
                self.site.vercel_url.as_deref(),
            ),
        }
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn parse(args: &[&str]) -> Result<ServerConfig, clap::Error> {
        ServerConfig::try_parse_from(std::iter::once("windsor-json").chain(args.iter().copied()))
    }

    #[test]
    fn blank_secrets_leave_collaborators_unconfigured() -> TestResult {
        let config = parse(&[
            "--database-url",
            " ",
            "--stripe-secret-key",
            "",
            "--gmail-email",
            "shop@example.com",
        ])?;

        let settings = config.app_settings();

        assert!(settings.database_url.is_none(), "blank database url should be unset");
        assert!(settings.stripe.is_none(), "blank stripe key should be unset");
        assert!(settings.smtp.is_none(), "mail needs both mailbox and password");

        Ok(())
    }

    #[test]
    fn observability_defaults_keep_export_off() -> TestResult {
        let config = parse(&[])?;

        assert!(!config.observability.otel_enabled, "trace export should be opt-in");
        assert_eq!(config.observability.otel_exporter_otlp_endpoint, "http://localhost:4317");
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn sample_ratio_is_pinned_into_range() -> TestResult {
        for (raw, expected) in [("1.5", 1.0), ("-0.2", 0.0), ("0.25", 0.25), ("NaN", 1.0)] {
            let arg = format!("--otel-trace-sample-ratio={raw}");
            let config = parse(&[arg.as_str()])?;

            assert!(
                (config.observability.sample_ratio() - expected).abs() < f64::EPSILON,
                "ratio {raw} should pin to {expected}"
            );
        }

        Ok(())
    }

    #[test]
    fn configured_collaborators_carry_overrides() -> TestResult {
        let config = parse(&[
            "--stripe-secret-key",
            "sk_test_123",
            "--stripe-api-base",
            "http://localhost:12111",
            "--gmail-email",
            "shop@example.com",
            "--gmail-password",
            "app-password",
            "--contact-recipient",
            "orders@example.com",
            "--site-url",
            "https://shop.example.com/",
        ])?;

        let settings = config.app_settings();

        let stripe = settings.stripe.ok_or("stripe should be configured")?;
        assert_eq!(stripe.api_base, "http://localhost:12111");
        assert_eq!(stripe.secret_key.as_str(), "sk_test_123");

        let smtp = settings.smtp.ok_or("smtp should be configured")?;
        assert_eq!(smtp.recipient, "orders@example.com");
        assert_eq!(smtp.relay, "smtp.gmail.com");

        assert_eq!(settings.site_url.as_str(), "https://shop.example.com");

        Ok(())
    }
}
