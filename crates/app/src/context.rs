//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    database,
    domain::{
        catalog::{CatalogService, PgCatalogService},
        checkout::{CheckoutService, StoreCheckoutService},
        contact::{ContactService, MailContactService},
    },
    mail::{MailTransport, SmtpConfig, SmtpMailer, smtp::DEFAULT_FROM_NAME},
    payments::{PaymentGateway, StripeClient, StripeConfig},
    site::SiteUrl,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build mail transport")]
    Mail(#[source] lettre::transport::smtp::Error),
}

/// Collaborator settings. Each `None` leaves that collaborator unconfigured
/// and its routes answer with a configuration error.
#[derive(Debug, Clone, Default)]
pub struct AppSettings {
    pub database_url: Option<String>,
    pub stripe: Option<StripeConfig>,
    pub smtp: Option<SmtpConfig>,
    pub site_url: SiteUrl,
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub contact: Arc<dyn ContactService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("catalog_configured", &self.catalog.is_configured())
            .field("checkout_configured", &self.checkout.is_configured())
            .field("contact_configured", &self.contact.is_configured())
            .finish()
    }
}

impl AppContext {
    /// Build application context from collaborator settings.
    ///
    /// No network connection is made here. A database URL that cannot be
    /// parsed leaves the product store unconfigured.
    ///
    /// # Errors
    ///
    /// Returns an error when the mail transport cannot be built.
    pub fn from_settings(settings: AppSettings) -> Result<Self, AppInitError> {
        let catalog: Arc<dyn CatalogService> = match settings.database_url.as_deref() {
            Some(url) => match database::connect_lazy(url) {
                Ok(pool) => Arc::new(PgCatalogService::new(pool)),
                Err(error) => {
                    warn!(error = %error, "invalid DATABASE_URL, product store disabled");
                    Arc::new(PgCatalogService::unconfigured())
                }
            },
            None => Arc::new(PgCatalogService::unconfigured()),
        };

        let payments = settings
            .stripe
            .map(|config| Arc::new(StripeClient::new(config)) as Arc<dyn PaymentGateway>);

        let from_name = settings
            .smtp
            .as_ref()
            .map_or_else(|| DEFAULT_FROM_NAME.to_owned(), |config| config.from_name.clone());

        let transport = settings
            .smtp
            .map(SmtpMailer::new)
            .transpose()
            .map_err(AppInitError::Mail)?
            .map(|mailer| Arc::new(mailer) as Arc<dyn MailTransport>);

        let context = Self {
            checkout: Arc::new(StoreCheckoutService::new(
                catalog.clone(),
                payments,
                settings.site_url,
            )),
            contact: Arc::new(MailContactService::new(transport, from_name)),
            catalog,
        };

        info!(
            catalog = context.catalog.is_configured(),
            checkout = context.checkout.is_configured(),
            contact = context.contact.is_configured(),
            "application context ready"
        );

        Ok(context)
    }
}
