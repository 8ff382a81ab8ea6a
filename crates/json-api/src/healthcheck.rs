//! Windsor JSON API Healthcheck Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Whether a product store is wired up
    pub catalog: bool,

    /// Whether a payment provider is wired up
    pub checkout: bool,

    /// Whether a mail relay is wired up
    pub contact: bool,
}

/// Healthcheck handler
///
/// Always `ok` while the process serves; the flags report which
/// collaborators were configured at startup.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(HealthResponse {
        status: "ok".to_owned(),
        catalog: state.app.catalog.is_configured(),
        checkout: state.app.checkout.is_configured(),
        contact: state.app.contact.is_configured(),
    }))
}
