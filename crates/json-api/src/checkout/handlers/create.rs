//! Create Checkout Session Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    checkout::errors::into_api_error, errors::ApiError, extensions::*,
    observability::record_checkout_outcome, state::State,
};

/// Create Checkout Session Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// Hosted payment page to redirect the shopper to
    pub url: String,
}

/// Create Checkout Session Handler
///
/// Accepts `{ "items": [{ "slug": string, "quantity": number }] }`. Prices are
/// always taken from the product store; any price sent by the client is
/// ignored.
#[endpoint(tags("checkout"), summary = "Create Checkout Session")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let body = req.body_bytes(state.max_request_body_bytes).await?;

    let redirect = state
        .app
        .checkout
        .create_session(&body)
        .await
        .map_err(into_api_error)?;

    record_checkout_outcome("created");

    Ok(Json(CheckoutResponse { url: redirect.url }))
}
