//! Submit Contact Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    contact::errors::into_api_error, errors::ApiError, extensions::*,
    observability::record_contact_outcome, state::State,
};

/// Message returned once the notification has been handed to the relay.
const SENT_MESSAGE: &str = "Email sent successfully";

/// Submit Contact Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ContactResponse {
    /// Confirmation message
    pub message: String,
}

/// Submit Contact Handler
///
/// Relays a product-interest or custom-order enquiry, with optional base64
/// image attachments, to the shop inbox.
#[endpoint(tags("contact"), summary = "Submit Contact Form")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ContactResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let body = req.body_bytes(state.max_request_body_bytes).await?;

    state
        .app
        .contact
        .submit(&body)
        .await
        .map_err(into_api_error)?;

    record_contact_outcome("sent");

    Ok(Json(ContactResponse {
        message: SENT_MESSAGE.to_owned(),
    }))
}
