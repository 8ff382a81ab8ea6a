//! Checkout Errors

use std::error::Error as _;

use tracing::{error, warn};

use windsor_app::domain::checkout::CheckoutError;

use crate::{errors::ApiError, observability::record_checkout_outcome};

pub(crate) fn into_api_error(error: CheckoutError) -> ApiError {
    record_checkout_outcome(error.kind());

    if error.is_client_error() {
        warn!(kind = error.kind(), "checkout rejected: {error}");

        return ApiError::bad_request(error.to_string());
    }

    match error.source() {
        Some(source) => error!(kind = error.kind(), "checkout failed: {error}: {source}"),
        None => error!(kind = error.kind(), "checkout failed: {error}"),
    }

    ApiError::internal(error.to_string())
}
