//! Contact Errors

use std::error::Error as _;

use tracing::{error, warn};

use windsor_app::domain::contact::ContactError;

use crate::{errors::ApiError, observability::record_contact_outcome};

pub(crate) fn into_api_error(error: ContactError) -> ApiError {
    record_contact_outcome(error.kind());

    if error.is_client_error() {
        warn!(kind = error.kind(), "contact submission rejected: {error}");

        return ApiError::bad_request(error.to_string());
    }

    match error.source() {
        Some(source) => error!(kind = error.kind(), "contact delivery failed: {error}: {source}"),
        None => error!(kind = error.kind(), "contact delivery failed: {error}"),
    }

    ApiError::internal(error.to_string())
}
