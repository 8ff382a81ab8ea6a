//! Catalog Errors

use std::error::Error as _;

use tracing::error;

use windsor_app::domain::catalog::CatalogServiceError;

use crate::errors::ApiError;

const NOT_CONFIGURED: &str = "Product store is not configured (missing DATABASE_URL).";

/// Which listing a failed catalog lookup was serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Listing {
    Products,
    Collections,
}

impl Listing {
    fn not_found(self) -> &'static str {
        match self {
            Listing::Products => "Product not found.",
            Listing::Collections => "Collection not found.",
        }
    }

    fn load_failed(self) -> &'static str {
        match self {
            Listing::Products => "Failed to load products.",
            Listing::Collections => "Failed to load collections.",
        }
    }
}

pub(crate) fn into_api_error(error: CatalogServiceError, listing: Listing) -> ApiError {
    match error {
        CatalogServiceError::NotFound => ApiError::not_found(listing.not_found()),
        CatalogServiceError::NotConfigured => {
            error!("catalog request without a product store");

            ApiError::internal(NOT_CONFIGURED)
        }
        CatalogServiceError::Sql(_) => {
            match error.source() {
                Some(source) => error!(?listing, "catalog query failed: {source}"),
                None => error!(?listing, "catalog query failed"),
            }

            ApiError::internal(listing.load_failed())
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn not_found_names_the_listing() {
        let product = into_api_error(CatalogServiceError::NotFound, Listing::Products);
        let collection = into_api_error(CatalogServiceError::NotFound, Listing::Collections);

        assert_eq!(product.status, StatusCode::NOT_FOUND);
        assert_eq!(product.message, "Product not found.");
        assert_eq!(collection.message, "Collection not found.");
    }

    #[test]
    fn storage_failures_are_500() {
        let api = into_api_error(
            CatalogServiceError::Sql(sqlx::Error::PoolTimedOut),
            Listing::Collections,
        );

        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "Failed to load collections.");
    }

    #[test]
    fn missing_store_is_500() {
        let api = into_api_error(CatalogServiceError::NotConfigured, Listing::Products);

        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, NOT_CONFIGURED);
    }
}
