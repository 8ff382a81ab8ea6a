//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    catalog::{
        errors::{Listing, into_api_error},
        responses::ProductResponse,
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Product Handler
#[endpoint(tags("catalog"), summary = "Get Product")]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .catalog
        .get_product(&slug.into_inner())
        .await
        .map_err(|error| into_api_error(error, Listing::Products))?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use windsor_app::domain::catalog::{CatalogServiceError, MockCatalogService};

    use crate::{
        errors::ErrorResponse,
        test_helpers::{catalog_service, make_product},
    };

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(catalog, Router::with_path("api/products/{slug}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_product() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_product()
            .once()
            .withf(|slug| slug == "lazy-susan")
            .return_once(|slug| Ok(make_product(slug)));

        let response: ProductResponse = TestClient::get("http://example.com/api/products/lazy-susan")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        assert_eq!(response.slug, "lazy-susan");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_product_returns_404() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_product()
            .once()
            .return_once(|_| Err(CatalogServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/api/products/nope")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "Product not found.");

        Ok(())
    }
}
