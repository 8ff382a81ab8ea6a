//! Get Collection Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    catalog::{
        errors::{Listing, into_api_error},
        responses::CollectionResponse,
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Collection Handler
#[endpoint(tags("catalog"), summary = "Get Collection")]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CollectionResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let collection = state
        .app
        .catalog
        .get_collection(&slug.into_inner())
        .await
        .map_err(|error| into_api_error(error, Listing::Collections))?;

    Ok(Json(collection.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use windsor_app::domain::catalog::{CatalogServiceError, MockCatalogService};

    use crate::{
        errors::ErrorResponse,
        test_helpers::{catalog_service, make_collection},
    };

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(catalog, Router::with_path("api/collections/{slug}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_collection() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_collection()
            .once()
            .withf(|slug| slug == "closets-wardrobes")
            .return_once(|slug| Ok(make_collection(slug, 3)));

        let response: CollectionResponse =
            TestClient::get("http://example.com/api/collections/closets-wardrobes")
                .send(&make_service(catalog))
                .await
                .take_json()
                .await?;

        assert_eq!(response.slug, "closets-wardrobes");
        assert_eq!(response.sort_order, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_collection_returns_404() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_collection()
            .once()
            .return_once(|_| Err(CatalogServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/api/collections/nope")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "Collection not found.");

        Ok(())
    }
}
