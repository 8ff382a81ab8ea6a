//! Collection Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    catalog::{
        errors::{Listing, into_api_error},
        responses::CollectionsResponse,
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Collection Index Handler
///
/// Returns every collection in display order.
#[endpoint(tags("catalog"), summary = "List Collections")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CollectionsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let collections = state
        .app
        .catalog
        .list_collections()
        .await
        .map_err(|error| into_api_error(error, Listing::Collections))?;

    Ok(Json(CollectionsResponse {
        collections: collections.into_iter().map(Into::into).collect(),
    }))
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
        catalog_service(catalog, Router::with_path("api/collections").get(handler))
    }

    #[tokio::test]
    async fn test_index_keeps_store_order() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog.expect_list_collections().once().return_once(|| {
            Ok(vec![
                make_collection("kitchen-cabinets", 1),
                make_collection("quartz-countertops", 2),
            ])
        });

        let response: CollectionsResponse = TestClient::get("http://example.com/api/collections")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        let order: Vec<_> = response
            .collections
            .iter()
            .map(|c| (c.slug.as_str(), c.sort_order))
            .collect();

        assert_eq!(order, [("kitchen-cabinets", 1), ("quartz-countertops", 2)]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_query_failure_returns_500() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_collections()
            .once()
            .return_once(|| Err(CatalogServiceError::Sql(sqlx::Error::PoolClosed)));

        let mut res = TestClient::get("http://example.com/api/collections")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "Failed to load collections.");

        Ok(())
    }
}
