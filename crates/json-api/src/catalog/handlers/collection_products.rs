//! Collection Products Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    catalog::{
        errors::{Listing, into_api_error},
        responses::ProductsResponse,
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Collection Products Handler
///
/// Returns the products filed under a collection, ordered by name. An unknown
/// collection yields an empty list.
#[endpoint(tags("catalog"), summary = "List Collection Products")]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .catalog
        .list_products_by_collection(&slug.into_inner())
        .await
        .map_err(|error| into_api_error(error, Listing::Products))?;

    Ok(Json(products.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use windsor_app::domain::catalog::MockCatalogService;

    use crate::test_helpers::{catalog_service, make_product};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(
            catalog,
            Router::with_path("api/collections/{slug}/products").get(handler),
        )
    }

    #[tokio::test]
    async fn test_products_are_filtered_by_collection() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_products_by_collection()
            .once()
            .withf(|slug| slug == "kitchen-cabinets")
            .return_once(|_| Ok(vec![make_product("spice-rack")]));

        let response: ProductsResponse =
            TestClient::get("http://example.com/api/collections/kitchen-cabinets/products")
                .send(&make_service(catalog))
                .await
                .take_json()
                .await?;

        assert_eq!(response.products.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_collection_yields_empty_list() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_products_by_collection()
            .once()
            .return_once(|_| Ok(vec![]));

        let response: ProductsResponse =
            TestClient::get("http://example.com/api/collections/ghost/products")
                .send(&make_service(catalog))
                .await
                .take_json()
                .await?;

        assert!(response.products.is_empty());

        Ok(())
    }
}
