//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    catalog::{
        errors::{Listing, into_api_error},
        responses::ProductsResponse,
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Product Index Handler
///
/// Returns every product, ordered by name.
#[endpoint(tags("catalog"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .catalog
        .list_products()
        .await
        .map_err(|error| into_api_error(error, Listing::Products))?;

    Ok(Json(products.into()))
}
