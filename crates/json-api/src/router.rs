//! App Router

use salvo::Router;

use crate::{catalog, checkout, contact};

pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("checkout").post(checkout::create::handler))
        .push(Router::with_path("contact").post(contact::create::handler))
        .push(
            Router::with_path("products")
                .get(catalog::list_products::handler)
                .push(Router::with_path("{slug}").get(catalog::get_product::handler)),
        )
        .push(
            Router::with_path("collections")
                .get(catalog::list_collections::handler)
                .push(
                    Router::with_path("{slug}")
                        .get(catalog::get_collection::handler)
                        .push(
                            Router::with_path("products")
                                .get(catalog::collection_products::handler),
                        ),
                ),
        )
}
