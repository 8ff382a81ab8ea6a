//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use serde_json::json;
use uuid::Uuid;

use windsor_app::{
    context::AppContext,
    domain::{
        catalog::{
            MockCatalogService,
            models::{Collection, Product},
        },
        checkout::MockCheckoutService,
        contact::MockContactService,
    },
};

use crate::state::{DEFAULT_MAX_REQUEST_BODY_BYTES, State};

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_products().never();
    catalog.expect_get_product().never();
    catalog.expect_list_products_by_collection().never();
    catalog.expect_list_collections().never();
    catalog.expect_get_collection().never();
    catalog.expect_find_purchase_records().never();

    catalog
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_create_session().never();

    checkout
}

fn strict_contact_mock() -> MockContactService {
    let mut contact = MockContactService::new();

    contact.expect_submit().never();

    contact
}

pub(crate) fn state_with(
    catalog: MockCatalogService,
    checkout: MockCheckoutService,
    contact: MockContactService,
) -> Arc<State> {
    State::from_app_context(
        AppContext {
            catalog: Arc::new(catalog),
            checkout: Arc::new(checkout),
            contact: Arc::new(contact),
        },
        DEFAULT_MAX_REQUEST_BODY_BYTES,
    )
}

fn service_with(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    service_with(
        state_with(catalog, strict_checkout_mock(), strict_contact_mock()),
        route,
    )
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    service_with(
        state_with(strict_catalog_mock(), checkout, strict_contact_mock()),
        route,
    )
}

pub(crate) fn contact_service(contact: MockContactService, route: Router) -> Service {
    service_with(
        state_with(strict_catalog_mock(), strict_checkout_mock(), contact),
        route,
    )
}

pub(crate) fn make_product(slug: &str) -> Product {
    Product {
        uuid: Uuid::now_v7().into(),
        slug: slug.to_owned(),
        name: slug.replace('-', " "),
        category: Some("Cabinets".to_owned()),
        description: None,
        features: vec!["Soft-close hinges".to_owned()],
        specifications: json!({ "width": "36in" }),
        image_url: None,
        collection_slug: Some("kitchen-cabinets".to_owned()),
    }
}

pub(crate) fn make_collection(slug: &str, sort_order: i32) -> Collection {
    Collection {
        uuid: Uuid::now_v7().into(),
        slug: slug.to_owned(),
        name: slug.replace('-', " "),
        category: "Kitchen".to_owned(),
        description: String::new(),
        image_url: None,
        sort_order,
    }
}
