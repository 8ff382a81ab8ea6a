//! Catalog response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use windsor_app::domain::catalog::models::{Collection, Product};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// URL-safe product key
    pub slug: String,

    pub name: String,

    pub category: Option<String>,

    pub description: Option<String>,

    /// Marketing bullet points
    pub features: Vec<String>,

    /// Free-form specification table
    pub specifications: Value,

    /// Display image, with static overrides applied
    pub image_url: Option<String>,

    /// Slug of the owning collection
    pub collection_slug: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.uuid.into(),
            slug: product.slug,
            name: product.name,
            category: product.category,
            description: product.description,
            features: product.features,
            specifications: product.specifications,
            image_url: product.image_url,
            collection_slug: product.collection_slug,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

impl From<Vec<Product>> for ProductsResponse {
    fn from(products: Vec<Product>) -> Self {
        ProductsResponse {
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CollectionResponse {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,

    /// Position on the collections page, lowest first
    pub sort_order: i32,
}

impl From<Collection> for CollectionResponse {
    fn from(collection: Collection) -> Self {
        CollectionResponse {
            id: collection.uuid.into(),
            slug: collection.slug,
            name: collection.name,
            category: collection.category,
            description: collection.description,
            image_url: collection.image_url,
            sort_order: collection.sort_order,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CollectionsResponse {
    /// The list of collections
    pub collections: Vec<CollectionResponse>,
}
