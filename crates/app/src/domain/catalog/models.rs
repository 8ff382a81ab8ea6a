//! Catalog Models

use serde_json::Value;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Collection UUID
pub type CollectionUuid = TypedUuid<Collection>;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product UUID
    pub uuid: ProductUuid,
    /// URL key, unique across products.
    pub slug: String,
    /// Display name
    pub name: String,
    /// Catalog category, e.g. `vanities`.
    pub category: Option<String>,
    /// Long-form description
    pub description: Option<String>,
    /// Bullet-point features in display order.
    pub features: Vec<String>,
    /// Free-form specification table as stored.
    pub specifications: Value,
    /// Image URL, with the local override applied when one exists.
    pub image_url: Option<String>,
    /// Slug of the owning collection, if any.
    pub collection_slug: Option<String>,
}

/// Collection Model
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub uuid: CollectionUuid,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,
    pub sort_order: i32,
}

/// Purchasability and pricing of a single product, as the store sees it now.
///
/// This is the only source a checkout line item may take its price from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPurchaseRecord {
    /// Product slug the record was looked up by.
    pub slug: String,
    /// `false` when the store has no value.
    pub is_purchasable: bool,
    /// Payment provider price id, unvalidated.
    pub price_reference: Option<String>,
}
