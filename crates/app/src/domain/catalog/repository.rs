//! Catalog Repository

use serde_json::{Map, Value};
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::catalog::{
    images::resolve_image_url,
    models::{Collection, CollectionUuid, Product, ProductPurchaseRecord, ProductUuid},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LIST_PRODUCTS_BY_COLLECTION_SQL: &str = include_str!("sql/list_products_by_collection.sql");
const LIST_COLLECTIONS_SQL: &str = include_str!("sql/list_collections.sql");
const GET_COLLECTION_SQL: &str = include_str!("sql/get_collection.sql");
const FIND_PURCHASE_RECORDS_SQL: &str = include_str!("sql/find_purchase_records.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCatalogRepository;

impl PgCatalogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(&self, pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        pool: &PgPool,
        slug: &str,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn list_products_by_collection(
        &self,
        pool: &PgPool,
        collection_slug: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_BY_COLLECTION_SQL)
            .bind(collection_slug)
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn list_collections(
        &self,
        pool: &PgPool,
    ) -> Result<Vec<Collection>, sqlx::Error> {
        query_as::<Postgres, Collection>(LIST_COLLECTIONS_SQL)
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn get_collection(
        &self,
        pool: &PgPool,
        slug: &str,
    ) -> Result<Collection, sqlx::Error> {
        query_as::<Postgres, Collection>(GET_COLLECTION_SQL)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    #[tracing::instrument(
        name = "catalog.repository.find_purchase_records",
        skip(self, pool, slugs),
        fields(slug_count = slugs.len(), found_count = tracing::field::Empty),
        err
    )]
    pub(crate) async fn find_purchase_records(
        &self,
        pool: &PgPool,
        slugs: &[String],
    ) -> Result<Vec<ProductPurchaseRecord>, sqlx::Error> {
        let records = query_as::<Postgres, ProductPurchaseRecord>(FIND_PURCHASE_RECORDS_SQL)
            .bind(slugs)
            .fetch_all(pool)
            .await?;

        tracing::Span::current().record("found_count", records.len());

        Ok(records)
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let slug: String = row.try_get("slug")?;
        let image_url = resolve_image_url(&slug, row.try_get("image_url")?);

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("id")?),
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            description: row.try_get("description")?,
            features: row
                .try_get::<Option<Vec<String>>, _>("features")?
                .unwrap_or_default(),
            specifications: row
                .try_get::<Option<Value>, _>("specifications")?
                .unwrap_or_else(|| Value::Object(Map::new())),
            image_url,
            collection_slug: row.try_get("collection_slug")?,
            slug,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Collection {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CollectionUuid::from_uuid(row.try_get("id")?),
            slug: row.try_get("slug")?,
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            description: row.try_get("description")?,
            image_url: row.try_get("image_url")?,
            sort_order: row.try_get("sort_order")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductPurchaseRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            slug: row.try_get("slug")?,
            is_purchasable: row
                .try_get::<Option<bool>, _>("is_purchasable")?
                .unwrap_or(false),
            price_reference: row.try_get("stripe_price_id")?,
        })
    }
}
