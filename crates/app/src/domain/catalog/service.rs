//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::catalog::{
    errors::CatalogServiceError,
    models::{Collection, Product, ProductPurchaseRecord},
    repository::PgCatalogRepository,
};

/// Catalog backed by the product store, or by nothing when no store is configured.
#[derive(Debug, Clone)]
pub struct PgCatalogService {
    pool: Option<PgPool>,
    repository: PgCatalogRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Some(pool),
            repository: PgCatalogRepository::new(),
        }
    }

    /// A catalog with no product store behind it. Every call fails with
    /// [`CatalogServiceError::NotConfigured`].
    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            pool: None,
            repository: PgCatalogRepository::new(),
        }
    }

    fn pool(&self) -> Result<&PgPool, CatalogServiceError> {
        self.pool.as_ref().ok_or(CatalogServiceError::NotConfigured)
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    fn is_configured(&self) -> bool {
        self.pool.is_some()
    }

    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError> {
        Ok(self.repository.list_products(self.pool()?).await?)
    }

    async fn get_product(&self, slug: &str) -> Result<Product, CatalogServiceError> {
        Ok(self.repository.get_product(self.pool()?, slug).await?)
    }

    async fn list_products_by_collection(
        &self,
        collection_slug: &str,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        Ok(self
            .repository
            .list_products_by_collection(self.pool()?, collection_slug)
            .await?)
    }

    async fn list_collections(&self) -> Result<Vec<Collection>, CatalogServiceError> {
        Ok(self.repository.list_collections(self.pool()?).await?)
    }

    async fn get_collection(&self, slug: &str) -> Result<Collection, CatalogServiceError> {
        Ok(self.repository.get_collection(self.pool()?, slug).await?)
    }

    async fn find_purchase_records(
        &self,
        slugs: &[String],
    ) -> Result<Vec<ProductPurchaseRecord>, CatalogServiceError> {
        let pool = self.pool()?;

        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self.repository.find_purchase_records(pool, slugs).await?)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Whether a product store is wired up at all.
    fn is_configured(&self) -> bool;

    /// All products, ordered by name.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError>;

    /// A single product by slug.
    async fn get_product(&self, slug: &str) -> Result<Product, CatalogServiceError>;

    /// Products belonging to a collection, ordered by name.
    async fn list_products_by_collection(
        &self,
        collection_slug: &str,
    ) -> Result<Vec<Product>, CatalogServiceError>;

    /// All collections, by sort order then name.
    async fn list_collections(&self) -> Result<Vec<Collection>, CatalogServiceError>;

    /// A single collection by slug.
    async fn get_collection(&self, slug: &str) -> Result<Collection, CatalogServiceError>;

    /// Purchase records for the given slugs in one lookup. Slugs the store
    /// does not know are simply absent from the result.
    async fn find_purchase_records(
        &self,
        slugs: &[String],
    ) -> Result<Vec<ProductPurchaseRecord>, CatalogServiceError>;
}
