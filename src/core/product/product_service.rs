//! A service for managing the product catalog.
//!
//! # Examples
//!
//! ```rust
//! # use std::sync::Arc;
//! # use product_catalog::core::product::{
//! #     memory_repository::InMemoryProductRepository, product_entity::Product,
//! #     product_service::CatalogService,
//! # };
//! # use rust_decimal::Decimal;
//! # tokio_test::block_on(async {
//! let service = CatalogService::new(Arc::new(InMemoryProductRepository::new()));
//! let widget = service
//!     .create(Product::new("Widget", "", Decimal::new(1000, 2), 5))
//!     .await
//!     .unwrap();
//! assert!(widget.id() > 0);
//! assert_eq!("Sin descripción", widget.description());
//! # });
//! ```

use super::{
    product_entity::Product,
    product_repository::ProductRepository,
    product_rules::{validate, validate_id, validate_search_term},
};
use crate::infra::error::{CatalogError, CatalogResult};
use chrono::Utc;
use std::sync::Arc;
use tracing::instrument;

/// Catalog operations over some [`ProductRepository`].
///
/// Holds nothing but the repository, so one instance can serve any number of
/// concurrent callers.
#[derive(Debug)]
pub struct CatalogService<R> {
    repository: Arc<R>,
}

impl<R> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> CatalogService<R> {
    /// Creates a new service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all active products.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> CatalogResult<Vec<Product>> {
        tracing::info!("Listing products");
        let products = self
            .repository
            .get_all()
            .await
            .map_err(CatalogError::storage("failed to list products"))?;
        tracing::info!("Listed {} products", products.len());
        Ok(products)
    }

    /// Fetches a product, including deleted ones.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> CatalogResult<Product> {
        validate_id(id)?;
        let product = self
            .repository
            .get_by_id(id)
            .await
            .map_err(CatalogError::storage(format!("failed to fetch product {id}")))?
            .ok_or(CatalogError::NotFound(id))?;
        tracing::debug!("Found product: {:?}", product);
        Ok(product)
    }

    /// Validates and stores a new product.
    #[instrument(skip_all, fields(name = candidate.name()))]
    pub async fn create(&self, candidate: Product) -> CatalogResult<Product> {
        let mut product = validate(Some(candidate))?.into_inner();
        product.mark_created(Utc::now());
        let product = self
            .repository
            .create(product)
            .await
            .map_err(CatalogError::storage("failed to create product"))?;
        tracing::info!("Created product {}", product.id());
        Ok(product)
    }

    /// Replaces an existing product.
    #[instrument(skip_all, fields(id = candidate.id()))]
    pub async fn update(&self, candidate: Product) -> CatalogResult<Product> {
        let id = candidate.id();
        validate_id(id)?;
        let product = validate(Some(candidate))?.into_inner();
        self.ensure_exists(id).await?;
        let product = self
            .repository
            .update(product)
            .await
            .map_err(CatalogError::storage(format!("failed to update product {id}")))?;
        tracing::info!("Updated product {}", id);
        Ok(product)
    }

    /// Soft-deletes a product.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> CatalogResult<bool> {
        validate_id(id)?;
        self.ensure_exists(id).await?;
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(CatalogError::storage(format!("failed to delete product {id}")))?;
        tracing::info!("Deactivated product {}: {}", id, deleted);
        Ok(deleted)
    }

    /// Finds active products by name.
    #[instrument(skip(self))]
    pub async fn search_by_name(&self, term: &str) -> CatalogResult<Vec<Product>> {
        validate_search_term(term)?;
        let products = self
            .repository
            .search_by_name(term)
            .await
            .map_err(CatalogError::storage(format!(
                "failed to search products by name: {term}"
            )))?;
        tracing::info!("Found {} products", products.len());
        Ok(products)
    }

    /// Adds `delta` units to a product's stock.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: i32, delta: i32) -> CatalogResult<bool> {
        validate_id(id)?;
        let context = format!("failed to adjust stock of product {id}");
        let mut product = self
            .repository
            .get_by_id(id)
            .await
            .map_err(CatalogError::storage(context.clone()))?
            .ok_or(CatalogError::NotFound(id))?;
        if let Err(e) = product.adjust_stock(delta) {
            tracing::warn!("Rejected stock adjustment: {}", e);
            return Err(e.into());
        }
        self.repository
            .update(product)
            .await
            .map_err(CatalogError::storage(context))?;
        tracing::info!("Adjusted stock of product {} by {}", id, delta);
        Ok(true)
    }

    async fn ensure_exists(&self, id: i32) -> CatalogResult<()> {
        let exists = self
            .repository
            .exists(id)
            .await
            .map_err(CatalogError::storage(format!("failed to look up product {id}")))?;
        if !exists {
            tracing::warn!("Product {} not found", id);
            return Err(CatalogError::NotFound(id));
        }
        Ok(())
    }
}
