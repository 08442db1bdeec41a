//! The persistence contract the catalog service depends on.

use super::product_entity::Product;

/// A failure inside a repository adapter.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backing store could not be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// A write targeted a record that does not exist.
    #[error("no record with id {0}")]
    Missing(i32),
    /// Any other adapter failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The result of calling repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Anything that can store and load products.
///
/// Listing and searching only see active products, while lookups by id
/// ([`ProductRepository::get_by_id`], [`ProductRepository::exists`]) see
/// deleted ones too.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync {
    /// Lists active products ordered by name.
    async fn get_all(&self) -> RepositoryResult<Vec<Product>>;

    /// Fetches a product, active or not.
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;

    /// Stores a new product and assigns its id.
    async fn create(&self, product: Product) -> RepositoryResult<Product>;

    /// Replaces a stored product. The stored creation time is kept.
    async fn update(&self, product: Product) -> RepositoryResult<Product>;

    /// Deactivates a product. Returns `false` if there was none.
    /// Records are never physically removed.
    async fn delete(&self, id: i32) -> RepositoryResult<bool>;

    /// Lists active products whose name contains `term`, ordered by name.
    async fn search_by_name(&self, term: &str) -> RepositoryResult<Vec<Product>>;

    /// Whether a product with this id exists, active or not.
    async fn exists(&self, id: i32) -> RepositoryResult<bool>;
}
