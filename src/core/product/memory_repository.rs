//! An in-memory product repository.

use super::{
    product_entity::Product,
    product_repository::{ProductRepository, RepositoryError, RepositoryResult},
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::instrument;

#[derive(Debug)]
struct Store {
    next_id: i32,
    products: BTreeMap<i32, Product>,
}

/// Keeps products in a map for the lifetime of the process.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    store: RwLock<Store>,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                products: BTreeMap::new(),
            }),
        }
    }

    /// Creates a repository holding the reference products.
    pub fn seeded() -> Self {
        let seed = [
            (
                "Laptop Dell XPS 13",
                "Ultrabook de alto rendimiento",
                Decimal::new(129999, 2),
                10,
            ),
            (
                "Mouse Logitech MX Master 3",
                "Mouse ergonómico inalámbrico",
                Decimal::new(9999, 2),
                25,
            ),
            (
                "Teclado Mecánico Keychron K2",
                "Teclado mecánico RGB bluetooth",
                Decimal::new(8999, 2),
                15,
            ),
        ];
        let products: BTreeMap<i32, Product> = seed
            .into_iter()
            .zip(1..)
            .map(|((name, description, price, stock), id)| {
                (id, Product::new(name, description, price, stock).with_id(id))
            })
            .collect();
        let next_id = products.len() as i32 + 1;
        Self {
            store: RwLock::new(Store { next_id, products }),
        }
    }
}

fn sorted_by_name(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by(|a, b| a.name().cmp(b.name()).then(a.id().cmp(&b.id())));
    products
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        let store = self.store.read().await;
        let products = store
            .products
            .values()
            .filter(|p| p.is_active())
            .cloned()
            .collect();
        Ok(sorted_by_name(products))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        Ok(self.store.read().await.products.get(&id).cloned())
    }

    #[instrument(skip(self, product))]
    async fn create(&self, product: Product) -> RepositoryResult<Product> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;
        let product = product.with_id(id);
        store.products.insert(id, product.clone());
        tracing::debug!("Stored product {}", id);
        Ok(product)
    }

    #[instrument(skip(self, product), fields(id = product.id()))]
    async fn update(&self, product: Product) -> RepositoryResult<Product> {
        let mut store = self.store.write().await;
        let stored = store
            .products
            .get_mut(&product.id())
            .ok_or(RepositoryError::Missing(product.id()))?;
        *stored = Product::from_storage(
            product.id(),
            product.name().to_string(),
            product.description().to_string(),
            product.price(),
            product.stock(),
            stored.created_at(),
            product.is_active(),
        );
        Ok(stored.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        let mut store = self.store.write().await;
        match store.products.get_mut(&id) {
            Some(product) => {
                product.deactivate();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[instrument(skip(self))]
    async fn search_by_name(&self, term: &str) -> RepositoryResult<Vec<Product>> {
        let term = term.to_lowercase();
        let store = self.store.read().await;
        let products = store
            .products
            .values()
            .filter(|p| p.is_active() && p.name().to_lowercase().contains(&term))
            .cloned()
            .collect();
        Ok(sorted_by_name(products))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i32) -> RepositoryResult<bool> {
        Ok(self.store.read().await.products.contains_key(&id))
    }
}
