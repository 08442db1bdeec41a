//! Bulk creation of products.

use super::{
    product_dto::NewProduct, product_entity::Product, product_repository::ProductRepository,
    product_service::CatalogService,
};
use crate::infra::error::{CatalogError, CatalogResult};
use tracing::instrument;

/// The outcome of an import.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Products that were stored.
    pub created: Vec<Product>,
    /// Names of rejected products, with the reason.
    pub rejected: Vec<(String, String)>,
}

/// Creates each product in order.
///
/// Invalid products are skipped and reported. A storage failure stops the
/// import; products created before it stay created.
#[instrument(skip_all, fields(count = products.len()))]
pub async fn import_products<R: ProductRepository>(
    service: &CatalogService<R>,
    products: Vec<NewProduct>,
) -> CatalogResult<ImportReport> {
    let mut report = ImportReport::default();
    for new_product in products {
        let name = new_product.name.clone();
        match service.create(new_product.into()).await {
            Ok(product) => report.created.push(product),
            Err(CatalogError::Validation(reason)) => {
                tracing::warn!("Skipping product {:?}: {}", name, reason);
                report.rejected.push((name, reason));
            }
            Err(e) => return Err(e),
        }
    }
    tracing::info!(
        "Imported {} products, rejected {}",
        report.created.len(),
        report.rejected.len()
    );
    Ok(report)
}
