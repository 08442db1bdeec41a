//! Rules a product must satisfy before it is created or replaced.

use super::product_entity::Product;
use crate::infra::{
    error::{CatalogError, CatalogResult},
    validation::Valid,
};

/// Normalizes and validates a product candidate.
///
/// A blank description is replaced with the placeholder text rather than
/// rejected. Every other rule violation is reported as a
/// [`CatalogError::Validation`] naming the first offending field.
pub fn validate(candidate: Option<Product>) -> CatalogResult<Valid<Product>> {
    let mut product = candidate.ok_or_else(|| CatalogError::validation("product required"))?;
    product.normalize_description();
    Ok(Valid::new(product)?)
}

/// Checks that an id can refer to a stored product.
pub fn validate_id(id: i32) -> CatalogResult<()> {
    if id <= 0 {
        return Err(CatalogError::validation("id must be greater than zero"));
    }
    Ok(())
}

/// Checks that a search term has something to search for.
pub fn validate_search_term(term: &str) -> CatalogResult<()> {
    if term.trim().is_empty() {
        return Err(CatalogError::validation("search term required"));
    }
    Ok(())
}
