//! Types for reporting errors that happened during a catalog operation.
//!
//! Every service operation returns a [`CatalogResult`]. Callers discriminate
//! failures by variant: [`CatalogError::Validation`] and
//! [`CatalogError::NotFound`] are caused by the caller, while
//! [`CatalogError::Storage`] means the repository failed underneath us.

use crate::core::product::{
    product_entity::ProductError, product_repository::RepositoryError,
};
use validator::ValidationErrors;

/// Fields in the order their failures are reported.
/// When several rules fail at once, the first field listed here wins.
const FIELD_PRIORITY: [&str; 4] = ["name", "price", "stock", "description"];

/// An error from the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Input validation failed, or some illegal operation was attempted.
    #[error("{0}")]
    Validation(String),
    /// The product was not found.
    #[error("product {0} not found")]
    NotFound(i32),
    /// The repository failed.
    /// The message only names the operation, the cause is kept as the source.
    #[error("{context}")]
    Storage {
        /// What the service was doing.
        context: String,
        /// The underlying repository failure.
        #[source]
        source: RepositoryError,
    },
}

/// The result of calling catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// Shorthand for a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Wraps a repository failure, for use with [`Result::map_err`].
    pub fn storage(context: impl Into<String>) -> impl FnOnce(RepositoryError) -> CatalogError {
        let context = context.into();
        move |source| {
            tracing::error!("{}: {}", context, source);
            CatalogError::Storage { context, source }
        }
    }
}

impl From<ProductError> for CatalogError {
    fn from(e: ProductError) -> Self {
        CatalogError::Validation(e.to_string())
    }
}

impl From<ValidationErrors> for CatalogError {
    fn from(e: ValidationErrors) -> Self {
        let fields = e.field_errors();
        let message = FIELD_PRIORITY
            .iter()
            .filter_map(|field| fields.get(*field))
            .chain(fields.values())
            .find_map(|errors| errors.first())
            .map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            })
            .unwrap_or_else(|| "invalid product".to_string());
        CatalogError::Validation(message)
    }
}
