//! Utilities for validating constraints on types.

use validator::{Validate, ValidationErrors};

/// A type that cannot be instatiated without validating the value within.
/// That is, if you have a [`Valid<T>`], `T` is guaranteed to be valid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Valid<T> {
    value: T,
}

impl<T> Valid<T> {
    /// Constructs a new validated value.
    pub fn new(value: T) -> Result<Valid<T>, ValidationErrors>
    where
        T: Validate,
    {
        value.validate().map(|_| Valid { value })
    }

    /// Returns a reference to the validated value.
    pub fn inner(&self) -> &T {
        &self.value
    }

    /// Returns the validated value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::Valid;
    use crate::core::product::product_entity::Product;
    use rust_decimal::Decimal;

    #[test]
    pub fn valid_product_succeeds() {
        let product = Product::new("Widget", "A small widget", Decimal::new(1000, 2), 5);
        let value = Valid::new(product);
        assert!(value.is_ok());
        assert_eq!("Widget", value.unwrap().inner().name());
    }

    #[test]
    pub fn negative_price_fails() {
        let product = Product::new("Widget", "A small widget", Decimal::new(-1, 0), 5);
        let errors = Valid::new(product).unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    pub fn long_name_fails() {
        let product = Product::new("x".repeat(101), "A small widget", Decimal::ONE, 0);
        let errors = Valid::new(product).unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
