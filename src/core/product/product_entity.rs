//! The product entity and its invariant-preserving operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Text stored in place of a blank description.
pub const DEFAULT_DESCRIPTION: &str = "Sin descripción";

/// The longest allowed product name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// A mutation that would break a product invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    /// The product is not in a state that allows the operation.
    #[error("{0}")]
    IllegalState(String),
    /// The operation was given an unacceptable argument.
    #[error("{0}")]
    IllegalArgument(String),
}

/// A sellable catalog item.
///
/// Fields are private. Once a product exists, the only way to change it is
/// through [`Product::adjust_stock`], [`Product::update_price`],
/// [`Product::activate`] and [`Product::deactivate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The product's id, `0` until stored.
    #[serde(default)]
    id: i32,
    /// The product's name.
    #[validate(custom(function = "validate_name"))]
    name: String,
    /// The product's description.
    #[serde(default)]
    #[validate(length(max = 500, message = "description too long"))]
    description: String,
    /// The unit price.
    #[validate(custom(function = "validate_price"))]
    price: Decimal,
    /// Units in stock.
    #[validate(range(min = 0, message = "stock cannot be negative"))]
    stock: i32,
    /// When the product was created.
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
    /// Whether the product is listed. `false` once deleted.
    #[serde(default = "active_by_default")]
    active: bool,
}

fn active_by_default() -> bool {
    true
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("name required".into()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::new("length").with_message("name too long".into()));
    }
    Ok(())
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(ValidationError::new("range").with_message("price must be positive".into()));
    }
    Ok(())
}

impl Product {
    /// Creates an unsaved product candidate.
    ///
    /// Nothing is validated here; the catalog service does that before the
    /// candidate is stored.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock: i32,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            price,
            stock,
            created_at: Utc::now(),
            active: true,
        }
    }

    /// Rebuilds a product from a stored record.
    /// Meant for repository adapters.
    pub fn from_storage(
        id: i32,
        name: String,
        description: String,
        price: Decimal,
        stock: i32,
        created_at: DateTime<Utc>,
        active: bool,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock,
            created_at,
            active,
        }
    }

    /// Targets an existing product, for full updates.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// The product's id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// The product's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The product's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The unit price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Units in stock.
    pub fn stock(&self) -> i32 {
        self.stock
    }

    /// When the product was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the product is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Adds `delta` units to the stock. Negative deltas remove units.
    pub fn adjust_stock(&mut self, delta: i32) -> Result<(), ProductError> {
        let stock = self.stock.checked_add(delta).ok_or_else(|| {
            ProductError::IllegalArgument("stock adjustment out of range".to_string())
        })?;
        if stock < 0 {
            return Err(ProductError::IllegalState(
                "stock cannot be negative".to_string(),
            ));
        }
        self.stock = stock;
        Ok(())
    }

    /// Sets a new unit price.
    pub fn update_price(&mut self, new_price: Decimal) -> Result<(), ProductError> {
        if new_price <= Decimal::ZERO {
            return Err(ProductError::IllegalArgument(
                "price must be positive".to_string(),
            ));
        }
        self.price = new_price;
        Ok(())
    }

    /// Lists the product again.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Soft-deletes the product.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Replaces a blank description with [`DEFAULT_DESCRIPTION`].
    pub(crate) fn normalize_description(&mut self) {
        if self.description.trim().is_empty() {
            self.description = DEFAULT_DESCRIPTION.to_string();
        }
    }

    /// Stamps a freshly created product.
    pub(crate) fn mark_created(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
        self.active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(stock: i32) -> Product {
        Product::new("Widget", "A small widget", Decimal::new(1000, 2), stock)
    }

    #[test]
    fn new_product_is_active_and_unsaved() {
        let product = widget(5);
        assert_eq!(0, product.id());
        assert!(product.is_active());
    }

    #[test]
    fn adjust_stock_adds_and_removes() {
        let mut product = widget(10);
        product.adjust_stock(5).unwrap();
        assert_eq!(15, product.stock());
        product.adjust_stock(-15).unwrap();
        assert_eq!(0, product.stock());
    }

    #[test]
    fn adjust_stock_below_zero_is_illegal_state() {
        let mut product = widget(10);
        let err = product.adjust_stock(-11).unwrap_err();
        assert_eq!(
            ProductError::IllegalState("stock cannot be negative".to_string()),
            err
        );
        assert_eq!(10, product.stock());
    }

    #[test]
    fn adjust_stock_overflow_is_rejected() {
        let mut product = widget(i32::MAX);
        assert!(matches!(
            product.adjust_stock(1),
            Err(ProductError::IllegalArgument(_))
        ));
        assert_eq!(i32::MAX, product.stock());
    }

    #[test]
    fn update_price_requires_positive_price() {
        let mut product = widget(1);
        assert!(matches!(
            product.update_price(Decimal::ZERO),
            Err(ProductError::IllegalArgument(_))
        ));
        assert!(product.update_price(Decimal::new(-5, 0)).is_err());
        assert_eq!(Decimal::new(1000, 2), product.price());

        product.update_price(Decimal::new(1250, 2)).unwrap();
        assert_eq!(Decimal::new(1250, 2), product.price());
    }

    #[test]
    fn activation_is_idempotent() {
        let mut product = widget(1);
        product.deactivate();
        product.deactivate();
        assert!(!product.is_active());
        product.activate();
        product.activate();
        assert!(product.is_active());
    }

    #[test]
    fn blank_description_is_normalized() {
        let mut product = Product::new("Widget", "   ", Decimal::ONE, 1);
        product.normalize_description();
        assert_eq!(DEFAULT_DESCRIPTION, product.description());

        let mut product = widget(1);
        product.normalize_description();
        assert_eq!("A small widget", product.description());
    }

    #[test]
    fn serializes_in_camel_case() {
        let json = serde_json::to_value(widget(3)).unwrap();
        assert_eq!("Widget", json["name"]);
        assert_eq!("10.00", json["price"]);
        assert!(json["createdAt"].is_string());
        assert_eq!(true, json["active"]);
    }
}
