//! Request shapes an inbound layer hands to the catalog service.

use super::product_entity::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product to create.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// The product's name.
    pub name: String,
    /// The product's description. Blank descriptions get a placeholder.
    #[serde(default)]
    pub description: String,
    /// The unit price.
    pub price: Decimal,
    /// Units in stock.
    pub stock: i32,
}

/// A full replacement of an existing product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    /// The product to replace.
    pub id: i32,
    /// The product's name.
    pub name: String,
    /// The product's description.
    #[serde(default)]
    pub description: String,
    /// The unit price.
    pub price: Decimal,
    /// Units in stock.
    pub stock: i32,
    /// Whether the product is listed.
    pub active: bool,
}

/// A change in stock for one product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    /// The product to adjust.
    pub product_id: i32,
    /// Units to add, or remove when negative.
    pub delta: i32,
}

impl From<NewProduct> for Product {
    fn from(new: NewProduct) -> Self {
        Product::new(new.name, new.description, new.price, new.stock)
    }
}

impl From<ProductUpdate> for Product {
    fn from(update: ProductUpdate) -> Self {
        let mut product =
            Product::new(update.name, update.description, update.price, update.stock)
                .with_id(update.id);
        if !update.active {
            product.deactivate();
        }
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_accepts_numeric_price_and_missing_description() {
        let new: NewProduct =
            serde_json::from_str(r#"{ "name": "Widget", "price": 10.5, "stock": 5 }"#).unwrap();
        assert_eq!("", new.description);
        assert_eq!(Decimal::new(105, 1), new.price);

        let product = Product::from(new);
        assert_eq!(0, product.id());
        assert!(product.is_active());
    }

    #[test]
    fn update_carries_id_and_active_flag() {
        let update: ProductUpdate = serde_json::from_str(
            r#"{ "id": 3, "name": "Widget", "description": "x", "price": "2.00", "stock": 1, "active": false }"#,
        )
        .unwrap();
        let product = Product::from(update);
        assert_eq!(3, product.id());
        assert!(!product.is_active());
    }

    #[test]
    fn stock_adjustment_uses_camel_case() {
        let adjustment: StockAdjustment =
            serde_json::from_str(r#"{ "productId": 7, "delta": -2 }"#).unwrap();
        assert_eq!(
            StockAdjustment {
                product_id: 7,
                delta: -2
            },
            adjustment
        );

        let json = serde_json::to_value(adjustment).unwrap();
        assert_eq!(7, json["productId"]);
        assert_eq!(-2, json["delta"]);
        assert_eq!(adjustment, serde_json::from_value(json).unwrap());
    }
}
