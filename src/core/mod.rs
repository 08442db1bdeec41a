//! Business logic.

pub mod product;
