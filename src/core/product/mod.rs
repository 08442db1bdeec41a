//! The product catalog.

pub mod memory_repository;
pub mod product_dto;
pub mod product_entity;
pub mod product_import;
pub mod product_repository;
pub mod product_rules;
pub mod product_service;
