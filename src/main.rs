//! Loads the product catalog and prints the active products as JSON.

use color_eyre::eyre::WrapErr;
use product_catalog::{
    core::product::{
        memory_repository::InMemoryProductRepository, product_dto::NewProduct,
        product_import::import_products, product_service::CatalogService,
    },
    infra::{config, logging},
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    let config = config::load_config()?;
    let _guard = logging::init_logging(&config.logging);

    let repository = if config.catalog.seed {
        InMemoryProductRepository::seeded()
    } else {
        InMemoryProductRepository::new()
    };
    let service = CatalogService::new(Arc::new(repository));

    if let Some(path) = &config.catalog.import {
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {path}"))?;
        let products: Vec<NewProduct> = serde_json::from_str(&contents)
            .wrap_err_with(|| format!("failed to parse {path}"))?;
        let report = import_products(&service, products).await?;
        for (name, reason) in &report.rejected {
            tracing::warn!("Rejected {:?}: {}", name, reason);
        }
    }

    let products = service.list_active().await?;
    println!("{}", serde_json::to_string_pretty(&products)?);

    Ok(())
}
