use std::sync::Arc;

use dogfood_score::{
    config::AppConfig,
    models::{product::RawProductPage, score::ScoreRequest},
    services::{enrichment, scoring::ScoringService},
    store::{MemoryStore, ProductStore},
};
use garde::Validate;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting dog food scorer");

    // Load configuration
    let config = AppConfig::from_env().expect("Failed to load configuration");

    tracing::info!(catalog = %config.catalog_path, "Loading product catalog");
    let catalog_json =
        std::fs::read_to_string(&config.catalog_path).expect("Failed to read catalog file");
    let pages: Vec<RawProductPage> =
        serde_json::from_str(&catalog_json).expect("Failed to parse catalog JSON");

    let store = Arc::new(MemoryStore::new());
    for page in &pages {
        let record = enrichment::enrich_product(page);
        store
            .insert(record)
            .await
            .expect("Failed to store enriched product");
    }
    let stored = store.list_all().await.expect("Failed to read store");
    tracing::info!(count = stored.len(), "Catalog enriched and stored");

    let service = ScoringService::new(store);

    match config.product.clone() {
        Some(product) => {
            let request = ScoreRequest {
                add_topper: config.topper.is_some(),
                product,
                topper: config.topper.clone().unwrap_or_default(),
                storage: config.storage.clone().unwrap_or_default(),
                packaging_size: config.packaging_size.clone().unwrap_or_default(),
                shelf_life: config.shelf_life.clone().unwrap_or_default(),
                topper_storage: config.topper_storage.clone().unwrap_or_default(),
                topper_packaging_size: config.topper_packaging_size.clone().unwrap_or_default(),
                topper_shelf_life: config.topper_shelf_life.clone().unwrap_or_default(),
                ..Default::default()
            };
            request.validate().expect("Invalid scoring request");

            let breakdown = service.score(&request).await.expect("Scoring failed");
            println!(
                "{}",
                serde_json::to_string_pretty(&breakdown).expect("Failed to serialize breakdown")
            );
        }
        None => {
            let ranked = service
                .top_products(config.top_n)
                .await
                .expect("Ranking failed");
            println!(
                "{}",
                serde_json::to_string_pretty(&ranked).expect("Failed to serialize ranking")
            );
        }
    }
}
