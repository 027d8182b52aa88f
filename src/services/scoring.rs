//! Scoring orchestrator: resolves products from the store, fills in every
//! missing field with its documented default, and runs the rubric.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::models::score::{RankedProduct, ScoreBreakdown, ScoreRequest};
use crate::services::rubric::{DogFoodScorer, ScoringInputs};
use crate::store::{ProductStore, StoreError};

/// Parses a guaranteed-analysis string, substituting `default` for empty
/// or unparsable values.
fn safe_float(value: &str, default: f64) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return default;
    }
    trimmed.parse().unwrap_or(default)
}

pub struct ScoringService<S> {
    store: Arc<S>,
    scorer: DogFoodScorer,
}

impl<S: ProductStore> ScoringService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            scorer: DogFoodScorer::default(),
        }
    }

    /// Scores the named product, blending in the named topper when
    /// `add_topper` is set and the topper resolves.
    ///
    /// An unresolvable product is a recoverable outcome: it logs and
    /// returns the zero breakdown without running the rubric.
    pub async fn score(&self, request: &ScoreRequest) -> Result<ScoreBreakdown, StoreError> {
        debug!(
            product = %request.product,
            add_topper = request.add_topper,
            pet_name = %request.pet_name,
            "Scoring product"
        );

        let base_products = self.store.find_by_name(&request.product).await?;
        let Some(base_product) = base_products.first() else {
            error!(product = %request.product, "Base product not found");
            return Ok(ScoreBreakdown::not_found());
        };
        if base_products.len() > 1 {
            warn!(
                product = %request.product,
                count = base_products.len(),
                "Multiple products share this name, using the first match"
            );
        }

        let mut topper_product = None;
        if request.add_topper {
            let topper_products = self.store.find_by_name(&request.topper).await?;
            if topper_products.len() > 1 {
                warn!(
                    topper = %request.topper,
                    count = topper_products.len(),
                    "Multiple topper products share this name, using the first match"
                );
            }
            topper_product = topper_products.into_iter().next();
        }

        let ga = &base_product.guaranteed_analysis;
        let iq = &base_product.ingredient_quality;
        let dirty_dozen_count = if iq.dirty_dozen.trim().is_empty() {
            0
        } else {
            iq.dirty_dozen.split(',').count()
        };

        let inputs = ScoringInputs {
            food_type: base_product.category.clone().unwrap_or_default(),
            sourcing: base_product.sourcing.clone().unwrap_or_default(),
            processing: base_product.processing.clone().unwrap_or_default(),
            topper_processing: topper_product
                .as_ref()
                .and_then(|t| t.processing.clone())
                .unwrap_or_default(),
            adequate: base_product.adequacy.as_deref() == Some("Yes"),
            protein: safe_float(&ga.protein, 0.0),
            fat: safe_float(&ga.fat, 0.0),
            fiber: safe_float(&ga.fiber, 0.0),
            ash: safe_float(&ga.ash, self.scorer.defaults.fallback_ash_percent),
            moisture: safe_float(&ga.moisture, 0.0),
            protein_quality: iq.protein.to_lowercase(),
            fat_quality: iq.fat.to_lowercase(),
            fiber_quality: iq.fiber.to_lowercase(),
            carbohydrate_quality: iq.carbohydrate.to_lowercase(),
            dirty_dozen_count,
            synthetic_count: base_product.synthetic.unwrap_or(0),
            longevity_count: base_product.longevity.unwrap_or(0),
            storage: request.storage.clone(),
            topper_storage: request.topper_storage.clone(),
            packaging_size: request.packaging_size.clone(),
            topper_packaging_size: request.topper_packaging_size.clone(),
            shelf_life: request.shelf_life.clone(),
            topper_shelf_life: request.topper_shelf_life.clone(),
        };

        Ok(self.scorer.score_product(&inputs))
    }

    /// Ranks every raw and fresh product by bare score (no topper, no
    /// storage answers), keeping up to `limit` per category, best first.
    pub async fn top_products(&self, limit: usize) -> Result<Vec<RankedProduct>, StoreError> {
        let raw_products = self.store.list_by_category("Raw Food").await?;
        let fresh_products = self.store.list_by_category("Fresh Food").await?;
        if raw_products.is_empty() && fresh_products.is_empty() {
            warn!("No raw or fresh products available to rank");
            return Ok(Vec::new());
        }

        let mut rows = Vec::with_capacity(raw_products.len() + fresh_products.len());
        for product in raw_products.iter().chain(fresh_products.iter()) {
            let request = ScoreRequest {
                product: product.product_name.clone(),
                ..Default::default()
            };
            let (score, classification) = match self.score(&request).await {
                Ok(breakdown) => (breakdown.score, breakdown.classification.to_string()),
                Err(err) => {
                    error!(
                        product = %product.product_name,
                        error = %err,
                        "Failed to score product for ranking"
                    );
                    (0.0, "Error".to_string())
                }
            };
            rows.push(RankedProduct {
                id: product.id,
                brand: product.brand.clone(),
                product_name: product.product_name.clone(),
                category: product.category.clone().unwrap_or_default(),
                flavors: product.flavors.clone(),
                image_url: product.image_url.clone(),
                product_url: product.product_url.clone(),
                processing: product
                    .processing
                    .clone()
                    .filter(|p| !p.is_empty())
                    .unwrap_or_else(|| "Uncooked (Not Frozen)".to_string()),
                score,
                classification,
            });
        }

        rows.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let mut combined: Vec<RankedProduct> = rows
            .iter()
            .filter(|r| r.category == "Raw Food")
            .take(limit)
            .cloned()
            .collect();
        combined.extend(
            rows.iter()
                .filter(|r| r.category == "Fresh Food")
                .take(limit)
                .cloned(),
        );
        combined.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        Ok(combined)
    }
}
