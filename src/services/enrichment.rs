//! Turns raw catalog entries into fully classified product records.
//!
//! This is the one place the classifiers run; everything downstream reads
//! the persisted strings. Fallback chains walk successively less specific
//! text fields until a classifier lands a label.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::models::classification::QualityTier;
use crate::models::product::{
    GuaranteedAnalysisRecord, IngredientQualityRecord, ProductRecord, RawProductPage,
};
use crate::services::adequacy::infer_nutritional_adequacy;
use crate::services::analysis::extract_guaranteed_analysis;
use crate::services::category::classify_category;
use crate::services::ingredients::classify_ingredient_list;
use crate::services::processing::classify_processing_method;
use crate::services::sourcing::classify_sourcing;

/// Ash assumed present when a label reports protein but omits ash.
const ASSUMED_ASH_PERCENT: &str = "6.0";

/// Stored form of a quality tier; Unknown persists as an empty string.
fn tier_label(tier: QualityTier) -> String {
    match tier {
        QualityTier::Unknown => String::new(),
        other => other.to_string(),
    }
}

/// Classifies one raw catalog entry into a storable record.
pub fn enrich_product(page: &RawProductPage) -> ProductRecord {
    let mut processing = classify_processing_method(&page.product_name);
    if processing.label.is_none() {
        processing = classify_processing_method(&page.description);
        if processing.label.is_none() {
            processing = classify_processing_method(&page.feeding_guidelines);
        }
    }

    let mut sourcing = classify_sourcing(&page.description);
    if sourcing.label.is_none() {
        sourcing = classify_sourcing(&page.feeding_guidelines);
    }

    // A supplied category column wins over classification; only its first
    // comma segment is kept.
    let category = if page.food_category.is_empty() {
        classify_category(&page.product_name)
            .label
            .unwrap_or_else(|| "Unknown".to_string())
    } else {
        page.food_category
            .split(',')
            .next()
            .unwrap_or("")
            .to_string()
    };

    let adequacy = if page.description.is_empty() {
        "Unknown".to_string()
    } else {
        infer_nutritional_adequacy(&page.description).to_string()
    };

    let ingredient_quality = if page.ingredients.is_empty() {
        IngredientQualityRecord {
            dirty_dozen: page.dirty_dozen.clone(),
            ..Default::default()
        }
    } else {
        let names: Vec<&str> = page.ingredients.split(", ").collect();
        let profile = classify_ingredient_list(&names);
        IngredientQualityRecord {
            protein: tier_label(profile.protein),
            fat: tier_label(profile.fat),
            fiber: tier_label(profile.fiber),
            carbohydrate: tier_label(profile.carbohydrate),
            dirty_dozen: page.dirty_dozen.clone(),
        }
    };

    let mut ga = extract_guaranteed_analysis(&page.guaranteed_analysis);
    let mut guaranteed_analysis = GuaranteedAnalysisRecord {
        protein: ga.remove("protein").unwrap_or_default(),
        fat: ga.remove("fat").unwrap_or_default(),
        fiber: ga.remove("fiber").unwrap_or_default(),
        moisture: ga.remove("moisture").unwrap_or_default(),
        ash: ga.remove("ash").unwrap_or_default(),
    };
    if !guaranteed_analysis.protein.is_empty() && guaranteed_analysis.ash.is_empty() {
        guaranteed_analysis.ash = ASSUMED_ASH_PERCENT.to_string();
    }

    debug!(
        product = %page.product_name,
        category = %category,
        processing = processing.label_or_empty(),
        "Enriched product"
    );

    let now = Utc::now();
    ProductRecord {
        id: Uuid::new_v4(),
        brand: page.brand.clone(),
        product_name: page.product_name.clone(),
        flavors: page.flavors.clone(),
        category: Some(category),
        processing: processing.label,
        sourcing: sourcing.label,
        adequacy: Some(adequacy),
        ingredients: (!page.ingredients.is_empty()).then(|| page.ingredients.clone()),
        food_storage: (!page.food_storage.is_empty()).then(|| page.food_storage.clone()),
        ingredient_quality,
        guaranteed_analysis,
        synthetic: Some(page.synthetic.unwrap_or(0)),
        longevity: Some(page.longevity.unwrap_or(0)),
        packaging_size: (!page.packaging_size.is_empty()).then(|| page.packaging_size.clone()),
        num_servings: (!page.num_servings.is_empty()).then(|| page.num_servings.clone()),
        container_weight: (!page.container_weight.is_empty())
            .then(|| page.container_weight.clone()),
        serving_size: (!page.serving_size.is_empty()).then(|| page.serving_size.clone()),
        product_url: page.product_url.clone(),
        image_url: page.image_url.clone(),
        description: (!page.description.is_empty()).then(|| page.description.clone()),
        feeding_guidelines: (!page.feeding_guidelines.is_empty())
            .then(|| page.feeding_guidelines.clone()),
        created_at: now,
        updated_at: now,
    }
}
