use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-macronutrient quality tiers plus the dirty-dozen additive list,
/// stored as plain strings. Empty means the tier is unknown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientQualityRecord {
    #[serde(default)]
    pub protein: String,
    #[serde(default)]
    pub fat: String,
    #[serde(default)]
    pub fiber: String,
    #[serde(default)]
    pub carbohydrate: String,
    /// Comma-separated additive names, empty when none were flagged.
    #[serde(default)]
    pub dirty_dozen: String,
}

/// Guaranteed-analysis percentages as extracted from label text.
/// Values stay strings until scoring parses them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuaranteedAnalysisRecord {
    #[serde(default)]
    pub protein: String,
    #[serde(default)]
    pub fat: String,
    #[serde(default)]
    pub fiber: String,
    #[serde(default)]
    pub moisture: String,
    #[serde(default)]
    pub ash: String,
}

/// A fully enriched product as held by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub brand: String,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavors: Option<String>,
    /// Resolved category label, e.g. "Raw Food" or "Dry Food".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcing: Option<String>,
    /// "Yes", "No", or "Unknown".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adequacy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_storage: Option<String>,
    #[serde(default)]
    pub ingredient_quality: IngredientQualityRecord,
    #[serde(default)]
    pub guaranteed_analysis: GuaranteedAnalysisRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthetic: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longevity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_servings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeding_guidelines: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// Unprocessed product data as it arrives from a catalog file, before any
/// classification has run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProductPage {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub feeding_guidelines: String,
    #[serde(default)]
    pub food_category: String,
    /// Comma-separated ingredient deck as printed on the label.
    #[serde(default)]
    pub ingredients: String,
    /// Raw guaranteed-analysis block, e.g. "Crude Protein (min) 24%".
    #[serde(default)]
    pub guaranteed_analysis: String,
    #[serde(default)]
    pub dirty_dozen: String,
    #[serde(default)]
    pub food_storage: String,
    #[serde(default)]
    pub packaging_size: String,
    #[serde(default)]
    pub num_servings: String,
    #[serde(default)]
    pub container_weight: String,
    #[serde(default)]
    pub serving_size: String,
    #[serde(default)]
    pub synthetic: Option<i32>,
    #[serde(default)]
    pub longevity: Option<i32>,
    #[serde(default)]
    pub flavors: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_with_minimal_fields() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"product_name": "Test Recipe"}"#).unwrap();
        assert_eq!(record.product_name, "Test Recipe");
        assert_eq!(record.brand, "");
        assert!(record.category.is_none());
        assert_eq!(record.ingredient_quality.protein, "");
        assert_eq!(record.guaranteed_analysis.ash, "");
    }

    #[test]
    fn test_raw_page_defaults() {
        let page: RawProductPage = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(page.product_name, "");
        assert!(page.synthetic.is_none());
        assert!(page.flavors.is_none());
    }
}
