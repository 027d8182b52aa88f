use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Quality band for a final product score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "title_case")]
pub enum ScoreClassification {
    #[serde(rename = "At Risk")]
    AtRisk,
    Poor,
    Fair,
    Good,
    Optimal,
}

/// Universal output shape of every rubric rule.
///
/// `score` is derived from the deduction's share of the factor maximum,
/// `100 - (deduction / max_deduction) * 100`, truncated toward zero. The
/// unrounded `deduction` is what feeds the final sum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringFactor {
    pub deduction: f64,
    pub grade: String,
    pub score: i32,
}

impl ScoringFactor {
    pub fn new(deduction: f64, max_deduction: f64, grade: impl Into<String>) -> Self {
        let score = (100.0 - (deduction / max_deduction) * 100.0) as i32;
        Self {
            deduction,
            grade: grade.into(),
            score,
        }
    }
}

/// Per-factor breakdown, serialized as a factor-name to factor mapping.
/// Field order is the rubric's evaluation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicroScore {
    pub food: ScoringFactor,
    pub sourcing: ScoringFactor,
    pub processing: ScoringFactor,
    pub adequacy: ScoringFactor,
    pub carb: ScoringFactor,
    pub ingredient_quality_protein: ScoringFactor,
    pub ingredient_quality_fat: ScoringFactor,
    pub ingredient_quality_fiber: ScoringFactor,
    pub ingredient_quality_carbohydrate: ScoringFactor,
    pub dirty_dozen: ScoringFactor,
    pub synthetic: ScoringFactor,
    pub longevity: ScoringFactor,
    pub storage: ScoringFactor,
    pub packaging: ScoringFactor,
    pub shelf_life: ScoringFactor,
}

/// Final scoring artifact returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub classification: ScoreClassification,
    /// Raw per-factor deductions in rubric order, unrounded.
    pub deductions: Vec<f64>,
    pub carb_percent: f64,
    /// Absent when the product could not be resolved and the rubric never ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub micro_score: Option<MicroScore>,
}

impl ScoreBreakdown {
    /// Zero-score result for an unresolvable product.
    pub fn not_found() -> Self {
        Self {
            score: 0.0,
            classification: ScoreClassification::AtRisk,
            deductions: Vec::new(),
            carb_percent: 0.0,
            micro_score: None,
        }
    }
}

/// Request to score a named product, optionally blended with a topper.
/// Pet details travel with the request for logging; they never affect the
/// score.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ScoreRequest {
    #[garde(skip)]
    #[serde(default)]
    pub add_topper: bool,

    #[garde(length(max = 300))]
    #[serde(default)]
    pub product: String,

    #[garde(length(max = 300))]
    #[serde(default)]
    pub topper: String,

    #[garde(length(max = 100))]
    #[serde(default)]
    pub storage: String,

    #[garde(length(max = 100))]
    #[serde(default)]
    pub packaging_size: String,

    #[garde(length(max = 100))]
    #[serde(default)]
    pub shelf_life: String,

    #[garde(length(max = 100))]
    #[serde(default)]
    pub topper_storage: String,

    #[garde(length(max = 100))]
    #[serde(default)]
    pub topper_packaging_size: String,

    #[garde(length(max = 100))]
    #[serde(default)]
    pub topper_shelf_life: String,

    #[garde(length(max = 100))]
    #[serde(default)]
    pub pet_name: String,

    #[garde(length(max = 100))]
    #[serde(default)]
    pub breed: String,

    #[garde(length(max = 10))]
    #[serde(default)]
    pub years: String,

    #[garde(length(max = 10))]
    #[serde(default)]
    pub months: String,

    #[garde(length(max = 20))]
    #[serde(default)]
    pub weight: String,
}

/// One row of a top-products ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RankedProduct {
    pub id: Uuid,
    pub brand: String,
    pub product_name: String,
    pub category: String,
    pub flavors: Option<String>,
    pub image_url: Option<String>,
    pub product_url: Option<String>,
    pub processing: String,
    pub score: f64,
    pub classification: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_score_endpoints() {
        let best = ScoringFactor::new(0.0, -20.0, "Raw Food");
        assert_eq!(best.score, 100);
        let worst = ScoringFactor::new(-20.0, -20.0, "other");
        assert_eq!(worst.score, 0);
    }

    #[test]
    fn test_factor_score_truncates_toward_zero() {
        // -3.25 of -17 is a score of 80.88..., truncated to 80.
        let factor = ScoringFactor::new(-3.25, -17.0, "Lightly Cooked (Not Frozen)");
        assert_eq!(factor.score, 80);
    }

    #[test]
    fn test_classification_display() {
        assert_eq!(ScoreClassification::AtRisk.to_string(), "At Risk");
        assert_eq!(ScoreClassification::Optimal.to_string(), "Optimal");
    }

    #[test]
    fn test_classification_serializes_with_space() {
        let json = serde_json::to_string(&ScoreClassification::AtRisk).unwrap();
        assert_eq!(json, "\"At Risk\"");
    }

    #[test]
    fn test_not_found_breakdown() {
        let breakdown = ScoreBreakdown::not_found();
        assert_eq!(breakdown.score, 0.0);
        assert_eq!(breakdown.classification, ScoreClassification::AtRisk);
        assert!(breakdown.deductions.is_empty());
        assert!(breakdown.micro_score.is_none());
    }
}
