use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Confidence band for a keyword classification, derived from the winning
/// evidence score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Outcome of classifying a span of label text against a keyword table.
///
/// `label` is `None` when no category accumulated positive evidence; the
/// neutral result carries score 0, low confidence, and no reasons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: Option<String>,
    pub score: i32,
    pub confidence: Confidence,
    pub reasons: Vec<String>,
}

impl ClassificationResult {
    /// Neutral result for empty input or inconclusive evidence.
    pub fn unclassified() -> Self {
        Self {
            label: None,
            score: 0,
            confidence: Confidence::Low,
            reasons: Vec::new(),
        }
    }

    /// The winning label, or "" when unclassified.
    pub fn label_or_empty(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

/// Ingredient quality tier for one macronutrient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq)]
pub enum QualityTier {
    High,
    Good,
    Moderate,
    Low,
    Unknown,
}

impl QualityTier {
    /// Rank used for best-tier comparison across an ingredient list.
    pub fn rank(self) -> u8 {
        match self {
            QualityTier::High => 4,
            QualityTier::Good => 3,
            QualityTier::Moderate => 2,
            QualityTier::Low => 1,
            QualityTier::Unknown => 0,
        }
    }
}

/// Best observed quality tier per macronutrient across an ingredient list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroQualityProfile {
    pub protein: QualityTier,
    pub fat: QualityTier,
    pub fiber: QualityTier,
    pub carbohydrate: QualityTier,
}

impl Default for MacroQualityProfile {
    fn default() -> Self {
        Self {
            protein: QualityTier::Unknown,
            fat: QualityTier::Unknown,
            fiber: QualityTier::Unknown,
            carbohydrate: QualityTier::Unknown,
        }
    }
}

/// Whether label text declares the food nutritionally complete and balanced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq)]
pub enum NutritionalAdequacy {
    Yes,
    No,
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_display_lowercase() {
        assert_eq!(Confidence::High.to_string(), "high");
        assert_eq!(Confidence::Medium.to_string(), "medium");
        assert_eq!(Confidence::Low.to_string(), "low");
    }

    #[test]
    fn test_tier_rank_ordering() {
        assert!(QualityTier::High.rank() > QualityTier::Good.rank());
        assert!(QualityTier::Good.rank() > QualityTier::Moderate.rank());
        assert!(QualityTier::Moderate.rank() > QualityTier::Low.rank());
        assert!(QualityTier::Low.rank() > QualityTier::Unknown.rank());
    }

    #[test]
    fn test_unclassified_is_neutral() {
        let result = ClassificationResult::unclassified();
        assert_eq!(result.label, None);
        assert_eq!(result.score, 0);
        assert_eq!(result.confidence, Confidence::Low);
        assert!(result.reasons.is_empty());
        assert_eq!(result.label_or_empty(), "");
    }
}
