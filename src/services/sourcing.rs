//! Sourcing-grade classification: organic human grade, human grade, or
//! feed grade. Repeated phrase entries score twice per occurrence, matching
//! the corpus the lists were tuned on.

use once_cell::sync::Lazy;

use crate::models::classification::ClassificationResult;
use crate::services::keywords::KeywordTable;

static SOURCING_TABLE: Lazy<KeywordTable> = Lazy::new(|| {
    KeywordTable::new(&[
        (
            "Human Grade (organic)",
            &["organic human grade"],
            &[
                "usda organic",
                "certified organic",
                "organic meat",
                "organic vegetables",
                "organic certified",
                "human grade organic",
                "usda organic",
                "certified organic",
                "organic meat",
                "organic vegetables",
                "organic certified",
                "human grade organic",
                "made with organic ingredients",
                "organic certified facility",
                "organic produce",
                "organically sourced",
                "all organic formula",
                "non gmo and organic",
                "organic pet food",
                "100 organic",
                "premium organic ingredients",
                "organic human grade food",
                "organic superfoods",
                "clean organic label",
                "small batch organic",
                "organic chicken",
                "organic beef",
                "organic lamb",
                "organic turkey",
                "humanely raised organic",
                "organic whole foods",
            ],
        ),
        (
            "Human Grade",
            &["human grade"],
            &[
                "human grade ingredients",
                "human quality",
                "usda inspected",
                "fit for human consumption",
                "human edible",
                "made in human food facility",
                "made in usda inspected facility",
                "cooked in human grade kitchens",
                "made in human food kitchens",
                "crafted to human food standards",
                "made in usda kitchen",
                "inspected for human consumption",
                "food grade facility",
                "premium human grade meat",
                "prepared in human quality facilities",
                "meets human food safety standards",
                "small batch human grade",
                "restaurant quality",
                "human approved formulas",
                "made with human edible meat",
                "real food for dogs",
                "human grade sourcing",
                "home cooked quality",
            ],
        ),
        (
            "Feed Grade",
            &["feed grade"],
            &[
                "feed quality",
                "animal feed",
                "not for human consumption",
                "rendered meat",
                "by products",
                "meat meal",
                "feed safe",
                "pet feed",
                "feed quality",
                "animal feed",
                "not for human consumption",
                "rendered meat",
                "by products",
                "meat meal",
                "pet feed",
                "feed grade ingredients",
                "feed use only",
                "not usda inspected",
                "4d meat",
                "meat by product meal",
                "not human edible",
                "factory scraps",
                "feed grade facility",
                "waste derived protein",
                "animal digest",
                "feed standard",
                "bulk animal feed",
                "meat and bone meal",
                "slaughterhouse waste",
                "unfit for human consumption",
            ],
        ),
    ])
});

/// Infer the sourcing grade from raw label text.
pub fn classify_sourcing(text: &str) -> ClassificationResult {
    SOURCING_TABLE.classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classification::Confidence;

    #[test]
    fn test_organic_human_grade() {
        // "organic human grade" also contains "human grade"; both classes
        // score one main hit, and table order breaks the tie for organic.
        let result = classify_sourcing("organic human grade chicken");
        assert_eq!(result.label.as_deref(), Some("Human Grade (organic)"));
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_feed_grade_with_support() {
        let result = classify_sourcing("feed grade ingredients");
        assert_eq!(result.label.as_deref(), Some("Feed Grade"));
        assert_eq!(result.score, 7);
        assert_eq!(result.confidence, Confidence::High);
    }

    #[test]
    fn test_duplicate_entry_scores_twice() {
        // "usda organic" appears twice in the supporting list.
        let result = classify_sourcing("usda organic kibble");
        assert_eq!(result.label.as_deref(), Some("Human Grade (organic)"));
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_supporting_only_is_low_confidence() {
        let result = classify_sourcing("made with organic ingredients");
        assert_eq!(result.label.as_deref(), Some("Human Grade (organic)"));
        assert_eq!(result.score, 2);
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn test_empty_text() {
        let result = classify_sourcing("");
        assert_eq!(result.label, None);
    }
}
