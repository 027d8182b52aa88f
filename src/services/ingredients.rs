//! Ingredient macro-quality classification.
//!
//! Each ingredient is matched by plain substring against macronutrient
//! keyword tiers, consulting macros in priority order and tiers from best
//! to worst; the first hit decides that ingredient. Across a whole list the
//! best tier seen per macro wins. Macro priority means an ingredient like
//! "chicken fat" lands on protein (via "chicken") before the fat table is
//! ever consulted.

use crate::models::classification::{MacroQualityProfile, QualityTier};

type TierKeywords = (QualityTier, &'static [&'static str]);

const PROTEIN_TIERS: &[TierKeywords] = &[
    (QualityTier::High, &["chicken meal", "turkey meal", "salmon", "lamb meal"]),
    (QualityTier::Good, &["egg", "duck", "chicken"]),
    (QualityTier::Moderate, &["meat meal"]),
    (QualityTier::Low, &["by-product meal", "poultry by-product"]),
];

const FAT_TIERS: &[TierKeywords] = &[
    (QualityTier::High, &["chicken fat", "fish oil", "flaxseed oil"]),
    (QualityTier::Good, &["vegetable oil", "canola oil"]),
    (QualityTier::Low, &["animal fat", "tallow"]),
];

const FIBER_TIERS: &[TierKeywords] = &[
    (QualityTier::High, &["apple fiber", "beet pulp", "pumpkin fiber"]),
    (QualityTier::Good, &["cellulose"]),
    (QualityTier::Moderate, &["pea fiber"]),
    (QualityTier::Low, &["wheat bran"]),
];

const CARBOHYDRATE_TIERS: &[TierKeywords] = &[
    (QualityTier::High, &["pumpkin", "sweet potato", "brown rice"]),
    (QualityTier::Good, &["oatmeal", "barley"]),
    (QualityTier::Moderate, &["rice", "potato"]),
    (QualityTier::Low, &["corn gluten meal", "wheat", "soybean meal", "corn"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MacroNutrient {
    Protein,
    Fat,
    Fiber,
    Carbohydrate,
}

/// Lookup order across macros. An ingredient that matches an earlier macro
/// never reaches a later one.
const MACRO_PRIORITY: &[(MacroNutrient, &[TierKeywords])] = &[
    (MacroNutrient::Protein, PROTEIN_TIERS),
    (MacroNutrient::Fat, FAT_TIERS),
    (MacroNutrient::Fiber, FIBER_TIERS),
    (MacroNutrient::Carbohydrate, CARBOHYDRATE_TIERS),
];

fn find_macro_and_tier(ingredient: &str) -> Option<(MacroNutrient, QualityTier)> {
    let lowered = ingredient.to_lowercase();
    let ing = lowered.trim();
    for (nutrient, tiers) in MACRO_PRIORITY {
        for (tier, keywords) in *tiers {
            for kw in *keywords {
                if ing.contains(kw) {
                    return Some((*nutrient, *tier));
                }
            }
        }
    }
    None
}

/// Classify an ingredient list into per-macro quality tiers, keeping the
/// best tier observed for each macro. Unmatched macros stay Unknown.
pub fn classify_ingredient_list(ingredients: &[&str]) -> MacroQualityProfile {
    let mut profile = MacroQualityProfile::default();
    for ingredient in ingredients {
        if let Some((nutrient, tier)) = find_macro_and_tier(ingredient) {
            let slot = match nutrient {
                MacroNutrient::Protein => &mut profile.protein,
                MacroNutrient::Fat => &mut profile.fat,
                MacroNutrient::Fiber => &mut profile.fiber,
                MacroNutrient::Carbohydrate => &mut profile.carbohydrate,
            };
            if tier.rank() > slot.rank() {
                *slot = tier;
            }
        }
    }
    profile
}
