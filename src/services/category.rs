//! Food-category classification: raw, fresh, dry, or wet food.
//!
//! Some table entries carry capitalization or punctuation that normalized
//! text can never contain; they are kept verbatim rather than cleaned up so
//! scores stay identical for the corpus the lists were tuned on.

use once_cell::sync::Lazy;

use crate::models::classification::ClassificationResult;
use crate::services::keywords::KeywordTable;

static CATEGORY_TABLE: Lazy<KeywordTable> = Lazy::new(|| {
    KeywordTable::new(&[
        (
            "Raw Food",
            &["raw"],
            &[
                "raw food",
                "raw frozen",
                "raw patties",
                "raw nuggets",
                "uncooked",
                "minimally processed",
                "primal raw",
                "nature's variety instinct raw",
                "raw meal",
                "raw recipe",
                "raw medallions",
                "frozen raw dog food",
                "raw blend",
                "raw coated",
                "raw bites",
                "raw infused",
                "raw bones",
                "raw mix ins",
                "raw meat formula",
                "raw beef blend",
                "barf diet",
                "biologically appropriate raw food",
            ],
        ),
        (
            "Fresh Food",
            &["fresh"],
            &[
                "fresh food",
                "gently cooked",
                "lightly cooked",
                "refrigerated",
                "homemade style",
                "fresh food",
                "gently cooked",
                "lightly cooked",
                "fresh frozen",
                "fresh meals, human grade meals",
                "cooked fresh",
                "fresh pet food",
                "whole food diet",
                "fridge-stored",
                "fresh delivery",
                "real food for dogs",
                "refrigerated dog food",
                "made fresh weekly",
                "freshly prepared",
                "gently prepared",
                "made fresh",
                "home style dog food",
                "cooked to order",
                "fresh from our kitchen",
            ],
        ),
        (
            "Dry Food",
            &["dry"],
            &[
                "Kibble",
                "dry food",
                "dry kibble",
                "crunchy bites",
                "oven baked dry",
                "extruded",
                "dry formula",
                "premium dry",
                "grain free kibble",
                "dry food",
                "kibble",
                "crunchy bites",
                "dry dog formula",
                "dehydrated nuggets",
                "dry meal",
                "extuded food",
                "dry blend",
                "baked kibble",
                "shelf stable kibble",
                "grain free kibble",
                "complete dry food",
                "balanced dry food",
                "oven baked bites",
                "dry protein blend",
                "everyday kibble",
                "traditional kibble",
                "premium dry dog food",
                "dry crunch",
                "vet recommended kibble",
                "hard dog food",
                "biscuit style food",
            ],
        ),
        (
            "Wet Food",
            &["wet"],
            &[
                "canned",
                "wet food",
                "slow cooked in gravy",
                "shelf stable pouch",
                "stew like consistency",
                "gently cooked and sealed",
                "cooked in the can",
                "retort pouch",
                "cooked for safety",
                "moisture rich food",
                "wet food",
                "canned food",
                "moist food",
                "stewed",
                "loaf",
                "pate",
                "broth",
                "gravy",
                "chunk in gravy",
                "shredded in broth",
                "homestyle stew",
                "meat chunks in jelly",
                "pouch food",
                "pull-tab can",
                "shelf stable wet food",
                "slow cooked",
                "canned entrée",
                "meat loaf style",
                "toppers in gravy",
                "wet entree",
                "classic canned dog food",
                "wet food",
                "canned food",
                "moist food",
                "pâté",
                "stew style",
                "gravy rich",
                "soft dog food",
                "tender chunks",
                "loaf style",
                "meaty stew",
                "canned recipe",
                "hydrated meals",
                "slow cooked wet food",
                "premium canned dog food",
                "savory wet meal",
                "juicy dog food",
                "ready to serve wet",
                "pull tab can",
                "broth infused",
                "vet recommended wet food",
                "wet entree",
                "complete wet food",
            ],
        ),
    ])
});

/// Infer the food category from raw label text.
pub fn classify_category(text: &str) -> ClassificationResult {
    CATEGORY_TABLE.classify(text)
}
