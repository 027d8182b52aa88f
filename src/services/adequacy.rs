//! Nutritional-adequacy detection: does the label declare the food
//! complete and balanced?
//!
//! Unlike the evidence classifiers this is a plain phrase check with no
//! negation window, so "not complete and balanced" still reads as Yes.
//! The ampersand variant is checked first even though normalization strips
//! "&" before the search runs; it is retained for parity with the phrase
//! list this check was lifted from.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::classification::NutritionalAdequacy;
use crate::services::text::normalize;

static AMPERSAND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bcomplete & balanced\b").unwrap());
static SPELLED_OUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bcomplete and balanced\b").unwrap());

/// Report whether raw label text declares the food complete and balanced.
pub fn infer_nutritional_adequacy(text: &str) -> NutritionalAdequacy {
    let normalized = normalize(text);
    if AMPERSAND_RE.is_match(&normalized) || SPELLED_OUT_RE.is_match(&normalized) {
        NutritionalAdequacy::Yes
    } else {
        NutritionalAdequacy::No
    }
}
