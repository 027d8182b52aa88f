//! Guaranteed-analysis extraction from raw label text.
//!
//! Runs over the text as printed, not the normalized form, because
//! normalization strips the "%" the pattern anchors on. Values stay strings;
//! numeric parsing and defaulting happen at scoring time.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static NUTRIENT_PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(Protein|Fat|Fiber|Moisture|Ash).*?(\d+\.?\d*)%").unwrap());

/// Extract nutrient percentages from guaranteed-analysis text.
///
/// Keys are lowercase nutrient names; a nutrient listed more than once keeps
/// its last value. The dot in the pattern does not cross newlines, so each
/// nutrient pairs with a value on its own line of a printed analysis table.
pub fn extract_guaranteed_analysis(text: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for caps in NUTRIENT_PERCENT_RE.captures_iter(text) {
        values.insert(caps[1].to_lowercase(), caps[2].to_string());
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_analysis_block() {
        let text = "Crude Protein (min) 24%\nCrude Fat (min) 12%\nCrude Fiber (max) 3.5%\nMoisture (max) 10%";
        let values = extract_guaranteed_analysis(text);
        assert_eq!(values.get("protein").map(String::as_str), Some("24"));
        assert_eq!(values.get("fat").map(String::as_str), Some("12"));
        assert_eq!(values.get("fiber").map(String::as_str), Some("3.5"));
        assert_eq!(values.get("moisture").map(String::as_str), Some("10"));
        assert_eq!(values.get("ash"), None);
    }

    #[test]
    fn test_case_insensitive_nutrient_names() {
        let values = extract_guaranteed_analysis("CRUDE PROTEIN 30% crude ash 7%");
        assert_eq!(values.get("protein").map(String::as_str), Some("30"));
        assert_eq!(values.get("ash").map(String::as_str), Some("7"));
    }

    #[test]
    fn test_last_value_wins() {
        let values = extract_guaranteed_analysis("Protein 20%\nProtein 26%");
        assert_eq!(values.get("protein").map(String::as_str), Some("26"));
    }

    #[test]
    fn test_value_must_share_line_with_nutrient() {
        let values = extract_guaranteed_analysis("Protein\n24%");
        assert_eq!(values.get("protein"), None);
    }

    #[test]
    fn test_no_percent_sign_no_match() {
        let values = extract_guaranteed_analysis("Protein 24 g per serving");
        assert!(values.is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_guaranteed_analysis("").is_empty());
    }
}
