//! Label text normalization shared by every keyword classifier.
//!
//! All classifiers operate on the same canonical form: lowercase, punctuation
//! replaced by spaces, whitespace collapsed. Keyword tables are written in
//! this form, so a phrase like "freeze-dried" on a label matches the table
//! entry "freeze dried".

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize raw label text: lowercase, strip punctuation to spaces,
/// collapse whitespace runs, trim. Empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let lowered = text.to_lowercase();
    let depunctuated = NON_WORD_RE.replace_all(&lowered, " ");
    WHITESPACE_RE.replace_all(&depunctuated, " ").trim().to_string()
}
