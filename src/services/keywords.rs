//! Generic keyword-evidence scorer behind the processing, sourcing, and
//! category classifiers.
//!
//! A [`KeywordTable`] holds ordered categories, each with main and supporting
//! phrase lists. Classification scores every phrase occurrence in normalized
//! text, flips the sign when a negator appears in the token window around the
//! match, and selects the highest-scoring category with deterministic
//! tie-breaking.

use regex::Regex;
use tracing::debug;

use crate::models::classification::{ClassificationResult, Confidence};
use crate::services::text::normalize;

/// Points for an unnegated main-phrase occurrence.
const MAIN_MATCH_POINTS: i32 = 5;
/// Points for a negated main-phrase occurrence.
const MAIN_NEGATED_POINTS: i32 = -3;
/// Points for an unnegated supporting-phrase occurrence.
const SUPPORT_MATCH_POINTS: i32 = 2;
/// Points for a negated supporting-phrase occurrence.
const SUPPORT_NEGATED_POINTS: i32 = -1;
/// Tokens of left context examined for negators, in addition to the first
/// token of the match itself.
const NEGATION_WINDOW_TOKENS: usize = 4;
/// Winning score at or above which confidence is high.
const HIGH_CONFIDENCE_MIN: i32 = 7;
/// Winning score at or above which confidence is medium.
const MEDIUM_CONFIDENCE_MIN: i32 = 4;

/// Negation cues checked by substring containment against the joined window.
/// Containment is deliberate: "un" catches "unprocessed" and also flips
/// phrases such as "uncooked" that begin with a negator prefix.
pub const NEGATORS: &[&str] = &[
    "no", "not", "never", "without", "free of", "doesn't", "isn't", "aren't", "non", "un",
];

/// One category definition: label, main phrases, supporting phrases.
/// Phrases must be in normalized form to be matchable; entries that are not
/// (capitalized or punctuated) simply never fire.
pub type CategoryDef = (
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
);

struct Phrase {
    text: &'static str,
    pattern: Regex,
}

impl Phrase {
    fn new(text: &'static str) -> Self {
        // Word-bounded, non-overlapping match over normalized text.
        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(text))).unwrap();
        Self { text, pattern }
    }
}

struct Category {
    label: &'static str,
    main: Vec<Phrase>,
    supporting: Vec<Phrase>,
}

/// Accumulated evidence for one category of a table.
#[derive(Debug, Clone)]
pub struct CategoryEvidence {
    pub label: &'static str,
    pub score: i32,
    /// Count of unnegated main-phrase hits, used to break score ties.
    pub main_hits: u32,
    pub reasons: Vec<String>,
}

/// An ordered keyword table with precompiled phrase patterns.
pub struct KeywordTable {
    categories: Vec<Category>,
}

impl KeywordTable {
    pub fn new(defs: &[CategoryDef]) -> Self {
        let categories = defs
            .iter()
            .map(|(label, main, supporting)| Category {
                label,
                main: main.iter().copied().map(Phrase::new).collect(),
                supporting: supporting.iter().copied().map(Phrase::new).collect(),
            })
            .collect();
        Self { categories }
    }

    /// Classify raw label text against this table.
    ///
    /// Empty input, and input where no category accumulates a positive
    /// score, both yield [`ClassificationResult::unclassified`].
    pub fn classify(&self, text: &str) -> ClassificationResult {
        if text.is_empty() {
            return ClassificationResult::unclassified();
        }
        let normalized = normalize(text);
        let mut evidence = self.score(&normalized);
        match select_winner(&evidence) {
            Some(idx) => {
                let winner = evidence.swap_remove(idx);
                ClassificationResult {
                    score: winner.score,
                    confidence: confidence_band(winner.score),
                    label: Some(winner.label.to_string()),
                    reasons: winner.reasons,
                }
            }
            None => {
                let scored: Vec<String> = evidence
                    .iter()
                    .filter(|e| e.score != 0)
                    .map(|e| format!("{}={}", e.label, e.score))
                    .collect();
                debug!(evidence = ?scored, "no category reached a positive score");
                ClassificationResult::unclassified()
            }
        }
    }

    /// Score every category against already-normalized text.
    pub fn score(&self, text: &str) -> Vec<CategoryEvidence> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        self.categories
            .iter()
            .map(|category| {
                let mut score = 0;
                let mut main_hits = 0;
                let mut reasons = Vec::new();
                for phrase in &category.main {
                    for m in phrase.pattern.find_iter(text) {
                        if match_negated(text, &tokens, m.start()) {
                            score += MAIN_NEGATED_POINTS;
                            reasons.push(format!("Negated main keyword '{}'", phrase.text));
                        } else {
                            score += MAIN_MATCH_POINTS;
                            main_hits += 1;
                            reasons.push(format!("Main keyword '{}'", phrase.text));
                        }
                    }
                }
                for phrase in &category.supporting {
                    for m in phrase.pattern.find_iter(text) {
                        if match_negated(text, &tokens, m.start()) {
                            score += SUPPORT_NEGATED_POINTS;
                            reasons.push(format!("Negated supporting keyword '{}'", phrase.text));
                        } else {
                            score += SUPPORT_MATCH_POINTS;
                            reasons.push(format!("Supporting keyword '{}'", phrase.text));
                        }
                    }
                }
                CategoryEvidence {
                    label: category.label,
                    score,
                    main_hits,
                    reasons,
                }
            })
            .collect()
    }
}

/// Whether a match starting at `byte_offset` sits in a negated window.
///
/// The window is the match's first token plus up to four tokens before it;
/// a negator anywhere in the joined window text (substring, not whole-token)
/// flips the match.
fn match_negated(text: &str, tokens: &[&str], byte_offset: usize) -> bool {
    let token_idx = text[..byte_offset].split_whitespace().count();
    let window_start = token_idx.saturating_sub(NEGATION_WINDOW_TOKENS);
    let window = tokens[window_start..=token_idx].join(" ");
    NEGATORS.iter().any(|neg| window.contains(neg))
}

/// Index of the winning category: maximum positive score, ties broken by
/// more unnegated main hits, then by table order.
fn select_winner(evidence: &[CategoryEvidence]) -> Option<usize> {
    let max_score = evidence.iter().map(|e| e.score).max()?;
    if max_score <= 0 {
        return None;
    }
    let mut best: Vec<usize> = evidence
        .iter()
        .enumerate()
        .filter(|(_, e)| e.score == max_score)
        .map(|(idx, _)| idx)
        .collect();
    // Stable sort keeps table order among equal main-hit counts.
    best.sort_by(|&a, &b| evidence[b].main_hits.cmp(&evidence[a].main_hits));
    best.first().copied()
}

fn confidence_band(score: i32) -> Confidence {
    if score >= HIGH_CONFIDENCE_MIN {
        Confidence::High
    } else if score >= MEDIUM_CONFIDENCE_MIN {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> KeywordTable {
        KeywordTable::new(&[
            ("Alpha", &["alpha blend"], &["first", "shared cue"]),
            ("Beta", &["beta blend"], &["second", "shared cue"]),
        ])
    }

    #[test]
    fn test_main_and_supporting_points() {
        let table = sample_table();
        let result = table.classify("alpha blend with first pick");
        assert_eq!(result.label.as_deref(), Some("Alpha"));
        assert_eq!(result.score, 7); // 5 main + 2 supporting
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(
            result.reasons,
            vec![
                "Main keyword 'alpha blend'".to_string(),
                "Supporting keyword 'first'".to_string(),
            ]
        );
    }

    #[test]
    fn test_negated_main_scores_negative() {
        let table = sample_table();
        let evidence = table.score("not alpha blend");
        assert_eq!(evidence[0].score, -3);
        assert_eq!(evidence[0].main_hits, 0);
        assert_eq!(evidence[0].reasons, vec!["Negated main keyword 'alpha blend'"]);
    }

    #[test]
    fn test_negator_four_tokens_back_applies() {
        let table = sample_table();
        // "no" is 4 tokens before the match start: still inside the window.
        let evidence = table.score("no one two three alpha blend");
        assert_eq!(evidence[0].score, -3);
    }

    #[test]
    fn test_negator_five_tokens_back_ignored() {
        let table = sample_table();
        let evidence = table.score("no one two three four alpha blend");
        assert_eq!(evidence[0].score, 5);
    }

    #[test]
    fn test_negator_inside_match_first_token() {
        // The window includes the first matched token, so a negator prefix
        // inside that token flips the match.
        let table = KeywordTable::new(&[("Gamma", &["unfiltered blend"], &[])]);
        let evidence = table.score("pure unfiltered blend");
        assert_eq!(evidence[0].score, -3);
    }

    #[test]
    fn test_negator_substring_containment() {
        // "snow" contains "no": containment is over the joined window text.
        let table = sample_table();
        let evidence = table.score("snow alpha blend");
        assert_eq!(evidence[0].score, -3);
    }

    #[test]
    fn test_tie_broken_by_main_hits() {
        let table = sample_table();
        // Alpha: supporting only (+2 +2); Beta: nothing. Then give Beta a
        // tie on score but via main evidence.
        let evidence = table.score("shared cue and second and first");
        // Alpha: shared cue +2, first +2 = 4; Beta: shared cue +2, second +2 = 4.
        assert_eq!(evidence[0].score, evidence[1].score);
        let result = table.classify("shared cue and second and first");
        // Equal scores, equal main hits: table order wins.
        assert_eq!(result.label.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_tie_prefers_more_main_hits() {
        let table = KeywordTable::new(&[
            ("Alpha", &[], &["one cue", "two cue"]),
            ("Beta", &["beta blend"], &["minor cue"]),
        ]);
        // Alpha: two supporting hits = 4. Beta: one main hit (+5) and one
        // negated supporting hit (-1) = 4. Beta's main evidence wins the tie
        // even though Alpha comes first in the table.
        let result = table.classify("one cue two cue beta blend no minor cue");
        assert_eq!(result.label.as_deref(), Some("Beta"));
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_no_positive_score_is_unclassified() {
        let table = sample_table();
        let result = table.classify("never alpha blend");
        assert_eq!(result.label, None);
        assert_eq!(result.score, 0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_empty_text_is_unclassified() {
        let table = sample_table();
        let result = table.classify("");
        assert_eq!(result.label, None);
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn test_punctuation_only_text_is_unclassified() {
        let table = sample_table();
        let result = table.classify("?! -- ...");
        assert_eq!(result.label, None);
    }

    #[test]
    fn test_repeated_phrase_scores_each_occurrence() {
        let table = sample_table();
        let evidence = table.score("first things first");
        assert_eq!(evidence[0].score, 4);
        assert_eq!(evidence[0].reasons.len(), 2);
    }

    #[test]
    fn test_word_boundary_blocks_partial_match() {
        let table = KeywordTable::new(&[("Gamma", &["raw"], &[])]);
        let evidence = table.score("strawberry flavor");
        assert_eq!(evidence[0].score, 0);
    }

    #[test]
    fn test_confidence_bands() {
        assert_eq!(confidence_band(7), Confidence::High);
        assert_eq!(confidence_band(6), Confidence::Medium);
        assert_eq!(confidence_band(4), Confidence::Medium);
        assert_eq!(confidence_band(3), Confidence::Low);
        assert_eq!(confidence_band(0), Confidence::Low);
        assert_eq!(confidence_band(-3), Confidence::Low);
    }
}
