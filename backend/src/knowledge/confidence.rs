//! Confidence heuristic for remote answers
//!
//! Not a calibrated probability: a fixed base plus bonuses for length,
//! institution mentions, and the absence of hedging phrases.

use once_cell::sync::Lazy;
use regex::Regex;

/// Starting score
pub const BASE_CONFIDENCE: u8 = 85;

/// Upper clamp
pub const MAX_CONFIDENCE: u8 = 95;

const LENGTH_THRESHOLD: usize = 200;
const LENGTH_BONUS: u8 = 5;
const INSTITUTION_BONUS: u8 = 5;
const CERTAINTY_BONUS: u8 = 3;
const INSTITUTION_SHORT_NAME: &str = "mitk";

static UNCERTAINTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)sorry|don't know|cannot").expect("static regex"));

/// Score an answer
///
/// Deterministic for identical input; always within `[0, MAX_CONFIDENCE]`.
pub fn score_confidence(text: &str) -> u8 {
    let mut confidence = BASE_CONFIDENCE;
    if text.chars().count() > LENGTH_THRESHOLD {
        confidence += LENGTH_BONUS;
    }
    if text.to_lowercase().contains(INSTITUTION_SHORT_NAME) {
        confidence += INSTITUTION_BONUS;
    }
    if !UNCERTAINTY.is_match(text) {
        confidence += CERTAINTY_BONUS;
    }
    confidence.min(MAX_CONFIDENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_uncertain_answer_gets_base() {
        assert_eq!(score_confidence("Sorry, I don't know."), 85);
    }

    #[test]
    fn test_short_certain_answer() {
        assert_eq!(score_confidence("Yes."), 88);
    }

    #[test]
    fn test_institution_mention_is_case_insensitive() {
        assert_eq!(score_confidence("Visit Mitk soon."), 93);
    }

    #[test]
    fn test_all_bonuses_are_clamped() {
        let long = format!("MITK offers {}", "great programs. ".repeat(20));
        assert_eq!(score_confidence(&long), MAX_CONFIDENCE);
    }

    #[test]
    fn test_uncertainty_pattern_variants() {
        for text in ["SORRY", "I cannot say", "I don't know that"] {
            assert_eq!(score_confidence(text), BASE_CONFIDENCE, "text: {}", text);
        }
    }

    #[test]
    fn test_bounds_and_determinism() {
        let samples = [
            String::new(),
            "a".repeat(201),
            "sorry ".repeat(100),
            "mitk".to_string(),
            "ಕನ್ನಡ ".repeat(50),
        ];
        for sample in &samples {
            let first = score_confidence(sample);
            assert!(first <= MAX_CONFIDENCE);
            assert_eq!(first, score_confidence(sample));
        }
    }
}
