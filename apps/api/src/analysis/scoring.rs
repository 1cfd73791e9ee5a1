//! Deterministic resume score. Pure function of text, detected keywords,
//! and parsed fields; explainable rule-by-rule.

use crate::analysis::models::{field_present, ParsedFields};

const BASE_SCORE: i64 = 50;
const EXPERIENCE_BONUS: i64 = 10;
const EDUCATION_BONUS: i64 = 5;
const KEYWORD_BONUS_CAP: i64 = 25;
const KEYWORD_BONUS_EACH: i64 = 3;
const LENGTH_BONUS: i64 = 10;
const LENGTH_BONUS_CHARS: usize = 1000;
const SHORT_TEXT_CHARS: usize = 200;
const SHORT_TEXT_PENALTY: i64 = 20;
const SHORT_TEXT_FLOOR: i64 = 20;

/// Computes the 0–100 score. Lengths are counted in characters. The
/// short-text penalty is additive: it subtracts from the accumulated score
/// and the result is floored at 20, so a zero-bonus short text scores 30.
pub fn compute_score(text: &str, keywords: &[String], parsed: &ParsedFields) -> u32 {
    let mut score = BASE_SCORE;

    if field_present(parsed, "experience") {
        score += EXPERIENCE_BONUS;
    }
    if field_present(parsed, "education") {
        score += EDUCATION_BONUS;
    }

    score += (keywords.len() as i64 * KEYWORD_BONUS_EACH).min(KEYWORD_BONUS_CAP);

    let chars = text.chars().count();
    if chars > LENGTH_BONUS_CHARS {
        score += LENGTH_BONUS;
    }
    if chars < SHORT_TEXT_CHARS {
        score = (score - SHORT_TEXT_PENALTY).max(SHORT_TEXT_FLOOR);
    }

    score.clamp(0, 100) as u32
}
