//! Location text similarity scoring
//!
//! Ranks candidate listings against a free-text location query when a
//! search returns no direct matches. Combines character-trigram Jaccard
//! overlap with a UK-postcode-aware override: listings in the same
//! postcode area are a much stronger "nearby" signal than raw character
//! overlap.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Score when both strings share the same postcode area.
const AREA_MATCH_SCORE: f64 = 0.95;

/// Score when one string is a bare area code contained in the other.
const AREA_CONTAINED_SCORE: f64 = 0.8;

lazy_static! {
    /// One or two letters immediately followed by a digit, at a word
    /// boundary ("BN" in "BN1 3AA", "SW" in "SW1A 1AA").
    static ref AREA_CODE: Regex =
        Regex::new(r"(?i)\b([a-z]{1,2})\d").expect("area code pattern is valid");
}

/// Normalize free text for comparison.
///
/// Lowercases, strips everything that is not an ASCII letter, digit or
/// whitespace, and trims the ends. Idempotent.
pub fn normalize(s: &str) -> String {
    let lowered = s.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();
    kept.trim().to_string()
}

/// Extract the set of unique character trigrams from `s`.
///
/// The input is padded with one space on each side so that word
/// boundaries contribute trigrams too. An empty string yields an empty
/// set.
pub fn trigrams(s: &str) -> HashSet<String> {
    let padded: Vec<char> = format!(" {} ", s).chars().collect();
    let mut out = HashSet::new();
    for window in padded.windows(3) {
        out.insert(window.iter().collect());
    }
    out
}

/// Jaccard similarity of two sets: |intersection| / |union|.
///
/// Returns 0.0 when both sets are empty rather than dividing by zero.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let inter = a.intersection(b).count();
    let union = a.len() + b.len() - inter;
    if union == 0 {
        0.0
    } else {
        inter as f64 / union as f64
    }
}

/// Extract the postcode area from a string, if present.
///
/// Returns the lowercased letters of the first "1-2 letters then a
/// digit" match, e.g. `Some("bn")` for "Brighton BN1 3AA".
pub fn extract_area_code(s: &str) -> Option<String> {
    AREA_CODE.captures(s).map(|caps| caps[1].to_lowercase())
}

/// Compute a similarity score in [0, 1] between two free-text strings.
///
/// Exact matches score 1.0, a shared postcode area scores 0.95, a bare
/// area code contained in the other string scores 0.8, and everything
/// else falls back to trigram Jaccard similarity. Empty or punctuation-only
/// input scores 0.0. Never fails.
pub fn compute_similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let area_a = extract_area_code(&a);
    let area_b = extract_area_code(&b);
    match (&area_a, &area_b) {
        (Some(x), Some(y)) if x == y => return AREA_MATCH_SCORE,
        (Some(x), None) if b.contains(x.as_str()) => return AREA_CONTAINED_SCORE,
        (None, Some(y)) if a.contains(y.as_str()) => return AREA_CONTAINED_SCORE,
        _ => {}
    }

    jaccard(&trigrams(&a), &trigrams(&b))
}
