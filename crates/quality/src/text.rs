//! Plain-text measurements shared by the dimension scorers.

use crate::rules::NamedPattern;

/// Non-blank paragraphs, split on empty lines.
pub fn paragraphs(content: &str) -> impl Iterator<Item = &str> {
    content.split("\n\n").filter(|p| !p.trim().is_empty())
}

/// Whitespace-delimited word count.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Non-empty, trimmed sentences.
pub fn sentences<'t>(content: &'t str, boundary: &'t NamedPattern) -> impl Iterator<Item = &'t str> {
    boundary.split(content).map(str::trim).filter(|s| !s.is_empty())
}

/// How many of `terms` occur in `lowered` (already lowercased).
pub fn distinct_terms_present(lowered: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| lowered.contains(*term)).count()
}

/// Round to a fixed number of decimal places.
///
/// Rounds the exact binary value, ties to even, so `0.25` becomes `0.2`
/// and `2.675` (stored just below the tie) becomes `2.67`.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
