//! Keyword extraction for lexical matching.
//!
//! Text is lowercased and scanned for maximal runs of ASCII alphanumerics. A run is a keyword
//! only if it is made of letters alone, is at least [`MIN_KEYWORD_LEN`] long, and is not a
//! stopword. Runs containing a digit are discarded whole rather than split.

use super::*;

/// Shortest token kept as a keyword.
pub const MIN_KEYWORD_LEN: usize = 4;

/// Closed list of function words that carry no topical signal.
///
/// Entries shorter than [`MIN_KEYWORD_LEN`] can never survive the length filter, but the list is
/// kept whole so it reads as the complete vocabulary being excluded.
pub const STOPWORDS: &[&str] = &[
  "the", "a", "an", "and", "or", "to", "of", "in", "on", "for", "with", "as", "by", "is", "are",
  "was", "were", "be", "been", "this", "that", "these", "those", "it", "its", "from", "at", "into",
  "over", "under", "than", "then", "also", "such",
];

lazy_static! {
  /// Maximal runs of ASCII letters and digits.
  static ref TOKEN_PATTERN: Regex = Regex::new(r"[a-z0-9]+").unwrap();
}

/// Extracts the ordered keyword sequence of `text`.
///
/// Order and multiplicity follow the source text; nothing is stemmed or deduplicated.
///
/// # Examples
///
/// ```
/// use studygen::attribution::keywords;
///
/// assert_eq!(keywords("What does photosynthesis produce?"), vec![
///   "what",
///   "does",
///   "photosynthesis",
///   "produce"
/// ]);
/// assert!(keywords("").is_empty());
/// ```
pub fn keywords(text: &str) -> Vec<String> {
  let lowered = text.to_ascii_lowercase();
  TOKEN_PATTERN
    .find_iter(&lowered)
    .map(|m| m.as_str())
    .filter(|token| token.len() >= MIN_KEYWORD_LEN)
    .filter(|token| token.bytes().all(|b| b.is_ascii_alphabetic()))
    .filter(|token| !STOPWORDS.contains(token))
    .map(str::to_string)
    .collect()
}
