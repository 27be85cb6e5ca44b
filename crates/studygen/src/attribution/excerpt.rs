//! Extractive evidence excerpts.
//!
//! An excerpt is a verbatim slice of the winning page centred on the first question keyword that
//! occurs in it. Windows are measured in characters and clipped windows are marked with
//! [`ELLIPSIS`].

use super::*;

/// Default number of leading question keywords tried when locating the excerpt anchor.
pub const DEFAULT_EXCERPT_KEYWORDS: usize = 8;

/// Default number of characters kept on each side of the anchor.
pub const DEFAULT_WINDOW: usize = 280;

/// Marker placed on a side of the excerpt where page text was cut off.
pub const ELLIPSIS: &str = "…";

/// Builds an excerpt of `page_text` supporting `question`.
///
/// Keywords are tried in question order, at most `max_keywords` of them, and the first one that
/// occurs anywhere in the page anchors the excerpt at its first occurrence `p`. The excerpt is the
/// text from `p - window` to `p + window` (clamped to the page), trimmed, with `"… "` prepended
/// when the start was clipped and `" …"` appended when the end was clipped.
///
/// When no keyword occurs, the first `2 * window` characters of the page are returned trimmed.
/// An empty page yields an empty excerpt.
///
/// The page text kept is at most `2 * window` characters. Each clipped side adds the two-character
/// marker, so the whole excerpt is at most `2 * window + 4` characters long.
///
/// # Examples
///
/// ```
/// use studygen::attribution::excerpt;
///
/// let text = "Chapter one. Osmosis moves water across membranes.";
/// assert_eq!(excerpt(text, "What drives osmosis?", 8, 10), "… pter one. Osmosis mo …");
/// assert_eq!(excerpt(text, "unrelated query", 8, 10), "Chapter one. Osmosis");
/// ```
pub fn excerpt(page_text: &str, question: &str, max_keywords: usize, window: usize) -> String {
  if page_text.is_empty() {
    return String::new();
  }

  let lowered = page_text.to_ascii_lowercase();
  let anchor = keywords(question)
    .into_iter()
    .take(max_keywords)
    .find_map(|keyword| lowered.find(&keyword).map(|pos| (keyword, pos)));

  let Some((keyword, pos)) = anchor else {
    trace!("No question keyword on page, using lead-in");
    return char_slice(page_text, 0, window.saturating_mul(2)).trim().to_string();
  };
  trace!("Excerpt anchored on \"{}\" at byte {}", keyword, pos);

  // ASCII lowering keeps byte offsets aligned with the original text.
  let anchor_char = page_text[..pos].chars().count();
  let total_chars = page_text.chars().count();
  let start = anchor_char.saturating_sub(window);
  let end = anchor_char.saturating_add(window).min(total_chars);

  let mut snippet = String::new();
  if start > 0 {
    snippet.push_str(ELLIPSIS);
    snippet.push(' ');
  }
  snippet.push_str(char_slice(page_text, start, end).trim());
  if end < total_chars {
    snippet.push(' ');
    snippet.push_str(ELLIPSIS);
  }
  snippet
}

/// Slices `text` by character positions `[start, end)`, clamping both to the text.
fn char_slice(text: &str, start: usize, end: usize) -> &str {
  let byte_at = |chars: usize| text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i);
  let (start, end) = (byte_at(start), byte_at(end));
  if start >= end {
    return "";
  }
  &text[start..end]
}
