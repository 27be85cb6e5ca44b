//! Picks the page that best matches a question.

use super::*;

/// Default number of leading question keywords used for scoring.
pub const DEFAULT_SCORE_KEYWORDS: usize = 12;

/// Counts the non-overlapping occurrences of every keyword inside `lowered_text`.
///
/// Matching is on substrings, so a keyword inside a longer word still counts.
pub fn score(lowered_text: &str, keywords: &[String]) -> usize {
  keywords.iter().map(|k| lowered_text.matches(k.as_str()).count()).sum()
}

/// Returns the page of `pages` that most plausibly supports `question`.
///
/// Only the first `max_keywords` keywords of the question are scored. Pages are scanned in order
/// and a later page only replaces the current best on a strictly greater score, so ties go to the
/// earliest page. When the question has no keywords, or no keyword occurs anywhere, the first page
/// is returned.
///
/// # Errors
///
/// Returns [`StudygenError::EmptyDocument`] when `pages` is empty.
///
/// # Examples
///
/// ```
/// use studygen::{attribution::best_page, document::Page};
///
/// let pages = vec![Page::new(1, "Alpha beta."), Page::new(2, "Gamma delta epsilon.")];
/// let page = best_page("Define epsilon", &pages, 12)?;
/// assert_eq!(page.page_number, 2);
/// # Ok::<(), studygen::error::StudygenError>(())
/// ```
pub fn best_page<'a>(question: &str, pages: &'a [Page], max_keywords: usize) -> Result<&'a Page> {
  let first = pages.first().ok_or(StudygenError::EmptyDocument)?;

  let mut kws = keywords(question);
  if kws.is_empty() {
    trace!("No keywords in question, using page {}", first.page_number);
    return Ok(first);
  }
  kws.truncate(max_keywords);

  let mut best: Option<(usize, &Page)> = None;
  for page in pages {
    let page_score = score(&page.text.to_ascii_lowercase(), &kws);
    if best.map_or(true, |(best_score, _)| page_score > best_score) {
      best = Some((page_score, page));
    }
  }

  let (best_score, page) = best.unwrap_or((0, first));
  trace!("Question scored {} on page {}", best_score, page.page_number);
  Ok(page)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pages(texts: &[&str]) -> Vec<Page> {
    texts.iter().enumerate().map(|(i, t)| Page::new(i as u32 + 1, *t)).collect()
  }

  #[test]
  fn test_score_counts_substrings() {
    let kws = vec!["cell".to_string(), "wall".to_string()];
    assert_eq!(score("cells and cell walls; a cellular wall", &kws), 5);
    assert_eq!(score("nothing relevant", &kws), 0);
  }

  #[test]
  fn test_picks_highest_scoring_page() {
    let pages = pages(&["Mitosis happens.", "Meiosis and meiosis again.", "Meiosis once."]);
    assert_eq!(best_page("Explain meiosis", &pages, 12).unwrap().page_number, 2);
  }

  #[test]
  fn test_matching_is_case_insensitive() {
    let pages = pages(&["nothing here", "ENZYME kinetics"]);
    assert_eq!(best_page("enzyme", &pages, 12).unwrap().page_number, 2);
  }

  #[test]
  fn test_ties_go_to_earliest_page() {
    let pages = pages(&["no match", "osmosis", "osmosis"]);
    assert_eq!(best_page("osmosis", &pages, 12).unwrap().page_number, 2);
  }

  #[test]
  fn test_no_keywords_returns_first_page() {
    let pages = pages(&["first", "the the the"]);
    assert_eq!(best_page("", &pages, 12).unwrap().page_number, 1);
    assert_eq!(best_page("Is it the one?", &pages, 12).unwrap().page_number, 1);
  }

  #[test]
  fn test_zero_scores_return_first_page() {
    let pages = pages(&["Alpha beta.", "Gamma delta epsilon."]);
    assert_eq!(best_page("xyz zzzz", &pages, 12).unwrap().page_number, 1);
  }

  #[test]
  fn test_only_leading_keywords_are_scored() {
    let pages = pages(&["alpha", "omega omega omega"]);
    // With a cap of one only "alpha" is scored.
    assert_eq!(best_page("alpha omega", &pages, 1).unwrap().page_number, 1);
    assert_eq!(best_page("alpha omega", &pages, 2).unwrap().page_number, 2);
  }

  #[test]
  fn test_empty_document_is_an_error() {
    assert!(matches!(best_page("anything", &[], 12), Err(StudygenError::EmptyDocument)));
    assert!(matches!(best_page("", &[], 12), Err(StudygenError::EmptyDocument)));
  }
}
