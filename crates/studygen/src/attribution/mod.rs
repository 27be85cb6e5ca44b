//! Deterministic source attribution for generated quiz questions.
//!
//! Quiz questions are written by a model from a *summary* of the document, so they rarely quote
//! the source verbatim. Attribution maps each question back to the page it most plausibly came
//! from using keyword overlap alone, then cuts a short verbatim excerpt from that page as
//! human-checkable evidence.
//!
//! The engine is a pure function of `(quiz, document)`:
//! - [`keywords`] turns a question into an ordered keyword list
//! - [`best_page`] scores every page by keyword frequency and picks the first best page
//! - [`excerpt`] cuts a window around the first keyword found on that page
//! - [`attach_sources`] runs the above for every question
//!
//! Failing to match is not an error. A question without keywords, or one whose keywords occur
//! nowhere, is attributed to the first page, and an excerpt without an anchor falls back to the
//! page's opening text. The only error is attributing against a document with no pages.
//!
//! This is a best-effort heuristic. When several pages tie, the earliest one is reported without
//! any signal of ambiguity.

use super::*;

pub mod excerpt;
pub mod keywords;
pub mod scorer;

pub use self::{excerpt::excerpt, keywords::keywords, scorer::best_page};
use self::{
  excerpt::{DEFAULT_EXCERPT_KEYWORDS, DEFAULT_WINDOW},
  scorer::DEFAULT_SCORE_KEYWORDS,
};

/// Tunable limits for attribution.
///
/// The caps bound the work done per question. Whatever their values, earlier question keywords
/// always take priority over later ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributionConfig {
  /// How many leading keywords are scored against each page
  pub score_keywords:   usize,
  /// How many leading keywords are tried as the excerpt anchor
  pub excerpt_keywords: usize,
  /// Characters kept on each side of the excerpt anchor
  pub window:           usize,
}

impl Default for AttributionConfig {
  fn default() -> Self {
    Self {
      score_keywords:   DEFAULT_SCORE_KEYWORDS,
      excerpt_keywords: DEFAULT_EXCERPT_KEYWORDS,
      window:           DEFAULT_WINDOW,
    }
  }
}

impl AttributionConfig {
  /// Checks that every limit is usable.
  pub fn validate(&self) -> Result<()> {
    if self.score_keywords == 0 || self.excerpt_keywords == 0 || self.window == 0 {
      return Err(StudygenError::Config(
        "Attribution keyword caps and window must all be greater than zero".to_string(),
      ));
    }
    Ok(())
  }
}

/// Where a question's answer is most plausibly supported in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceAttribution {
  /// Page number of the best matching page
  pub page_number: u32,
  /// Verbatim excerpt from that page, empty only if the page has no text
  pub excerpt:     String,
}

/// Attributes a single question against `pages`.
///
/// # Errors
///
/// Returns [`StudygenError::EmptyDocument`] when `pages` is empty.
pub fn attribute(question: &str, pages: &[Page], config: &AttributionConfig) -> Result<SourceAttribution> {
  let page = best_page(question, pages, config.score_keywords)?;
  let excerpt = excerpt(&page.text, question, config.excerpt_keywords, config.window);
  Ok(SourceAttribution { page_number: page.page_number, excerpt })
}

/// Annotates every question of `quiz` with its source page and excerpt.
///
/// The quiz is consumed and returned with `source_page` and `source_excerpt` set on each question;
/// no other field is touched and question order is preserved. Questions are independent of one
/// another, and any previous attribution is overwritten, so running this twice over the same
/// document yields the same result.
///
/// # Errors
///
/// Returns [`StudygenError::EmptyDocument`] when the document has no pages, even if the quiz has
/// no questions.
///
/// # Examples
///
/// ```
/// use studygen::{
///   attribution::{attach_sources, AttributionConfig},
///   document::Document,
///   error::StudygenError,
///   quiz::Quiz,
/// };
///
/// let quiz = Quiz { questions: vec![] };
/// let result = attach_sources(quiz, &Document::default(), &AttributionConfig::default());
/// assert!(matches!(result, Err(StudygenError::EmptyDocument)));
/// ```
pub fn attach_sources(mut quiz: Quiz, document: &Document, config: &AttributionConfig) -> Result<Quiz> {
  if document.is_empty() {
    return Err(StudygenError::EmptyDocument);
  }

  for (index, question) in quiz.questions.iter_mut().enumerate() {
    let source = attribute(&question.question, &document.pages, config)?;
    debug!("Question {} attributed to page {}", index + 1, source.page_number);
    question.source_page = Some(source.page_number);
    question.source_excerpt = Some(source.excerpt);
  }

  Ok(quiz)
}
