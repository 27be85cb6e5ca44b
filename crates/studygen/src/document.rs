//! Page-indexed document text.
//!
//! A [`Document`] is the ordered list of [`Page`]s extracted from one uploaded PDF. It is created
//! once, never mutated, and replaced wholesale when a new PDF is loaded.

use super::*;

/// Text extracted from a single physical page.
///
/// Page numbers are 1-indexed and follow physical page order. Text may be empty for pages that
/// carry no extractable text (scanned images, blank pages).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
  /// 1-indexed physical page number
  #[serde(alias = "page")]
  pub page_number: u32,
  /// Raw extracted text of the page
  pub text:        String,
}

impl Page {
  /// Creates a page record.
  pub fn new(page_number: u32, text: impl Into<String>) -> Self {
    Self { page_number, text: text.into() }
  }

  /// Whether this page has no text beyond whitespace.
  pub fn is_blank(&self) -> bool { self.text.trim().is_empty() }
}

/// An ordered, read-only sequence of pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  /// Pages in physical order
  pub pages: Vec<Page>,
}

impl Document {
  /// Creates a document from pages already in physical order.
  pub fn new(pages: Vec<Page>) -> Self { Self { pages } }

  /// Number of pages in the document.
  pub fn len(&self) -> usize { self.pages.len() }

  /// Whether the document has no pages at all.
  pub fn is_empty(&self) -> bool { self.pages.is_empty() }

  /// Whether no page carries any text.
  ///
  /// A blank document is rejected before generation since there is nothing to summarize.
  pub fn is_blank(&self) -> bool { self.pages.iter().all(Page::is_blank) }

  /// All page texts joined by a blank line, with surrounding whitespace trimmed.
  ///
  /// This is the text handed to the summarizer; page boundaries are not preserved in it.
  pub fn joined_text(&self) -> String {
    self.pages.iter().map(|p| p.text.as_str()).collect::<Vec<_>>().join("\n\n").trim().to_string()
  }

  /// Number of characters in [`Document::joined_text`].
  pub fn char_count(&self) -> usize { self.joined_text().chars().count() }

  /// Looks a page up by its 1-indexed page number.
  pub fn page(&self, page_number: u32) -> Option<&Page> {
    self.pages.iter().find(|p| p.page_number == page_number)
  }
}

impl From<Vec<Page>> for Document {
  fn from(pages: Vec<Page>) -> Self { Self::new(pages) }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Document {
    Document::new(vec![
      Page::new(1, "  First page.\n"),
      Page::new(2, ""),
      Page::new(3, "Third page."),
    ])
  }

  #[test]
  fn test_joined_text_trims_and_separates_pages() {
    assert_eq!(sample().joined_text(), "First page.\n\n\n\n\nThird page.");
  }

  #[test]
  fn test_blank_detection() {
    assert!(!sample().is_blank());
    assert!(Document::new(vec![Page::new(1, " \n\t"), Page::new(2, "")]).is_blank());
    assert!(Document::default().is_blank());
  }

  #[test]
  fn test_page_lookup() {
    let doc = sample();
    assert_eq!(doc.page(3).map(|p| p.text.as_str()), Some("Third page."));
    assert!(doc.page(4).is_none());
  }

  #[test]
  fn test_page_accepts_short_field_name() {
    let page: Page = serde_json::from_str(r#"{"page": 2, "text": "hi"}"#).unwrap();
    assert_eq!(page, Page::new(2, "hi"));
  }
}
