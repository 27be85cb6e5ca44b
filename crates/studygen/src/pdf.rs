//! Page-aware PDF text extraction.
//!
//! [`PdfExtractor`] loads a PDF with `lopdf` and produces a [`Document`] with one [`Page`] per
//! physical page, numbered from 1 in page order. A page whose text cannot be decoded is kept with
//! empty text so page numbers stay aligned with the physical document.
//!
//! Scanned PDFs carry no text layer; they extract to a blank document, which the generation
//! pipeline rejects.

use lopdf::{Dictionary, Document as PdfDocument, Object};

use super::*;

/// Document information dictionary entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfMetadata {
  /// Document title
  pub title:    Option<String>,
  /// Document author
  pub author:   Option<String>,
  /// Document subject
  pub subject:  Option<String>,
  /// Free-form keywords
  pub keywords: Option<String>,
}

/// Everything extracted from one PDF.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfContent {
  /// Information dictionary metadata
  pub metadata:    PdfMetadata,
  /// Page texts
  pub document:    Document,
  /// Pages in the PDF before any page cap was applied
  pub total_pages: usize,
}

/// Extracts page text and metadata from PDFs.
///
/// # Examples
///
/// ```no_run
/// use studygen::pdf::PdfExtractor;
///
/// # fn example() -> Result<(), studygen::error::StudygenError> {
/// let content = PdfExtractor::new().with_max_pages(10).analyze_path("lecture.pdf")?;
/// println!("{:?}: {} pages", content.metadata.title, content.document.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
  /// Only the first `max_pages` pages are extracted when set
  max_pages: Option<usize>,
}

impl PdfExtractor {
  /// Creates an extractor without a page cap.
  pub fn new() -> Self { Self::default() }

  /// Limits extraction to the first `max_pages` pages.
  pub fn with_max_pages(mut self, max_pages: usize) -> Self {
    self.max_pages = Some(max_pages);
    self
  }

  /// Extracts text and metadata from a PDF file.
  pub fn analyze_path(&self, path: impl AsRef<Path>) -> Result<PdfContent> {
    let doc = PdfDocument::load(path.as_ref())?;
    debug!("Loaded PDF from {}", path.as_ref().display());
    Ok(self.analyze(&doc))
  }

  /// Extracts text and metadata from PDF bytes.
  pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<PdfContent> {
    let doc = PdfDocument::load_mem(bytes)?;
    Ok(self.analyze(&doc))
  }

  /// Extracts only the page texts of a PDF file.
  pub fn extract_path(&self, path: impl AsRef<Path>) -> Result<Document> {
    Ok(self.analyze_path(path)?.document)
  }

  /// Extracts only the page texts of PDF bytes.
  pub fn extract_bytes(&self, bytes: &[u8]) -> Result<Document> {
    Ok(self.analyze_bytes(bytes)?.document)
  }

  /// Walks the pages of a loaded PDF.
  fn analyze(&self, doc: &PdfDocument) -> PdfContent {
    let page_ids = doc.get_pages();
    let total_pages = page_ids.len();
    let limit = self.max_pages.unwrap_or(total_pages).min(total_pages);

    let pages = page_ids
      .keys()
      .take(limit)
      .enumerate()
      .map(|(index, &lopdf_number)| {
        let text = doc.extract_text(&[lopdf_number]).unwrap_or_else(|e| {
          warn!("Could not extract text from page {}: {}", lopdf_number, e);
          String::new()
        });
        trace!("Page {} has {} characters", index + 1, text.chars().count());
        Page::new(index as u32 + 1, text)
      })
      .collect();

    let document = Document::new(pages);
    info!("Extracted {} of {} pages", document.len(), total_pages);
    PdfContent { metadata: extract_metadata(doc), document, total_pages }
  }
}

/// Reads the trailer's `Info` dictionary, which may be inline or referenced.
fn extract_metadata(doc: &PdfDocument) -> PdfMetadata {
  let info = match doc.trailer.get(b"Info") {
    Ok(Object::Reference(id)) => doc.get_object(*id).and_then(Object::as_dict).ok(),
    Ok(Object::Dictionary(dict)) => Some(dict),
    _ => None,
  };

  let Some(info) = info else {
    return PdfMetadata::default();
  };

  PdfMetadata {
    title:    text_from_dict(info, "Title"),
    author:   text_from_dict(info, "Author"),
    subject:  text_from_dict(info, "Subject"),
    keywords: text_from_dict(info, "Keywords"),
  }
}

/// Decodes a PDF text string entry, honouring a UTF-16BE byte order mark.
fn text_from_dict(dict: &Dictionary, key: &str) -> Option<String> {
  let bytes = dict.get(key.as_bytes()).ok()?.as_str().ok()?;
  let text = match bytes.strip_prefix(&[0xFE, 0xFF]) {
    Some(utf16) => {
      let units = utf16.chunks_exact(2).map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
      char::decode_utf16(units).map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)).collect()
    },
    None => String::from_utf8_lossy(bytes).into_owned(),
  };
  Some(text).filter(|t| !t.trim().is_empty())
}
