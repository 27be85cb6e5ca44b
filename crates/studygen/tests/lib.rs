use std::error::Error;

use lopdf::{
  content::{Content, Operation},
  dictionary, Document as PdfDocument, Object, Stream,
};
use studygen::{
  attribution::{attach_sources, best_page, excerpt, keywords, AttributionConfig},
  document::{Document, Page},
  error::StudygenError,
  pdf::PdfExtractor,
  quiz::{ChoiceKey, Choices, Quiz, QuizQuestion},
  Config,
};
use tempfile::tempdir;
use tracing_test::traced_test;

mod attribution;
mod pdf;
mod pipeline;

pub type TestResult<T> = Result<T, Box<dyn Error>>;

/// Builds an in-memory PDF with one page per entry of `pages`.
///
/// Each line is drawn with its own `Tj` and a trailing space so words never run together.
pub fn build_pdf(pages: &[&str], title: Option<&str>) -> Vec<u8> {
  let mut doc = PdfDocument::with_version("1.5");
  let pages_id = doc.new_object_id();
  let font_id = doc.add_object(dictionary! {
    "Type" => "Font",
    "Subtype" => "Type1",
    "BaseFont" => "Courier",
  });
  let resources_id = doc.add_object(dictionary! {
    "Font" => dictionary! { "F1" => font_id },
  });

  let kids: Vec<Object> = pages
    .iter()
    .map(|text| {
      let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![72.into(), 720.into()]),
      ];
      for line in text.lines() {
        operations.push(Operation::new("Tj", vec![Object::string_literal(format!("{line} "))]));
        operations.push(Operation::new("Td", vec![0.into(), (-14).into()]));
      }
      operations.push(Operation::new("ET", vec![]));

      let content = Content { operations };
      let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
      doc
        .add_object(dictionary! {
          "Type" => "Page",
          "Parent" => pages_id,
          "Contents" => content_id,
        })
        .into()
    })
    .collect();

  let count = kids.len() as i64;
  doc.objects.insert(
    pages_id,
    Object::Dictionary(dictionary! {
      "Type" => "Pages",
      "Kids" => kids,
      "Count" => count,
      "Resources" => resources_id,
      "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    }),
  );
  let catalog_id = doc.add_object(dictionary! {
    "Type" => "Catalog",
    "Pages" => pages_id,
  });
  doc.trailer.set("Root", catalog_id);

  if let Some(title) = title {
    let info_id = doc.add_object(dictionary! { "Title" => Object::string_literal(title) });
    doc.trailer.set("Info", info_id);
  }

  let mut bytes = Vec::new();
  doc.save_to(&mut bytes).unwrap();
  bytes
}

/// A question with placeholder choices.
pub fn question(text: &str) -> QuizQuestion {
  QuizQuestion::new(text, Choices::new("w", "x", "y", "z"), ChoiceKey::A, "Because.")
}
