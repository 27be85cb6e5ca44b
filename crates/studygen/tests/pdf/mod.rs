use super::*;

const LECTURE: [&str; 3] = [
  "Course overview\nReading list and grading",
  "Photosynthesis converts light energy\ninto chemical energy in plants",
  "Cellular respiration releases energy\nstored in glucose molecules",
];

#[test]
fn test_pages_are_numbered_in_order() -> TestResult<()> {
  let document = PdfExtractor::new().extract_bytes(&build_pdf(&LECTURE, None))?;

  assert_eq!(document.len(), 3);
  let numbers: Vec<u32> = document.pages.iter().map(|page| page.page_number).collect();
  assert_eq!(numbers, vec![1, 2, 3]);
  assert!(document.pages[1].text.contains("Photosynthesis converts light energy"));
  assert!(document.pages[2].text.contains("glucose"));
  Ok(())
}

#[test]
fn test_page_cap_keeps_leading_pages() -> TestResult<()> {
  let content = PdfExtractor::new().with_max_pages(2).analyze_bytes(&build_pdf(&LECTURE, None))?;

  assert_eq!(content.total_pages, 3);
  assert_eq!(content.document.len(), 2);
  assert!(!content.document.joined_text().contains("glucose"));
  Ok(())
}

#[test]
fn test_title_metadata_is_read() -> TestResult<()> {
  let content = PdfExtractor::new().analyze_bytes(&build_pdf(&LECTURE, Some("Biology 101")))?;
  assert_eq!(content.metadata.title.as_deref(), Some("Biology 101"));
  assert_eq!(content.metadata.author, None);
  Ok(())
}

#[test]
fn test_extract_from_file() -> TestResult<()> {
  let dir = tempdir()?;
  let path = dir.path().join("lecture.pdf");
  std::fs::write(&path, build_pdf(&LECTURE, None))?;

  let document = PdfExtractor::new().extract_path(&path)?;
  assert_eq!(document.len(), 3);
  assert!(!document.is_blank());
  Ok(())
}

#[test]
fn test_pages_without_text_extract_blank() -> TestResult<()> {
  let document = PdfExtractor::new().extract_bytes(&build_pdf(&["", ""], None))?;
  assert_eq!(document.len(), 2);
  assert!(document.is_blank());
  Ok(())
}

#[test]
fn test_attribution_from_extracted_pdf() -> TestResult<()> {
  let document = PdfExtractor::new().extract_bytes(&build_pdf(&LECTURE, None))?;
  let quiz = Quiz {
    questions: vec![
      question("What does photosynthesis produce in plants?"),
      question("Which molecules store glucose?"),
      question("What is on the reading list?"),
    ],
  };

  let quiz = attach_sources(quiz, &document, &AttributionConfig::default())?;
  let pages: Vec<_> = quiz.questions.iter().map(|q| q.source_page).collect();
  assert_eq!(pages, vec![Some(2), Some(3), Some(1)]);

  let excerpt = quiz.questions[0].source_excerpt.as_deref().unwrap_or_default();
  assert!(document.pages[1].text.contains(excerpt));
  Ok(())
}
