use async_trait::async_trait;
use studygen::{
  error::Result,
  generate::Pipeline,
  llm::{GenerationOptions, Generator, Message},
  prompts::{COMBINE_SYSTEM, STUDY_GUIDE_SYSTEM},
};

use super::*;

/// Answers summaries with fixed text and quizzes with a canned reply wrapped in chatter.
struct Offline {
  quiz: String,
}

#[async_trait]
impl Generator for Offline {
  async fn complete(&self, messages: Vec<Message>, _options: &GenerationOptions) -> Result<String> {
    Ok(match messages[0].content.as_str() {
      STUDY_GUIDE_SYSTEM => "## Key ideas\n- Light reactions".to_string(),
      COMBINE_SYSTEM => "# Biology 101\n## Key ideas".to_string(),
      _ => format!("Here is your quiz:\n```json\n{}\n```", self.quiz),
    })
  }
}

fn canned_quiz() -> String {
  serde_json::json!({
    "questions": [
      {
        "question": "What does photosynthesis convert light energy into?",
        "choices": {"A": "Chemical energy", "B": "Heat", "C": "Sound", "D": "Motion"},
        "correct": "A",
        "rationale": "Plants store light energy as chemical energy."
      },
      {
        "question": "Which molecules store glucose energy for respiration?",
        "choices": {"A": "Lipids", "B": "Glucose molecules", "C": "Water", "D": "Salt"},
        "correct": "B",
        "rationale": "Respiration releases energy stored in glucose."
      }
    ]
  })
  .to_string()
}

#[traced_test]
#[tokio::test]
async fn test_pdf_to_attributed_quiz() -> TestResult<()> {
  let pdf = build_pdf(
    &[
      "Course overview\nReading list and grading",
      "Photosynthesis converts light energy\ninto chemical energy in plants",
      "Cellular respiration releases energy\nstored in glucose molecules",
    ],
    Some("Biology 101"),
  );
  let config = Config::default().with_questions(5);
  let document = PdfExtractor::new().with_max_pages(config.max_pages).extract_bytes(&pdf)?;

  let pipeline = Pipeline::new(Offline { quiz: canned_quiz() }, config);
  let materials = pipeline.run(&document).await?;

  assert_eq!(materials.study_guide, "# Biology 101\n## Key ideas");
  assert_eq!(materials.quiz.len(), 2);
  assert_eq!(materials.quiz.questions[1].correct, ChoiceKey::B);

  let pages: Vec<_> = materials.quiz.questions.iter().map(|q| q.source_page).collect();
  assert_eq!(pages, vec![Some(2), Some(3)]);
  assert!(materials.quiz.questions.iter().all(|q| q.source_excerpt.as_deref().is_some_and(|e| !e.is_empty())));
  Ok(())
}

#[tokio::test]
async fn test_blank_pdf_is_rejected_before_generation() -> TestResult<()> {
  let document = PdfExtractor::new().extract_bytes(&build_pdf(&["", ""], None))?;
  let pipeline = Pipeline::new(Offline { quiz: canned_quiz() }, Config::default());
  assert!(matches!(pipeline.run(&document).await, Err(StudygenError::NoExtractableText)));
  Ok(())
}

#[tokio::test]
async fn test_materials_serialize_with_sources() -> TestResult<()> {
  let document = Document::new(vec![
    Page::new(1, "Photosynthesis converts light energy into chemical energy in plants."),
    Page::new(2, "Cellular respiration releases energy stored in glucose molecules."),
  ]);
  let pipeline = Pipeline::new(Offline { quiz: canned_quiz() }, Config::default());
  let materials = pipeline.run(&document).await?;

  let json = serde_json::to_value(&materials)?;
  assert_eq!(json["quiz"]["questions"][0]["source_page"], 1);
  assert_eq!(json["quiz"]["questions"][1]["source_page"], 2);
  assert!(json["generated_at"].is_string());
  Ok(())
}
