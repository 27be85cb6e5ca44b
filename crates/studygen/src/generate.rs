//! End-to-end generation: document text to study guide, quiz, and attributed sources.
//!
//! The pipeline runs in a fixed order:
//! 1. The document text is cut into token windows ([`chunking`])
//! 2. Each window is summarized into a partial guide, a few requests at a time
//! 3. The partial guides are merged into one study guide
//! 4. A quiz is generated from the guide and validated
//! 5. Every question is attributed to a page of the *original* document
//!
//! Model calls dominate the run time; attribution is pure computation over the extracted pages.

use futures::{stream, StreamExt, TryStreamExt};

use super::*;
use crate::{
  attribution::attach_sources,
  chunking::chunk_text,
  llm::{GenerationOptions, Generator, Message},
  prompts::*,
};

/// Sampling for per-chunk summaries.
const CHUNK_OPTIONS: GenerationOptions =
  GenerationOptions { temperature: 0.2, max_tokens: 700, json: false };

/// Sampling for the merged guide.
const COMBINE_OPTIONS: GenerationOptions =
  GenerationOptions { temperature: 0.2, max_tokens: 900, json: false };

/// Sampling for quiz generation.
const QUIZ_OPTIONS: GenerationOptions =
  GenerationOptions { temperature: 0.2, max_tokens: 4000, json: true };

/// The output of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyMaterials {
  /// Markdown study guide
  pub study_guide:  String,
  /// Quiz with source attribution attached
  pub quiz:         Quiz,
  /// When the run finished
  pub generated_at: DateTime<Utc>,
}

/// Study guide and quiz generation over a [`Generator`].
///
/// # Examples
///
/// ```no_run
/// use studygen::{generate::Pipeline, llm::ChatClient, pdf::PdfExtractor, Config};
///
/// # async fn example() -> Result<(), studygen::error::StudygenError> {
/// let config = Config::default();
/// let document = PdfExtractor::new().with_max_pages(config.max_pages).extract_path("notes.pdf")?;
/// let pipeline = Pipeline::new(ChatClient::from_config(&config)?, config);
///
/// let materials = pipeline.run(&document).await?;
/// println!("{}", materials.study_guide);
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<G: Generator> {
  /// Model backend
  generator: G,
  /// Run settings
  config:    Config,
}

impl<G: Generator> Pipeline<G> {
  /// Creates a pipeline.
  pub fn new(generator: G, config: Config) -> Self { Self { generator, config } }

  /// The settings this pipeline runs with.
  pub fn config(&self) -> &Config { &self.config }

  /// Summarizes `raw_text` into a single study guide.
  ///
  /// Chunks are summarized with at most `config.concurrency` requests in flight; partial guides
  /// are merged in chunk order regardless of completion order.
  pub async fn study_guide(&self, raw_text: &str) -> Result<String> {
    let chunks = chunk_text(raw_text, &self.config.model, self.config.chunk_tokens)?;
    info!("Summarizing {} chunks", chunks.len());

    let partials: Vec<String> = stream::iter(chunks)
      .map(|chunk| async move {
        debug!("Summarizing chunk {} ({} tokens)", chunk.index, chunk.token_count);
        self
          .generator
          .complete(
            vec![Message::system(STUDY_GUIDE_SYSTEM), Message::user(study_guide_prompt(&chunk.text))],
            &CHUNK_OPTIONS,
          )
          .await
      })
      .buffered(self.config.concurrency.max(1))
      .try_collect()
      .await?;

    self
      .generator
      .complete(
        vec![Message::system(COMBINE_SYSTEM), Message::user(combine_prompt(&partials))],
        &COMBINE_OPTIONS,
      )
      .await
  }

  /// Generates and validates a quiz of `n` questions from a study guide.
  ///
  /// The model is asked for exactly `n` questions; a different count is accepted with a warning.
  pub async fn quiz(&self, study_guide: &str, n: usize) -> Result<Quiz> {
    let output = self
      .generator
      .complete(
        vec![Message::system(QUIZ_SYSTEM), Message::user(quiz_prompt(study_guide, n))],
        &QUIZ_OPTIONS,
      )
      .await?;

    let quiz = Quiz::from_model_output(&output)?;
    if quiz.len() != n {
      warn!("Requested {} questions but the model returned {}", n, quiz.len());
    }
    Ok(quiz)
  }

  /// Runs the full pipeline over `document`.
  ///
  /// # Errors
  ///
  /// - [`StudygenError::NoExtractableText`] if the document has no text
  /// - Any generation or validation error from [`Pipeline::study_guide`] or [`Pipeline::quiz`]
  pub async fn run(&self, document: &Document) -> Result<StudyMaterials> {
    if document.is_blank() {
      return Err(StudygenError::NoExtractableText);
    }

    let raw_text = document.joined_text();
    info!("Generating from {} characters over {} pages", raw_text.chars().count(), document.len());

    let study_guide = self.study_guide(&raw_text).await?;
    let quiz = self.quiz(&study_guide, self.config.questions).await?;
    let quiz = attach_sources(quiz, document, &self.config.attribution)?;

    Ok(StudyMaterials { study_guide, quiz, generated_at: Utc::now() })
  }
}
