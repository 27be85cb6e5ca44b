//! Error types for the studygen library.
//!
//! A single error type covers every fallible step of the pipeline:
//! - PDF loading and text extraction
//! - Configuration loading and validation
//! - Language model requests
//! - Validation of model-generated quizzes
//!
//! Keyword extraction, page scoring and excerpt building never fail on text. The only error the
//! attribution engine raises is [`StudygenError::EmptyDocument`], a contract violation by the
//! caller.
//!
//! # Examples
//!
//! ```
//! use studygen::{error::StudygenError, quiz::Quiz};
//!
//! match Quiz::from_model_output("Sorry, I can't help with that.") {
//!   Err(StudygenError::MalformedQuiz(reason)) => println!("Model output rejected: {reason}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(_) => println!("Parsed a quiz"),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`studygen`](crate) crate.
pub type Result<T> = core::result::Result<T, StudygenError>;

/// Errors that can occur when working with the studygen library.
#[derive(Error, Debug)]
pub enum StudygenError {
  /// Source attribution was invoked with a document that has no pages.
  ///
  /// Callers are expected to reject empty documents before attribution runs. The attribution
  /// engine does not substitute a placeholder page.
  #[error("Cannot attribute sources against a document with no pages")]
  EmptyDocument,

  /// The document has pages but none of them carry any extractable text.
  ///
  /// This is typical for scanned PDFs, which would need OCR.
  #[error("No extractable text found. Scanned PDFs are not supported.")]
  NoExtractableText,

  /// Model output could not be turned into a valid quiz.
  ///
  /// This occurs when:
  /// - No JSON object can be found in the output
  /// - The top-level `questions` key is missing or not a non-empty list
  /// - A question is missing a required field or has an invalid `correct` key
  #[error("Malformed quiz: {0}")]
  MalformedQuiz(String),

  /// A string could not be parsed as one of the choice labels `A`-`D`.
  #[error("Invalid choice \"{0}\", expected one of A, B, C, D")]
  InvalidChoice(String),

  /// A quiz attempt referenced a question index that does not exist.
  #[error("Question {index} is out of range for a quiz of {len} questions")]
  QuestionOutOfRange {
    /// The offending zero-based index
    index: usize,
    /// Number of questions in the quiz
    len:   usize,
  },

  /// No API key was found for the language model service.
  #[error("No API key found. Set STUDYGEN_API_KEY or OPENAI_API_KEY.")]
  MissingApiKey,

  /// A model was not specified for the LLM request.
  #[error("No model was chosen for the LLM.")]
  LLMMissingModel,

  /// No messages were provided in the LLM request.
  #[error("No messages were supplied to send to the LLM.")]
  LLMMissingMessage,

  /// The language model API returned an error response or an unusable body.
  ///
  /// The string parameter carries the API's message for debugging.
  #[error("API error: {0}")]
  ApiError(String),

  /// The tokenizer used for chunking could not be loaded or failed to decode.
  #[error("Tokenizer error: {0}")]
  Tokenizer(String),

  /// Configuration is invalid or could not be located.
  #[error("{0}")]
  Config(String),

  /// A network request failed.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// PDF parsing and processing errors from the lopdf library.
  ///
  /// Common causes are malformed or encrypted PDF files.
  #[error(transparent)]
  Lopdf(#[from] lopdf::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// JSON (de)serialization failed.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// The configuration file is not valid TOML for [`Config`](crate::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration could not be rendered as TOML.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),
}
