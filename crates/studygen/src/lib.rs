//! Study guide and quiz generation from PDF documents, with source attribution.
//!
//! `studygen` turns the text of an uploaded PDF into:
//!
//! - A structured, student-friendly study guide
//! - A multiple-choice quiz generated from that guide
//! - Per-question source attribution: the page of the original document that most plausibly
//!   supports the question, and a short verbatim excerpt from it
//!
//! # Features
//!
//! - **Page-aware extraction**: PDF text is kept per physical page so answers can be traced back
//! - **Deterministic attribution**: lexical keyword overlap only, no embeddings and no extra model
//!   calls, with documented fallbacks so attribution always produces a value
//! - **Pluggable generation**: any [`llm::Generator`] can back the pipeline, the bundled
//!   [`llm::ChatClient`] speaks the OpenAI-compatible chat completions protocol
//!
//! # Getting Started
//!
//! ```no_run
//! use studygen::{generate::Pipeline, llm::ChatClient, pdf::PdfExtractor, prelude::*, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let config = Config::load_or_default(Config::default_path()?)?;
//!
//!   // Extract page-indexed text from a PDF
//!   let document = PdfExtractor::new().with_max_pages(config.max_pages).extract_path("notes.pdf")?;
//!
//!   // Generate a guide and an attributed quiz
//!   let pipeline = Pipeline::new(ChatClient::from_config(&config)?, config);
//!   let materials = pipeline.run(&document).await?;
//!
//!   for question in &materials.quiz.questions {
//!     println!("{} (page {:?})", question.question, question.source_page);
//!   }
//!   Ok(())
//! }
//! ```
//!
//! Attribution alone needs no model at all:
//!
//! ```
//! use studygen::{
//!   attribution::{attach_sources, AttributionConfig},
//!   document::{Document, Page},
//!   quiz::Quiz,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let document = Document::new(vec![Page::new(1, "Mitochondria produce most cellular energy.")]);
//! let quiz = Quiz::from_model_output(
//!   r#"{"questions":[{"question":"What do mitochondria produce?",
//!      "choices":{"A":"Energy","B":"Proteins","C":"Lipids","D":"Sugars"},
//!      "correct":"A","rationale":"They are the powerhouse of the cell."}]}"#,
//! )?;
//!
//! let quiz = attach_sources(quiz, &document, &AttributionConfig::default())?;
//! assert_eq!(quiz.questions[0].source_page, Some(1));
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`attribution`]: Keyword extraction, page scoring, excerpt building
//! - [`document`]: Page-indexed document types
//! - [`pdf`]: PDF text and metadata extraction
//! - [`quiz`]: Quiz types, model-output validation, and quiz attempts
//! - [`chunking`]: Token-window chunking for summarization
//! - [`llm`]: Language model client and the [`llm::Generator`] seam
//! - [`generate`]: The end-to-end generation pipeline
//! - [`configuration`]: TOML configuration
//! - [`prelude`]: Common traits and types for ergonomic imports

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod attribution;
pub mod chunking;
pub mod configuration;
pub mod document;
pub mod error;
pub mod generate;
pub mod llm;
pub mod pdf;
pub mod prompts;
pub mod quiz;

pub use configuration::Config;

use crate::{attribution::AttributionConfig, document::*, error::*, quiz::*};

/// Common traits and types for ergonomic imports.
///
/// # Usage
///
/// ```no_run
/// use studygen::{llm::ChatClient, prelude::*, Config};
///
/// fn example() -> Result<(), StudygenError> {
///   // `Generator` is in scope, as is the `StudygenError` type
///   let client = ChatClient::from_config(&Config::default())?;
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{error::StudygenError, llm::Generator};
}
