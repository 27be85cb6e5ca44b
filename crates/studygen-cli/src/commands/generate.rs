use super::*;

/// File name of the written study guide.
pub const STUDY_GUIDE_FILE: &str = "study_guide.md";
/// File name of the written quiz.
pub const QUIZ_FILE: &str = "quiz.json";

/// Arguments for `generate`.
#[derive(Args)]
pub struct GenerateOptions {
  /// PDF file to study
  pub pdf:       PathBuf,
  /// Number of quiz questions to request
  #[arg(long, short)]
  pub questions: Option<usize>,
  /// Only the first pages are processed
  #[arg(long)]
  pub max_pages: Option<usize>,
  /// Model used for generation
  #[arg(long, short)]
  pub model:     Option<String>,
  /// Directory the study guide and quiz are written to
  #[arg(long, short, default_value = ".")]
  pub output:    PathBuf,
}

/// Function for the [`Commands::Generate`] in the CLI.
pub async fn generate(cli: &Cli, options: &GenerateOptions) -> Result<()> {
  let mut config = configure(cli, options.max_pages)?;
  if let Some(questions) = options.questions {
    config = config.with_questions(questions);
  }
  if let Some(model) = &options.model {
    config = config.with_model(model);
  }
  config.validate()?;

  let document = PdfExtractor::new().with_max_pages(config.max_pages).extract_path(&options.pdf)?;
  if document.is_blank() {
    return Err(StudygenError::NoExtractableText.into());
  }
  cli.reply(ResponseContent::Info(&format!(
    "Extracted {} pages ({} characters) from {}",
    document.len(),
    document.char_count(),
    options.pdf.display()
  )))?;

  let client = ChatClient::from_config(&config)?;
  debug!("Generating with {} at {}", config.model, client.endpoint());
  let questions = config.questions;
  let pipeline = Pipeline::new(client, config);

  cli.reply(ResponseContent::Info(&format!(
    "Generating a study guide and {questions} questions, this can take a minute"
  )))?;
  let materials = pipeline.run(&document).await?;

  std::fs::create_dir_all(&options.output)?;
  let guide_path = options.output.join(STUDY_GUIDE_FILE);
  let quiz_path = options.output.join(QUIZ_FILE);
  std::fs::write(&guide_path, &materials.study_guide)?;
  std::fs::write(&quiz_path, serde_json::to_string_pretty(&materials.quiz)?)?;

  cli.reply(ResponseContent::Success(&format!(
    "Wrote {} and {} ({} questions)",
    guide_path.display(),
    quiz_path.display(),
    materials.quiz.len()
  )))?;
  cli.reply(ResponseContent::Info(&format!(
    "Run `studygen take {}` to start the quiz",
    quiz_path.display()
  )))
}
