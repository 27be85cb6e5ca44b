use super::*;

/// Arguments for `attribute`.
#[derive(Args)]
pub struct AttributeOptions {
  /// PDF the quiz was generated from
  pub pdf:       PathBuf,
  /// Quiz JSON file
  pub quiz:      PathBuf,
  /// Only the first pages are searched
  #[arg(long)]
  pub max_pages: Option<usize>,
  /// Write the attributed quiz here instead of stdout
  #[arg(long, short)]
  pub output:    Option<PathBuf>,
}

/// Function for the [`Commands::Attribute`] in the CLI.
///
/// With no `--output` the attributed quiz is the only thing printed to stdout.
pub fn attribute(cli: &Cli, options: &AttributeOptions) -> Result<()> {
  let config = configure(cli, options.max_pages)?;
  let document = PdfExtractor::new().with_max_pages(config.max_pages).extract_path(&options.pdf)?;
  let quiz = read_quiz(&options.quiz)?;

  let quiz = attach_sources(quiz, &document, &config.attribution)?;
  let json = serde_json::to_string_pretty(&quiz)?;

  match &options.output {
    Some(path) => {
      std::fs::write(path, json)?;
      cli.reply(ResponseContent::Success(&format!(
        "Attributed {} questions, written to {}",
        quiz.len(),
        path.display()
      )))
    },
    None => {
      println!("{json}");
      Ok(())
    },
  }
}
