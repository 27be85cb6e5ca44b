use super::*;

/// Characters of extracted text shown by `extract`.
pub const PREVIEW_CHARS: usize = 4000;

/// Arguments for `extract`.
#[derive(Args)]
pub struct ExtractOptions {
  /// PDF file to read
  pub pdf:       PathBuf,
  /// Only the first pages are extracted
  #[arg(long)]
  pub max_pages: Option<usize>,
  /// Print pages and metadata as JSON instead of a preview
  #[arg(long)]
  pub json:      bool,
}

/// Function for the [`Commands::Extract`] in the CLI.
pub fn extract(cli: &Cli, options: &ExtractOptions) -> Result<()> {
  let config = configure(cli, options.max_pages)?;
  let content = PdfExtractor::new().with_max_pages(config.max_pages).analyze_path(&options.pdf)?;
  if content.document.is_blank() {
    return Err(StudygenError::NoExtractableText.into());
  }

  if options.json {
    println!("{}", serde_json::to_string_pretty(&content)?);
    return Ok(());
  }

  let text = content.document.joined_text();
  if let Some(title) = &content.metadata.title {
    println!("{} {}", style("Title:").green().bold(), style(title).white());
  }
  println!(
    "{} {} of {}",
    style("Pages:").green().bold(),
    content.document.len(),
    content.total_pages
  );
  println!("{} {}", style("Characters:").green().bold(), text.chars().count());
  println!("\n{}", preview(&text));
  Ok(())
}

/// The first [`PREVIEW_CHARS`] characters of `text`, marked when cut.
fn preview(text: &str) -> String {
  match text.char_indices().nth(PREVIEW_CHARS) {
    Some((end, _)) => format!("{}…", &text[..end]),
    None => text.to_string(),
  }
}
