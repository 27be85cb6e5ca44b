//! Module for writing a [`studygen`] configuration file

use super::*;

/// Settings written by `init` in place of the defaults.
#[derive(Args)]
pub struct InitOptions {
  /// Model used for generation
  #[arg(long)]
  pub model:     Option<String>,
  /// Base URL of an OpenAI-compatible API
  #[arg(long)]
  pub api_base:  Option<String>,
  /// Number of quiz questions to request
  #[arg(long)]
  pub questions: Option<usize>,
  /// Only the first pages of a PDF are processed
  #[arg(long)]
  pub max_pages: Option<usize>,
}

/// Function for the [`Commands::Init`] in the CLI.
pub fn init(cli: &Cli, options: &InitOptions) -> Result<()> {
  let path = cli.config_path()?;

  if path.exists()
    && !cli
      .confirm(&format!("A configuration already exists at {}, overwrite it?", path.display()))?
  {
    cli.reply(ResponseContent::Info(
      "Keeping the existing configuration. Pass --config to write one elsewhere.",
    ))?;
    return Ok(());
  }

  let mut config = Config::default();
  if let Some(model) = &options.model {
    config = config.with_model(model);
  }
  if let Some(api_base) = &options.api_base {
    config = config.with_api_base(api_base);
  }
  if let Some(questions) = options.questions {
    config = config.with_questions(questions);
  }
  if let Some(max_pages) = options.max_pages {
    config = config.with_max_pages(max_pages);
  }
  config.validate()?;
  config.save(&path)?;

  cli.reply(ResponseContent::Success(&format!(
    "Created studygen configuration at {}\nModel: {}\nQuestions: {}\nPage cap: {}",
    path.display(),
    config.model,
    config.questions,
    config.max_pages,
  )))?;

  if Config::api_key().is_err() {
    cli.reply(ResponseContent::Warning(
      "No API key found. Set STUDYGEN_API_KEY or OPENAI_API_KEY before running `studygen generate`.",
    ))?;
  }
  Ok(())
}
