//! Subcommands of the `studygen` binary.

use super::*;

pub mod attribute;
pub mod extract;
pub mod generate;
pub mod init;
pub mod take;

pub use attribute::{attribute, AttributeOptions};
pub use extract::{extract, ExtractOptions};
pub use generate::{generate, GenerateOptions};
pub use init::{init, InitOptions};
pub use take::{take, TakeOptions};

/// Available commands for the CLI
#[derive(Subcommand)]
pub enum Commands {
  /// Write a configuration file with default settings
  Init(InitOptions),

  /// Extract the text of a PDF and show a preview
  Extract(ExtractOptions),

  /// Generate a study guide and a source-attributed quiz from a PDF
  Generate(GenerateOptions),

  /// Attach source pages and excerpts to an existing quiz, without calling a model
  Attribute(AttributeOptions),

  /// Take a quiz in the terminal
  Take(TakeOptions),
}

/// Applies the page cap override and checks the resulting configuration.
fn configure(cli: &Cli, max_pages: Option<usize>) -> Result<Config> {
  let config = cli.load_config()?;
  let config = match max_pages {
    Some(max_pages) => config.with_max_pages(max_pages),
    None => config,
  };
  config.validate()?;
  Ok(config)
}

/// Reads a quiz file, accepting either a bare quiz object or model output wrapping one.
fn read_quiz(path: &Path) -> Result<Quiz> {
  let text = std::fs::read_to_string(path)?;
  Ok(Quiz::from_model_output(&text)?)
}
