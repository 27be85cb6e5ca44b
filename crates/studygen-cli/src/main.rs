//! Command line front end for the `studygen` library.
//!
//! Turns a lecture PDF into a study guide and a multiple-choice quiz whose questions are traced
//! back to the page that supports them.
//!
//! # Usage
//!
//! ```bash
//! # Write a configuration file with default settings
//! studygen init
//!
//! # Check that a PDF has extractable text
//! studygen extract lecture.pdf
//!
//! # Generate `study_guide.md` and `quiz.json` into a directory
//! studygen generate lecture.pdf --questions 8 --output out/
//!
//! # Re-attribute an existing quiz against a PDF without calling the model
//! studygen attribute lecture.pdf out/quiz.json
//!
//! # Take the quiz
//! studygen take out/quiz.json
//! ```
//!
//! Logging goes to stderr and can be raised with `-v` (repeatable) or `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use studygen::{
  attribution::attach_sources,
  error::StudygenError,
  generate::Pipeline,
  llm::ChatClient,
  pdf::PdfExtractor,
  quiz::{ChoiceKey, Quiz, QuizAttempt, QuizQuestion},
  Config,
};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Turn PDFs into study guides and source-attributed quizzes")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses the platform-specific configuration
  /// directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

impl Cli {
  /// The configuration file in effect.
  fn config_path(&self) -> Result<PathBuf> {
    match &self.config {
      Some(path) => Ok(path.clone()),
      None => Ok(Config::default_path()?),
    }
  }

  /// Loads the configuration file, falling back to defaults when there is none.
  fn load_config(&self) -> Result<Config> {
    let path = self.config_path()?;
    trace!("Using configuration at: {}", path.display());
    Ok(Config::load_or_default(path)?)
  }
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// Output goes to stderr so command output on stdout stays machine readable.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Entry point for the studygen CLI application
///
/// Parses arguments, sets up logging and runs the requested command. Any error is reported on
/// stderr and the process exits with status 1.
#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let result = match &cli.command {
    Commands::Init(options) => init(&cli, options),
    Commands::Extract(options) => extract(&cli, options),
    Commands::Generate(options) => generate(&cli, options).await,
    Commands::Attribute(options) => attribute(&cli, options),
    Commands::Take(options) => take(&cli, options),
  };

  if let Err(error) = result {
    debug!("Command failed: {:?}", error);
    eprintln!("{} {}", style(ERROR_PREFIX).red(), error);
    std::process::exit(1);
  }
}
