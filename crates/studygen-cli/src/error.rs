//! Error types for the studygen CLI.

use thiserror::Error;

use super::*;

/// Errors that can occur while running a CLI command.
#[derive(Error, Debug)]
pub enum CliError {
  /// An error from the studygen library
  #[error(transparent)]
  Studygen(#[from] StudygenError),

  /// An interactive prompt failed, e.g. because stdin is not a terminal
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),

  /// Reading or writing a file failed
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Writing JSON output failed
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A command line value could not be used
  #[error("{0}")]
  InvalidInput(String),
}

/// Result alias for CLI commands.
pub type Result<T> = core::result::Result<T, CliError>;
