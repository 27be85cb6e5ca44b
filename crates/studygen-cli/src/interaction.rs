//! Terminal output and prompts.

use dialoguer::{Confirm, Select};

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Indentation for details printed under a heading
pub static DETAIL_INDENT: &str = "   ";

/// A message shown to the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// Something finished as intended
  Success(&'a str),
  /// Progress or guidance
  Info(&'a str),
  /// Something the user should look at
  Warning(&'a str),
}

/// How commands talk to the user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Lets the user pick one of `items`. `None` means the prompt was dismissed.
  fn select(&self, message: &str, items: &[String]) -> Result<Option<usize>>;
  /// Prints a message.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

impl UserInteraction for Cli {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(Confirm::new().with_prompt(format!("{PROMPT_PREFIX}{message}")).default(false).interact()?)
  }

  fn select(&self, message: &str, items: &[String]) -> Result<Option<usize>> {
    if self.accept_defaults {
      return Ok(None);
    }
    Ok(Select::new().with_prompt(format!("{PROMPT_PREFIX}{message}")).items(items).default(0).interact_opt()?)
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Success(message) => println!("{} {}", style(SUCCESS_PREFIX).green(), message),
      ResponseContent::Info(message) => println!("{} {}", style(INFO_PREFIX).cyan(), message),
      ResponseContent::Warning(message) => println!("{} {}", style(WARNING_PREFIX).yellow(), message),
    }
    Ok(())
  }
}
