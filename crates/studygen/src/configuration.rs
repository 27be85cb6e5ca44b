//! TOML configuration for generation and attribution.
//!
//! Configuration is explicit: it is loaded once by the caller and handed to the components that
//! need it. The API key is deliberately not part of the file; it is read from the environment at
//! the moment a client is built.

use super::*;

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["STUDYGEN_API_KEY", "OPENAI_API_KEY"];

/// Smallest and largest quiz length that can be requested.
pub const QUESTION_RANGE: std::ops::RangeInclusive<usize> = 5..=20;

/// Smallest and largest page cap.
pub const MAX_PAGES_RANGE: std::ops::RangeInclusive<usize> = 1..=40;

/// Settings for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Model name passed to the completions service
  pub model:        String,
  /// Base URL of the OpenAI-compatible API, including any version prefix
  pub api_base:     String,
  /// Request timeout in seconds
  pub timeout_secs: u64,
  /// Number of quiz questions to request
  pub questions:    usize,
  /// Only the first `max_pages` pages of a PDF are processed
  pub max_pages:    usize,
  /// Chunk size in tokens for summarization
  pub chunk_tokens: usize,
  /// Chunk summaries requested concurrently
  pub concurrency:  usize,
  /// Source attribution limits
  pub attribution:  AttributionConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      model:        "gpt-4o-mini".to_string(),
      api_base:     "https://api.openai.com/v1".to_string(),
      timeout_secs: 60,
      questions:    10,
      max_pages:    10,
      chunk_tokens: chunking::DEFAULT_CHUNK_TOKENS,
      concurrency:  4,
      attribution:  AttributionConfig::default(),
    }
  }
}

impl Config {
  /// Returns the default path of the configuration file.
  ///
  /// - On Linux: `~/.config/studygen/config.toml`
  /// - On macOS: `~/Library/Application Support/studygen/config.toml`
  /// - On Windows: `%APPDATA%\studygen\config.toml`
  ///
  /// # Errors
  ///
  /// Returns [`StudygenError::Config`] when the platform has no configuration directory.
  pub fn default_path() -> Result<PathBuf> {
    dirs::config_dir()
      .map(|dir| dir.join("studygen").join("config.toml"))
      .ok_or_else(|| StudygenError::Config("Could not determine a configuration directory".into()))
  }

  /// Reads and validates the configuration at `path`.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    debug!("Loaded configuration from {}", path.as_ref().display());
    Ok(config)
  }

  /// Like [`Config::load`], but returns the defaults when no file exists at `path`.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
    if path.as_ref().exists() {
      Self::load(path)
    } else {
      info!("No configuration at {}, using defaults", path.as_ref().display());
      Ok(Self::default())
    }
  }

  /// Writes the configuration to `path`, creating parent directories.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    Ok(())
  }

  /// Checks every value is in its supported range.
  pub fn validate(&self) -> Result<()> {
    if self.model.trim().is_empty() {
      return Err(StudygenError::Config("Model name must not be empty".into()));
    }
    if !QUESTION_RANGE.contains(&self.questions) {
      return Err(StudygenError::Config(format!(
        "Number of questions must be between {} and {}, got {}",
        QUESTION_RANGE.start(),
        QUESTION_RANGE.end(),
        self.questions
      )));
    }
    if !MAX_PAGES_RANGE.contains(&self.max_pages) {
      return Err(StudygenError::Config(format!(
        "Page cap must be between {} and {}, got {}",
        MAX_PAGES_RANGE.start(),
        MAX_PAGES_RANGE.end(),
        self.max_pages
      )));
    }
    if self.chunk_tokens == 0 || self.concurrency == 0 || self.timeout_secs == 0 {
      return Err(StudygenError::Config(
        "Chunk size, concurrency and timeout must be greater than zero".into(),
      ));
    }
    self.attribution.validate()
  }

  /// Sets the model.
  pub fn with_model(mut self, model: impl Into<String>) -> Self {
    self.model = model.into();
    self
  }

  /// Sets the API base URL.
  pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
    self.api_base = api_base.into();
    self
  }

  /// Sets the number of quiz questions.
  pub fn with_questions(mut self, questions: usize) -> Self {
    self.questions = questions;
    self
  }

  /// Sets the page cap.
  pub fn with_max_pages(mut self, max_pages: usize) -> Self {
    self.max_pages = max_pages;
    self
  }

  /// Sets the attribution limits.
  pub fn with_attribution(mut self, attribution: AttributionConfig) -> Self {
    self.attribution = attribution;
    self
  }

  /// Returns the first non-blank API key found in [`API_KEY_VARS`].
  ///
  /// # Errors
  ///
  /// Returns [`StudygenError::MissingApiKey`] when none is set.
  pub fn api_key() -> Result<String> {
    API_KEY_VARS
      .iter()
      .filter_map(|var| std::env::var(var).ok())
      .find(|key| !key.trim().is_empty())
      .ok_or(StudygenError::MissingApiKey)
  }
}

#[cfg(test)]
mod tests {
  use serial_test::serial;

  use super::*;

  #[test]
  fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let config = Config::default().with_model("gpt-4o").with_questions(15).with_max_pages(25);

    config.save(&path).unwrap();
    assert_eq!(Config::load(&path).unwrap(), config);
  }

  #[test]
  fn test_partial_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "questions = 5\n\n[attribution]\nwindow = 100\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.questions, 5);
    assert_eq!(config.model, "gpt-4o-mini");
    assert_eq!(config.attribution.window, 100);
    assert_eq!(config.attribution.score_keywords, 12);
  }

  #[traced_test]
  #[test]
  fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert!(logs_contain("using defaults"));
  }

  #[test]
  fn test_validation_ranges() {
    assert!(Config::default().validate().is_ok());
    assert!(Config::default().with_questions(4).validate().is_err());
    assert!(Config::default().with_questions(21).validate().is_err());
    assert!(Config::default().with_max_pages(0).validate().is_err());
    assert!(Config::default().with_max_pages(41).validate().is_err());
    assert!(Config::default().with_model(" ").validate().is_err());
  }

  #[test]
  fn test_invalid_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "questions = \"many\"").unwrap();
    assert!(matches!(Config::load(&path), Err(StudygenError::TomlDe(_))));

    std::fs::write(&path, "questions = 50").unwrap();
    assert!(matches!(Config::load(&path), Err(StudygenError::Config(_))));
  }

  #[test]
  fn test_api_key_is_not_serialized() {
    let rendered = toml::to_string(&Config::default()).unwrap();
    assert!(!rendered.contains("api_key"));
    assert!(rendered.contains("api_base"));
  }

  #[test]
  #[serial]
  fn test_api_key_resolution_order() {
    std::env::set_var("STUDYGEN_API_KEY", "primary");
    std::env::set_var("OPENAI_API_KEY", "fallback");
    assert_eq!(Config::api_key().unwrap(), "primary");

    std::env::set_var("STUDYGEN_API_KEY", " ");
    assert_eq!(Config::api_key().unwrap(), "fallback");

    std::env::remove_var("STUDYGEN_API_KEY");
    std::env::remove_var("OPENAI_API_KEY");
    assert!(matches!(Config::api_key(), Err(StudygenError::MissingApiKey)));
  }
}
