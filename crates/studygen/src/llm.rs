//! Client implementation for OpenAI-compatible chat completion services.
//!
//! Generation is reached through the [`Generator`] trait so the pipeline never depends on a
//! particular provider. [`ChatClient`] implements it against any service exposing the
//! `/chat/completions` endpoint (OpenAI, or a local server such as Ollama's compatibility API).
//!
//! # Examples
//!
//! ```no_run
//! use studygen::{
//!   llm::{ChatClient, GenerationOptions, Message},
//!   prelude::*,
//!   Config,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ChatClient::from_config(&Config::default())?;
//! let reply = client
//!   .complete(
//!     vec![Message::system("You are a precise assistant."), Message::user("What is osmosis?")],
//!     &GenerationOptions::default(),
//!   )
//!   .await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::Url;

use super::*;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  /// Instructions that frame the conversation
  System,
  /// Input from the user
  User,
  /// Output from the model
  Assistant,
}

/// Message structure for LLM interactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
  /// Who wrote the message
  pub role:    Role,
  /// The message text
  pub content: String,
}

impl Message {
  /// A system message.
  pub fn system(content: impl Into<String>) -> Self {
    Self { role: Role::System, content: content.into() }
  }

  /// A user message.
  pub fn user(content: impl Into<String>) -> Self { Self { role: Role::User, content: content.into() } }
}

/// Sampling settings for one completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
  /// Sampling temperature
  pub temperature: f64,
  /// Upper bound on generated tokens
  pub max_tokens:  u32,
  /// Ask the service to return a single JSON object
  pub json:        bool,
}

impl Default for GenerationOptions {
  fn default() -> Self { Self { temperature: 0.3, max_tokens: 800, json: false } }
}

/// Anything that can turn a conversation into a reply.
///
/// The pipeline is generic over this trait; tests drive it with scripted replies.
#[async_trait]
pub trait Generator: Send + Sync {
  /// Produces the model's reply to `messages`, trimmed of surrounding whitespace.
  async fn complete(&self, messages: Vec<Message>, options: &GenerationOptions) -> Result<String>;
}

/// Requested output format.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
  /// Format name understood by the service, e.g. `json_object`
  #[serde(rename = "type")]
  pub kind: String,
}

/// Request builder for chat completions.
///
/// # Examples
///
/// ```
/// use studygen::llm::ChatRequest;
///
/// let request = ChatRequest::new()
///   .with_model("gpt-4o-mini")
///   .with_system("You are an expert tutor.")
///   .with_message("Summarize chapter one.");
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
  /// The model to use. Sending without one is an error.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub model:           Option<String>,
  /// Conversation messages, processed in order
  pub messages:        Vec<Message>,
  /// Sampling temperature
  pub temperature:     f64,
  /// Upper bound on generated tokens
  pub max_tokens:      u32,
  /// Optional structured output format
  #[serde(skip_serializing_if = "Option::is_none")]
  pub response_format: Option<ResponseFormat>,
}

impl Default for ChatRequest {
  fn default() -> Self { Self::new().with_options(&GenerationOptions::default()) }
}

impl ChatRequest {
  /// Creates an empty request.
  pub fn new() -> Self {
    Self { model: None, messages: Vec::new(), temperature: 0.0, max_tokens: 0, response_format: None }
  }

  /// Sets the model to use for the request.
  pub fn with_model(mut self, model: impl Into<String>) -> Self {
    self.model.replace(model.into());
    self
  }

  /// Adds a system message.
  pub fn with_system(mut self, content: &str) -> Self {
    self.messages.push(Message::system(content));
    self
  }

  /// Adds a user message.
  pub fn with_message(mut self, content: &str) -> Self {
    self.messages.push(Message::user(content));
    self
  }

  /// Replaces the conversation.
  pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
    self.messages = messages;
    self
  }

  /// Applies sampling settings.
  pub fn with_options(mut self, options: &GenerationOptions) -> Self {
    self.temperature = options.temperature;
    self.max_tokens = options.max_tokens;
    self.response_format =
      options.json.then(|| ResponseFormat { kind: "json_object".to_string() });
    self
  }

  /// Checks that the request can be sent.
  ///
  /// # Errors
  ///
  /// - [`StudygenError::LLMMissingModel`] when no model is set
  /// - [`StudygenError::LLMMissingMessage`] when there are no messages
  pub fn validate(&self) -> Result<()> {
    if self.model.is_none() {
      return Err(StudygenError::LLMMissingModel);
    }
    if self.messages.is_empty() {
      return Err(StudygenError::LLMMissingMessage);
    }
    Ok(())
  }
}

/// Response structure from chat completion requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
  /// Name of the model that answered
  #[serde(default)]
  pub model:   String,
  /// Candidate replies; only the first is used
  pub choices: Vec<ChatChoice>,
}

/// One candidate reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
  /// The generated message
  pub message:       Message,
  /// Why generation stopped
  #[serde(default)]
  pub finish_reason: Option<String>,
}

impl ChatResponse {
  /// Text of the first choice, trimmed.
  pub fn content(&self) -> Result<String> {
    let choice = self
      .choices
      .first()
      .ok_or_else(|| StudygenError::ApiError("response contained no choices".to_string()))?;
    if choice.finish_reason.as_deref() == Some("length") {
      warn!("Model {} stopped at the token limit, reply may be truncated", self.model);
    }
    Ok(choice.message.content.trim().to_string())
  }
}

/// HTTP client for an OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct ChatClient {
  /// Shared connection pool
  client:   reqwest::Client,
  /// Full URL of the completions endpoint
  endpoint: Url,
  /// Model used when a request does not name one
  model:    String,
  /// Bearer token
  api_key:  String,
}

impl ChatClient {
  /// Creates a client for the service rooted at `api_base`.
  ///
  /// # Errors
  ///
  /// Returns [`StudygenError::Config`] if `api_base` is not a valid URL, or a network error if
  /// the HTTP client cannot be built.
  pub fn new(
    api_base: &str,
    model: impl Into<String>,
    api_key: impl Into<String>,
    timeout: Duration,
  ) -> Result<Self> {
    let endpoint = completions_endpoint(api_base)?;
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(Self { client, endpoint, model: model.into(), api_key: api_key.into() })
  }

  /// Creates a client from configuration, resolving the API key from the environment.
  ///
  /// # Errors
  ///
  /// Returns [`StudygenError::MissingApiKey`] when no key is set.
  pub fn from_config(config: &Config) -> Result<Self> {
    Self::new(
      &config.api_base,
      config.model.clone(),
      Config::api_key()?,
      Duration::from_secs(config.timeout_secs),
    )
  }

  /// The completions endpoint requests are sent to.
  pub fn endpoint(&self) -> &Url { &self.endpoint }

  /// Sends a request, filling in the client's model when the request has none.
  ///
  /// # Errors
  ///
  /// This function will return an error if:
  /// - No messages are provided
  /// - The network request fails
  /// - The service answers with a non-success status
  /// - The response cannot be parsed
  pub async fn send(&self, mut request: ChatRequest) -> Result<ChatResponse> {
    if request.model.is_none() {
      request.model = Some(self.model.clone());
    }
    request.validate()?;

    trace!("Sending {} messages to {}", request.messages.len(), self.endpoint);
    let response =
      self.client.post(self.endpoint.clone()).bearer_auth(&self.api_key).json(&request).send().await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(StudygenError::ApiError(format!("{status}: {body}")));
    }
    Ok(response.json().await?)
  }
}

#[async_trait]
impl Generator for ChatClient {
  async fn complete(&self, messages: Vec<Message>, options: &GenerationOptions) -> Result<String> {
    let request = ChatRequest::new().with_messages(messages).with_options(options);
    self.send(request).await?.content()
  }
}

/// Resolves the completions endpoint under `api_base`, keeping any path prefix such as `/v1`.
fn completions_endpoint(api_base: &str) -> Result<Url> {
  let base = if api_base.ends_with('/') { api_base.to_string() } else { format!("{api_base}/") };
  Url::parse(&base)
    .and_then(|url| url.join("chat/completions"))
    .map_err(|e| StudygenError::Config(format!("Invalid API base URL \"{api_base}\": {e}")))
}
