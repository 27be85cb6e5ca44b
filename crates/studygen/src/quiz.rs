//! Multiple-choice quiz types, model-output validation, and quiz attempts.
//!
//! Quizzes arrive as JSON written by a language model. [`Quiz::from_model_output`] recovers the
//! JSON object from surrounding chatter and validates its shape before anything downstream sees
//! it; source attribution assumes a validated quiz.
//!
//! # Examples
//!
//! ```
//! use studygen::quiz::{ChoiceKey, Quiz, QuizAttempt};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let output = r#"Here is your quiz:
//! {"questions": [{"question": "2 + 2?",
//!   "choices": {"A": "3", "B": "4", "C": "5", "D": "22"},
//!   "correct": "B", "rationale": "Arithmetic."}]}"#;
//! let quiz = Quiz::from_model_output(output)?;
//!
//! let mut attempt = QuizAttempt::new(&quiz);
//! assert!(attempt.answer(0, ChoiceKey::B)?);
//! assert_eq!(attempt.results().correct, 1);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

use super::*;

lazy_static! {
  /// Outermost brace-delimited span, across newlines.
  static ref JSON_OBJECT: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
}

/// Label of one of the four answer choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChoiceKey {
  /// First choice
  A,
  /// Second choice
  B,
  /// Third choice
  C,
  /// Fourth choice
  D,
}

impl ChoiceKey {
  /// All labels in presentation order.
  pub const ALL: [ChoiceKey; 4] = [ChoiceKey::A, ChoiceKey::B, ChoiceKey::C, ChoiceKey::D];
}

impl Display for ChoiceKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let label = match self {
      ChoiceKey::A => "A",
      ChoiceKey::B => "B",
      ChoiceKey::C => "C",
      ChoiceKey::D => "D",
    };
    write!(f, "{label}")
  }
}

impl FromStr for ChoiceKey {
  type Err = StudygenError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_uppercase().as_str() {
      "A" => Ok(ChoiceKey::A),
      "B" => Ok(ChoiceKey::B),
      "C" => Ok(ChoiceKey::C),
      "D" => Ok(ChoiceKey::D),
      _ => Err(StudygenError::InvalidChoice(s.to_string())),
    }
  }
}

/// The four answer choices of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct Choices {
  /// Text of choice A
  pub A: String,
  /// Text of choice B
  pub B: String,
  /// Text of choice C
  pub C: String,
  /// Text of choice D
  pub D: String,
}

impl Choices {
  /// Creates a choice set in `A`-`D` order.
  pub fn new(
    a: impl Into<String>,
    b: impl Into<String>,
    c: impl Into<String>,
    d: impl Into<String>,
  ) -> Self {
    Self { A: a.into(), B: b.into(), C: c.into(), D: d.into() }
  }

  /// Text of the choice labelled `key`.
  pub fn get(&self, key: ChoiceKey) -> &str {
    match key {
      ChoiceKey::A => &self.A,
      ChoiceKey::B => &self.B,
      ChoiceKey::C => &self.C,
      ChoiceKey::D => &self.D,
    }
  }

  /// Labels paired with their choice text, in presentation order.
  pub fn iter(&self) -> impl Iterator<Item = (ChoiceKey, &str)> {
    ChoiceKey::ALL.into_iter().map(move |key| (key, self.get(key)))
  }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
  /// The question prompt
  pub question:       String,
  /// The four answer choices
  pub choices:        Choices,
  /// Label of the correct choice
  pub correct:        ChoiceKey,
  /// Explanation of the correct answer
  pub rationale:      String,
  /// Page the answer is attributed to, set by source attribution
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source_page:    Option<u32>,
  /// Verbatim supporting excerpt, set by source attribution
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source_excerpt: Option<String>,
}

impl QuizQuestion {
  /// Creates an unattributed question.
  pub fn new(
    question: impl Into<String>,
    choices: Choices,
    correct: ChoiceKey,
    rationale: impl Into<String>,
  ) -> Self {
    Self {
      question: question.into(),
      choices,
      correct,
      rationale: rationale.into(),
      source_page: None,
      source_excerpt: None,
    }
  }

  /// Whether `answer` is the correct choice.
  pub fn is_correct(&self, answer: ChoiceKey) -> bool { self.correct == answer }
}

/// An ordered list of questions, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
  /// Questions in the order they were generated
  pub questions: Vec<QuizQuestion>,
}

impl Quiz {
  /// Parses and validates a quiz from raw language model output.
  ///
  /// The output may wrap the JSON in prose or markdown fences; the first `{` through the last `}`
  /// is taken as the object unless the whole trimmed output already is one.
  ///
  /// # Errors
  ///
  /// Returns [`StudygenError::MalformedQuiz`] when:
  /// - No JSON object can be found or it does not parse
  /// - The top-level value is not an object or lacks `questions`
  /// - `questions` is not a non-empty list
  /// - Any question is missing a field, lacks one of the four choices, or has a `correct` label
  ///   other than `A`-`D`
  pub fn from_model_output(text: &str) -> Result<Self> {
    let json = extract_json_object(text)?;
    let value: Value = serde_json::from_str(json)
      .map_err(|e| StudygenError::MalformedQuiz(format!("invalid JSON: {e}")))?;

    let Value::Object(object) = &value else {
      return Err(StudygenError::MalformedQuiz("parsed JSON is not an object".to_string()));
    };
    let questions = object.get("questions").ok_or_else(|| {
      StudygenError::MalformedQuiz("missing required top-level key \"questions\"".to_string())
    })?;
    match questions {
      Value::Array(list) if !list.is_empty() => {},
      _ =>
        return Err(StudygenError::MalformedQuiz("\"questions\" must be a non-empty list".to_string())),
    }

    let quiz: Quiz = serde_json::from_value(value)
      .map_err(|e| StudygenError::MalformedQuiz(format!("invalid question: {e}")))?;
    debug!("Parsed quiz with {} questions", quiz.questions.len());
    Ok(quiz)
  }

  /// Number of questions.
  pub fn len(&self) -> usize { self.questions.len() }

  /// Whether the quiz has no questions.
  pub fn is_empty(&self) -> bool { self.questions.is_empty() }
}

/// Locates the JSON object inside model output.
fn extract_json_object(text: &str) -> Result<&str> {
  let stripped = text.trim();
  if stripped.starts_with('{') && stripped.ends_with('}') {
    return Ok(stripped);
  }

  JSON_OBJECT
    .find(text)
    .map(|m| m.as_str().trim())
    .ok_or_else(|| StudygenError::MalformedQuiz("no JSON object found in model output".to_string()))
}

/// Totals for a finished or in-progress quiz attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResults {
  /// Questions with a recorded answer
  pub answered: usize,
  /// Answers that were correct
  pub correct:  usize,
  /// Questions in the quiz
  pub total:    usize,
}

/// One pass through a quiz by a student.
///
/// Each question is either answered, skipped, or not yet reached. Skipped questions count towards
/// neither `answered` nor `correct`.
#[derive(Debug, Clone)]
pub struct QuizAttempt<'a> {
  /// Quiz being taken
  quiz:    &'a Quiz,
  /// Recorded answer per question index, `None` for skips
  answers: BTreeMap<usize, Option<ChoiceKey>>,
}

impl<'a> QuizAttempt<'a> {
  /// Starts an attempt with nothing answered.
  pub fn new(quiz: &'a Quiz) -> Self { Self { quiz, answers: BTreeMap::new() } }

  /// Records `answer` for question `index`, replacing any earlier answer.
  ///
  /// Returns whether the answer is correct.
  pub fn answer(&mut self, index: usize, answer: ChoiceKey) -> Result<bool> {
    let question = self.question(index)?;
    let correct = question.is_correct(answer);
    self.answers.insert(index, Some(answer));
    Ok(correct)
  }

  /// Marks question `index` as skipped, discarding any earlier answer.
  pub fn skip(&mut self, index: usize) -> Result<()> {
    self.question(index)?;
    self.answers.insert(index, None);
    Ok(())
  }

  /// The recorded answer for question `index`, if one was given.
  pub fn answer_for(&self, index: usize) -> Option<ChoiceKey> {
    self.answers.get(&index).copied().flatten()
  }

  /// Whether question `index` was answered or skipped.
  pub fn is_submitted(&self, index: usize) -> bool { self.answers.contains_key(&index) }

  /// Current totals.
  pub fn results(&self) -> QuizResults {
    let mut results = QuizResults { total: self.quiz.len(), ..Default::default() };
    for (index, answer) in &self.answers {
      if let Some(answer) = answer {
        results.answered += 1;
        if self.quiz.questions[*index].is_correct(*answer) {
          results.correct += 1;
        }
      }
    }
    results
  }

  /// Bounds-checked question access.
  fn question(&self, index: usize) -> Result<&'a QuizQuestion> {
    self
      .quiz
      .questions
      .get(index)
      .ok_or(StudygenError::QuestionOutOfRange { index, len: self.quiz.len() })
  }
}
