use super::*;

/// Arguments for `take`.
#[derive(Args)]
pub struct TakeOptions {
  /// Quiz JSON file
  pub quiz:    PathBuf,
  /// Comma-separated answers (A-D, or `-` to skip) used instead of prompting
  #[arg(long, value_delimiter = ',')]
  pub answers: Option<Vec<String>>,
}

/// Function for the [`Commands::Take`] in the CLI.
///
/// Questions are shown one at a time. After each answer the correct choice, the rationale and,
/// when available, the source page and excerpt are shown.
pub fn take(cli: &Cli, options: &TakeOptions) -> Result<()> {
  let quiz = read_quiz(&options.quiz)?;
  let scripted = options
    .answers
    .as_ref()
    .map(|answers| answers.iter().map(|answer| parse_answer(answer)).collect::<Result<Vec<_>>>())
    .transpose()?;
  if let Some(answers) = &scripted {
    if answers.len() > quiz.len() {
      return Err(CliError::InvalidInput(format!(
        "Got {} answers for a quiz of {} questions",
        answers.len(),
        quiz.len()
      )));
    }
  }

  let mut attempt = QuizAttempt::new(&quiz);
  for (index, question) in quiz.questions.iter().enumerate() {
    println!(
      "\n{} {}",
      style(format!("Question {} of {}:", index + 1, quiz.len())).cyan().bold(),
      question.question
    );
    let answer = match &scripted {
      Some(answers) => answers.get(index).copied().flatten(),
      None => ask(cli, question)?,
    };

    let solution = format!("{}. {}", question.correct, question.choices.get(question.correct));
    match answer {
      Some(choice) =>
        if attempt.answer(index, choice)? {
          cli.reply(ResponseContent::Success("Correct!"))?
        } else {
          cli.reply(ResponseContent::Warning(&format!(
            "You answered {choice}. The correct answer is {solution}"
          )))?
        },
      None => {
        attempt.skip(index)?;
        cli.reply(ResponseContent::Info(&format!("Skipped. The correct answer is {solution}")))?
      },
    }
    show_explanation(question);
  }

  let results = attempt.results();
  trace!("Final results: {:?}", results);
  cli.reply(ResponseContent::Success(&format!(
    "Answered {} of {} questions, {} correct",
    results.answered, results.total, results.correct
  )))
}

/// Prompts for one answer; the extra last item skips the question.
fn ask(cli: &Cli, question: &QuizQuestion) -> Result<Option<ChoiceKey>> {
  let items: Vec<String> = question
    .choices
    .iter()
    .map(|(key, text)| format!("{key}. {text}"))
    .chain(std::iter::once("Skip".to_string()))
    .collect();
  Ok(cli.select("Your answer", &items)?.and_then(|index| ChoiceKey::ALL.get(index).copied()))
}

/// Parses a scripted answer, where `-` or an empty entry means skip.
fn parse_answer(answer: &str) -> Result<Option<ChoiceKey>> {
  match answer.trim() {
    "" | "-" => Ok(None),
    choice => Ok(Some(choice.parse::<ChoiceKey>()?)),
  }
}

/// Prints the rationale and the source evidence of a question.
fn show_explanation(question: &QuizQuestion) {
  println!("{DETAIL_INDENT}{} {}", style("Why:").green().bold(), question.rationale);
  if let Some(page) = question.source_page {
    println!("{DETAIL_INDENT}{} PDF page {}", style("Source:").green().bold(), page);
  }
  if let Some(excerpt) = question.source_excerpt.as_deref().filter(|excerpt| !excerpt.is_empty()) {
    println!("{DETAIL_INDENT}{} {}", style("Excerpt:").green().bold(), style(excerpt).italic());
  }
}
