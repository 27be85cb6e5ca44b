use super::*;

fn two_pages() -> Vec<Page> { vec![Page::new(1, "Alpha beta."), Page::new(2, "Gamma delta epsilon.")] }

#[test]
fn test_single_page_photosynthesis() {
  let text = "Photosynthesis converts light energy into chemical energy in plants.";
  let pages = vec![Page::new(1, text)];
  let question = "What does photosynthesis produce?";

  assert!(keywords(question).contains(&"photosynthesis".to_string()));
  assert_eq!(best_page(question, &pages, 12).unwrap(), &pages[0]);
  assert!(excerpt(text, question, 8, 280).starts_with("Photosynthesis converts light energy"));
}

#[test]
fn test_unmatched_keywords_fall_back_to_first_page() {
  let pages = two_pages();
  let page = best_page("xyz zzzz", &pages, 12).unwrap();
  assert_eq!(page.page_number, 1);
  assert_eq!(excerpt(&page.text, "xyz zzzz", 8, 280), "Alpha beta.");
}

#[test]
fn test_keywordless_question_uses_first_page() {
  let pages = two_pages();
  assert!(keywords("").is_empty());
  assert_eq!(best_page("", &pages, 12).unwrap().page_number, 1);
  assert_eq!(best_page("is it on the map?", &pages, 12).unwrap().page_number, 1);
}

#[test]
fn test_no_pages_is_always_an_error() {
  assert!(matches!(best_page("epsilon", &[], 12), Err(StudygenError::EmptyDocument)));
  let quiz = Quiz { questions: vec![question("epsilon")] };
  assert!(matches!(
    attach_sources(quiz, &Document::default(), &AttributionConfig::default()),
    Err(StudygenError::EmptyDocument)
  ));
}

#[test]
fn test_later_page_wins_on_frequency() {
  let pages = vec![
    Page::new(1, "Mitosis is mentioned once."),
    Page::new(2, "Mitosis and mitosis again: mitosis everywhere."),
    Page::new(3, "Mitosis twice, mitosis."),
  ];
  assert_eq!(best_page("Describe mitosis", &pages, 12).unwrap().page_number, 2);
}

#[test]
fn test_ties_resolve_to_earliest_page() {
  let pages = vec![
    Page::new(1, "Nothing relevant here."),
    Page::new(2, "Enzymes lower activation energy."),
    Page::new(3, "Enzymes lower activation energy."),
  ];
  assert_eq!(best_page("How do enzymes work?", &pages, 12).unwrap().page_number, 2);
}

#[test]
fn test_matching_is_case_insensitive_and_substring_based() {
  let pages = vec![Page::new(1, "Intro."), Page::new(2, "RESPIRATIONAL pathways in CELLS.")];
  assert_eq!(best_page("respiration", &pages, 12).unwrap().page_number, 2);
}

#[test]
fn test_excerpt_is_bounded_by_window() {
  let filler = "lorem ipsum dolor sit amet ".repeat(40);
  let text = format!("{filler}the krebs cycle happens here {filler}");
  let window = 50;

  let snippet = excerpt(&text, "Where does the Krebs cycle occur?", 8, window);
  assert!(snippet.starts_with("… "));
  assert!(snippet.ends_with(" …"));
  assert!(snippet.contains("krebs cycle"));
  assert!(snippet.chars().count() <= 2 * window + 4);
  assert!(text.contains(snippet.trim_start_matches("… ").trim_end_matches(" …")));
}

#[test]
fn test_excerpt_handles_multibyte_text() {
  let text = "Überblick: Die Zellatmung — Glykolyse läuft im Zytoplasma ab. Größe egal.";
  let snippet = excerpt(text, "Where does glykolyse happen?", 8, 12);
  assert!(snippet.contains("Glykolyse"));
  assert!(snippet.chars().count() <= 2 * 12 + 4);
}

#[test]
fn test_attach_sources_is_deterministic() {
  let document = Document::new(vec![
    Page::new(1, "Cell membranes regulate transport."),
    Page::new(2, "Diffusion moves particles down a concentration gradient."),
    Page::new(3, "Active transport uses energy from ATP."),
  ]);
  let quiz = Quiz {
    questions: vec![
      question("What drives diffusion of particles?"),
      question("Which transport requires energy?"),
      question("???"),
    ],
  };
  let config = AttributionConfig::default();

  let first = attach_sources(quiz.clone(), &document, &config).unwrap();
  let second = attach_sources(quiz, &document, &config).unwrap();
  assert_eq!(first, second);

  let pages: Vec<_> = first.questions.iter().map(|q| q.source_page).collect();
  assert_eq!(pages, vec![Some(2), Some(3), Some(1)]);
  assert!(first.questions.iter().all(|q| q.source_excerpt.is_some()));
}

#[test]
fn test_attach_sources_leaves_answers_untouched() {
  let document = Document::new(vec![Page::new(1, "Ribosomes assemble proteins.")]);
  let original = Quiz { questions: vec![question("Where are proteins assembled?")] };

  let annotated = attach_sources(original.clone(), &document, &AttributionConfig::default()).unwrap();
  let (before, after) = (&original.questions[0], &annotated.questions[0]);
  assert_eq!(before.question, after.question);
  assert_eq!(before.choices, after.choices);
  assert_eq!(before.correct, after.correct);
  assert_eq!(before.rationale, after.rationale);
  assert_eq!(after.source_page, Some(1));
}

#[test]
fn test_scoring_cap_limits_considered_keywords() {
  let pages = vec![Page::new(1, "alpha alpha alpha"), Page::new(2, "omega omega omega omega")];
  let question = "alpha bravo charlie delta omega";
  assert_eq!(best_page(question, &pages, 5).unwrap().page_number, 2);
  assert_eq!(best_page(question, &pages, 1).unwrap().page_number, 1);
}
