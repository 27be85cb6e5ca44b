//! Prompt templates for study guide and quiz generation.

/// System message for per-chunk study guide generation.
pub const STUDY_GUIDE_SYSTEM: &str = "You are an expert tutor. Produce a structured study guide.";

/// System message for merging partial guides.
pub const COMBINE_SYSTEM: &str =
  "You are an expert tutor. Produce a cohesive structured study guide.";

/// System message for quiz generation.
pub const QUIZ_SYSTEM: &str =
  "You are an expert exam writer. Return only the required structured output.";

/// Instructions placed before each chunk of source material.
pub const STUDY_GUIDE_PROMPT: &str = "You are an expert tutor. Create a student-friendly study \
guide from the material.
Requirements:
- Use headings and bullet points.
- Include: Key Concepts, Definitions, Examples (if present), Common Pitfalls, and a 5-bullet Quick \
Review.
- Keep it concise but complete.
Material:
";

/// Instructions placed before the concatenated partial guides.
pub const COMBINE_PROMPT: &str = "Combine and clean up the following partial study guides into ONE \
cohesive study guide. Remove duplicates, keep structure, and keep it student-friendly.

";

/// Quiz instructions. `{n}` is replaced with the requested question count.
pub const QUIZ_PROMPT: &str = r#"Create a quiz from the study guide.

Return ONLY valid JSON. Do not include markdown fences. Do not include commentary.
The JSON must match exactly:

{
  "questions": [
    {
      "question": "string",
      "choices": {"A":"string","B":"string","C":"string","D":"string"},
      "correct": "A",
      "rationale": "string"
    }
  ]
}

Rules:
- Exactly {n} questions
- "correct" must be one of A,B,C,D
- Always include the top-level key "questions"
Study guide:
"#;

/// Prompt for one chunk of source material.
pub fn study_guide_prompt(chunk: &str) -> String { format!("{STUDY_GUIDE_PROMPT}\n\n{chunk}") }

/// Prompt for merging partial guides into one.
pub fn combine_prompt(partials: &[String]) -> String {
  format!("{COMBINE_PROMPT}{}", partials.join("\n\n"))
}

/// Prompt for a quiz of `n` questions over `study_guide`.
///
/// The template contains literal JSON braces, so the count is substituted by plain replacement.
pub fn quiz_prompt(study_guide: &str, n: usize) -> String {
  format!("{}\n\n{study_guide}", QUIZ_PROMPT.replace("{n}", &n.to_string()))
}
