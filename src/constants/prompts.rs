/// Model and sampling settings are fixed by design; callers cannot
/// override them per request.
pub const GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const SAMPLING_TEMPERATURE: f32 = 0.7;

/// Two-step instruction template sent to the generation backend. The
/// placeholders `{text}`, `{subtest}`, `{domain}`, `{score_band}` and
/// `{skill}` are substituted verbatim before dispatch.
///
/// The backend is asked to produce the "Leveled Text:", "Question:",
/// "Choices:" and "Feedback:" headings, but nothing downstream parses
/// or enforces that structure; the response is returned to the caller
/// as-is.
pub const QUESTION_GENERATOR_TEMPLATE: &str = r#"You are an expert SAT tutor and content creator. Your task is to perform two steps:
First, rewrite a user-provided text to match a specific SAT score band's complexity.
Second, use that newly rewritten text to create a high-quality, multiple-choice question.

**Step 1: Rewrite the Text**
- Analyze the original text provided below.
- Rewrite it so its vocabulary, sentence structure, and complexity are appropriate for a student in **Score Band {score_band}**.
- For lower score bands (1-3), use simpler language and shorter sentences.
- For higher score bands (5-7), use more sophisticated vocabulary and more complex sentence structures.
- Present the result under the heading "Leveled Text:".

**Step 2: Generate a Question from the Leveled Text**
- Using ONLY the "Leveled Text" you just created, generate one multiple-choice question.
- The question must specifically assess this skill: **"{skill}"**
- The question should be appropriate for the **{subtest}** section's **{domain}** domain.
- Present the result under the headings "Question:", "Choices:", and "Feedback:".
- The feedback must explain the correct answer and why the others are wrong, referencing the Leveled Text.

**Original Text:**
---
{text}
---
"#;
