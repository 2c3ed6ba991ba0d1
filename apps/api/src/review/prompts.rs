// Prompts for the resume reviewer. Each module that calls the LLM keeps its
// prompts in a prompts.rs next to the call site.

/// System prompt for the summary call.
pub const SUMMARY_SYSTEM: &str =
    "You are a professional HR manager reviewing resumes. Be concrete and concise.";

/// Prompt template for the summary call. `{resume_text}` is replaced with
/// the extracted resume text.
pub const SUMMARY_PROMPT_TEMPLATE: &str = "\
You are a professional HR manager. Summarize this resume text.
Provide a summary, key strengths, and one suggestion.

Resume Text:
{resume_text}";

/// System prompt for the scoring call.
pub const SCORING_SYSTEM: &str =
    "You are a strict technical recruiter. Follow the requested output format exactly.";

/// Prompt template for the scoring call. The fixed SCORE/REASON output
/// format is what `parse_verdict` expects.
pub const SCORING_PROMPT_TEMPLATE: &str = "\
Act as a strict recruiter. Analyze the following resume text and give it a score out of 100.

CRITERIA:
- Clarity and formatting
- Impact of descriptions
- Relevance of skills

OUTPUT FORMAT (Strictly follow this):
SCORE: [Insert Number Here]
REASON: [Insert a 1-2 sentence explanation for the score]

Resume Text:
{resume_text}";
