//! Resume review — the AI summarizer and scorer.
//!
//! Pluggable, trait-based seam carried in `AppState` as `Arc<dyn ResumeReviewer>`
//! so the orchestration path can be exercised against a stub. The Gemini-backed
//! implementation returns explicit errors; the caller decides the placeholder
//! text, which keeps the "never fail the page" contract at the handler.

use async_trait::async_trait;
use regex::Regex;
use serde::Serialize;

use crate::llm_client::{GeminiClient, LlmError};
use crate::review::prompts::{
    SCORING_PROMPT_TEMPLATE, SCORING_SYSTEM, SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM,
};

pub mod prompts;

/// Fallback reason when the model ignores the requested output format.
pub const UNPARSED_REASON: &str = "Could not parse reasoning.";

const MAX_AI_SCORE: u32 = 100;

/// Parsed outcome of the AI scoring call.
#[derive(Debug, Clone, Serialize)]
pub struct AiVerdict {
    /// Within `[0, 100]`; 0 when the score line is missing or malformed.
    pub score: u32,
    pub reason: String,
}

#[async_trait]
pub trait ResumeReviewer: Send + Sync {
    /// Free-text summary: overview, key strengths, one suggestion.
    async fn summarize(&self, resume_text: &str) -> Result<String, LlmError>;

    /// Scores the resume 0–100 with a short reason.
    async fn score(&self, resume_text: &str) -> Result<AiVerdict, LlmError>;
}

/// Gemini-backed reviewer.
pub struct GeminiReviewer {
    llm: GeminiClient,
}

impl GeminiReviewer {
    pub fn new(llm: GeminiClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeReviewer for GeminiReviewer {
    async fn summarize(&self, resume_text: &str) -> Result<String, LlmError> {
        let prompt = SUMMARY_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
        let response = self.llm.call(&prompt, SUMMARY_SYSTEM).await?;
        response.text().ok_or(LlmError::EmptyContent)
    }

    async fn score(&self, resume_text: &str) -> Result<AiVerdict, LlmError> {
        let prompt = SCORING_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
        let response = self.llm.call(&prompt, SCORING_SYSTEM).await?;
        let content = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(parse_verdict(&content))
    }
}

/// Parses the fixed `SCORE:` / `REASON:` output format.
///
/// The two extractions are independent: a missing or malformed score line
/// yields 0 while a present reason line is still kept, and a missing reason
/// line falls back to [`UNPARSED_REASON`]. Total over any input.
pub fn parse_verdict(content: &str) -> AiVerdict {
    let score_re = Regex::new(r"SCORE:\s*(\d+)").expect("valid score pattern");
    let reason_re = Regex::new(r"(?s)REASON:\s*(.*)").expect("valid reason pattern");

    let score = score_re
        .captures(content)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0)
        .min(MAX_AI_SCORE);

    let reason = reason_re
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| UNPARSED_REASON.to_string());

    AiVerdict { score, reason }
}
