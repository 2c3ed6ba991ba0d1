//! Page templates for the upload form and results view.

use askama::Template;

use crate::review::AiVerdict;
use crate::screening::scoring::RuleScore;

/// Everything the results panel renders for one screened resume.
pub struct ScreeningResults {
    pub rule: RuleScore,
    pub summary: String,
    /// Present only when the uploader opted into AI scoring.
    pub ai: Option<AiVerdict>,
}

/// The single page of the app: the upload form, optionally with results or
/// an upload error underneath.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub results: Option<ScreeningResults>,
    pub error: Option<String>,
}

impl IndexPage {
    pub fn empty() -> Self {
        Self {
            results: None,
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            results: None,
            error: Some(message.into()),
        }
    }

    pub fn with_results(results: ScreeningResults) -> Self {
        Self {
            results: Some(results),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::scoring::score_resume;

    #[test]
    fn test_empty_page_renders_form_only() {
        let html = IndexPage::empty().render().unwrap();
        assert!(html.contains("enable_ai_scoring"));
        assert!(!html.contains("Rule-based score"));
    }

    #[test]
    fn test_results_page_renders_breakdown_rows() {
        let page = IndexPage::with_results(ScreeningResults {
            rule: score_resume("experience with python"),
            summary: "A fine resume.".to_string(),
            ai: None,
        });
        let html = page.render().unwrap();
        assert!(html.contains("Experience Section"));
        assert!(html.contains("A fine resume."));
        assert!(!html.contains("AI score"));
    }

    #[test]
    fn test_results_page_renders_ai_verdict_when_present() {
        let page = IndexPage::with_results(ScreeningResults {
            rule: score_resume(""),
            summary: "ok".to_string(),
            ai: Some(AiVerdict {
                score: 42,
                reason: "Needs metrics.".to_string(),
            }),
        });
        let html = page.render().unwrap();
        assert!(html.contains("42"));
        assert!(html.contains("Needs metrics."));
    }

    #[test]
    fn test_error_page_renders_message() {
        let html = IndexPage::with_error("Could not read that document.")
            .render()
            .unwrap();
        assert!(html.contains("Could not read that document."));
    }
}
