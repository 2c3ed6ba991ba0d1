//! Rule-based resume scoring — deterministic, bounded, fully auditable.
//!
//! Pure function over extracted text: no I/O, no LLM call, never fails.
//! Every category contribution is capped and non-negative and the total is
//! capped at 100, so repeating a keyword saturates its category instead of
//! inflating the score.

use serde::Serialize;

const EXPERIENCE_POINTS: u32 = 20;
const EDUCATION_POINTS: u32 = 10;
const SKILLS_POINTS: u32 = 15;

/// Each distinct action verb is worth 5 points, capped at 25.
const ACTION_VERB_POINTS: u32 = 5;
const ACTION_VERB_CAP: u32 = 25;

/// Each distinct technical keyword is worth 4 points, capped at 20.
const TECH_KEYWORD_POINTS: u32 = 4;
const TECH_KEYWORD_CAP: u32 = 20;

/// Resumes longer than this many whitespace-delimited words earn a bonus.
const LENGTH_THRESHOLD_WORDS: usize = 300;
const LENGTH_BONUS: u32 = 10;

const MAX_SCORE: u32 = 100;

/// Action verbs counted at most once each, however often they repeat.
const ACTION_VERBS: [&str; 7] = [
    "developed",
    "managed",
    "led",
    "created",
    "implemented",
    "achieved",
    "analyzed",
];

/// Technical keywords counted at most once each.
const TECH_KEYWORDS: [&str; 8] = [
    "python", "java", "flask", "django", "react", "sql", "aws", "docker",
];

/// One row of the score breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownEntry {
    pub category: &'static str,
    pub points: u32,
    /// Distinct matched terms and what to call them, for the density rows.
    pub matched: Option<(usize, &'static str)>,
}

impl BreakdownEntry {
    /// Display form for the results table, e.g. `"10 (Found 2 verbs)"`.
    pub fn label(&self) -> String {
        match self.matched {
            Some((count, noun)) => format!("{} (Found {count} {noun})", self.points),
            None => self.points.to_string(),
        }
    }
}

/// Total rule-based score and its per-category breakdown.
///
/// Section and length rows appear only when awarded; the two density rows
/// always appear, with their counts. Row order is presentation order.
#[derive(Debug, Clone, Serialize)]
pub struct RuleScore {
    /// Always within `[0, 100]`.
    pub total: u32,
    pub breakdown: Vec<BreakdownEntry>,
}

/// Scores resume text against the fixed heuristics.
///
/// Case-insensitive substring matching throughout: a term embedded in a
/// longer word still counts. Handles empty input without failure.
pub fn score_resume(text: &str) -> RuleScore {
    let haystack = text.to_lowercase();
    let mut total = 0;
    let mut breakdown = Vec::new();

    for (term, category, points) in [
        ("experience", "Experience Section", EXPERIENCE_POINTS),
        ("education", "Education Section", EDUCATION_POINTS),
        ("skills", "Skills Section", SKILLS_POINTS),
    ] {
        if haystack.contains(term) {
            total += points;
            breakdown.push(BreakdownEntry {
                category,
                points,
                matched: None,
            });
        }
    }

    let verb_count = distinct_matches(&haystack, &ACTION_VERBS);
    let verb_points = (verb_count as u32 * ACTION_VERB_POINTS).min(ACTION_VERB_CAP);
    total += verb_points;
    breakdown.push(BreakdownEntry {
        category: "Action Verbs",
        points: verb_points,
        matched: Some((verb_count, "verbs")),
    });

    let keyword_count = distinct_matches(&haystack, &TECH_KEYWORDS);
    let keyword_points = (keyword_count as u32 * TECH_KEYWORD_POINTS).min(TECH_KEYWORD_CAP);
    total += keyword_points;
    breakdown.push(BreakdownEntry {
        category: "Technical Keywords",
        points: keyword_points,
        matched: Some((keyword_count, "keywords")),
    });

    if haystack.split_whitespace().count() > LENGTH_THRESHOLD_WORDS {
        total += LENGTH_BONUS;
        breakdown.push(BreakdownEntry {
            category: "Resume Length",
            points: LENGTH_BONUS,
            matched: None,
        });
    }

    RuleScore {
        total: total.min(MAX_SCORE),
        breakdown,
    }
}

/// How many of `terms` appear at least once in the lower-cased haystack.
/// Repetition of a term never counts twice.
fn distinct_matches(haystack: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| haystack.contains(*term)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points_for(score: &RuleScore, category: &str) -> Option<u32> {
        score
            .breakdown
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.points)
    }

    #[test]
    fn test_experience_section_scores_20() {
        let score = score_resume("Work Experience: none yet");
        assert_eq!(points_for(&score, "Experience Section"), Some(20));
    }

    #[test]
    fn test_absent_experience_section_has_no_row() {
        let score = score_resume("education and skills only");
        assert_eq!(points_for(&score, "Experience Section"), None);
    }

    #[test]
    fn test_section_match_is_case_insensitive() {
        let score = score_resume("EXPERIENCE\nEDUCATION\nSKILLS");
        assert_eq!(score.total, 20 + 10 + 15);
    }

    #[test]
    fn test_embedded_substring_still_counts() {
        // Substring match, not whole-word: "experienced" contains "experience".
        let score = score_resume("an experienced engineer");
        assert_eq!(points_for(&score, "Experience Section"), Some(20));
    }

    #[test]
    fn test_repeated_verb_counts_once() {
        let score = score_resume("developed developed developed");
        assert_eq!(points_for(&score, "Action Verbs"), Some(5));
    }

    #[test]
    fn test_action_verb_contribution_caps_at_25() {
        let score =
            score_resume("developed managed led created implemented achieved analyzed");
        assert_eq!(points_for(&score, "Action Verbs"), Some(25));
    }

    #[test]
    fn test_tech_keyword_contribution_caps_at_20() {
        let score = score_resume("python java flask django react sql aws docker");
        assert_eq!(points_for(&score, "Technical Keywords"), Some(20));
    }

    #[test]
    fn test_density_rows_always_present() {
        let score = score_resume("nothing relevant here");
        assert_eq!(points_for(&score, "Action Verbs"), Some(0));
        assert_eq!(points_for(&score, "Technical Keywords"), Some(0));
    }

    #[test]
    fn test_exactly_300_words_gets_no_length_bonus() {
        let text = vec!["word"; 300].join(" ");
        let score = score_resume(&text);
        assert_eq!(points_for(&score, "Resume Length"), None);
    }

    #[test]
    fn test_301_words_gets_length_bonus() {
        let text = vec!["word"; 301].join(" ");
        let score = score_resume(&text);
        assert_eq!(points_for(&score, "Resume Length"), Some(10));
    }

    #[test]
    fn test_worked_example_scores_63() {
        let text = "I developed and managed a system in Python with SQL. \
                    I have 5 years of experience and strong skills in education.";
        let score = score_resume(text);
        assert_eq!(points_for(&score, "Experience Section"), Some(20));
        assert_eq!(points_for(&score, "Education Section"), Some(10));
        assert_eq!(points_for(&score, "Skills Section"), Some(15));
        assert_eq!(points_for(&score, "Action Verbs"), Some(10));
        assert_eq!(points_for(&score, "Technical Keywords"), Some(8));
        assert_eq!(points_for(&score, "Resume Length"), None);
        assert_eq!(score.total, 63);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let score = score_resume("");
        assert_eq!(score.total, 0);
        assert_eq!(points_for(&score, "Action Verbs"), Some(0));
        assert_eq!(points_for(&score, "Technical Keywords"), Some(0));
        assert_eq!(score.breakdown.len(), 2);
    }

    #[test]
    fn test_saturated_resume_totals_exactly_100() {
        // All sections, all verbs, all keywords, plus enough filler to cross
        // the length threshold: 20+10+15+25+20+10 sums to the cap exactly.
        let mut text = String::from(
            "experience education skills developed managed led created implemented \
             achieved analyzed python java flask django react sql aws docker ",
        );
        text.push_str(&vec!["filler"; 300].join(" "));
        let score = score_resume(&text);
        assert_eq!(score.total, 100);
    }

    #[test]
    fn test_score_is_monotonic_as_terms_are_added() {
        let base = score_resume("a short note");
        let richer = score_resume("a short note mentioning python and experience");
        assert!(richer.total >= base.total);
    }

    #[test]
    fn test_density_label_includes_count() {
        let score = score_resume("developed and managed");
        let verbs = score
            .breakdown
            .iter()
            .find(|entry| entry.category == "Action Verbs")
            .unwrap();
        assert_eq!(verbs.label(), "10 (Found 2 verbs)");
    }

    #[test]
    fn test_plain_label_is_just_points() {
        let score = score_resume("experience");
        let row = score
            .breakdown
            .iter()
            .find(|entry| entry.category == "Experience Section")
            .unwrap();
        assert_eq!(row.label(), "20");
    }
}
