//! Base heuristic trait and result types
//!
//! This module defines the seam between the core and the scoring checks:
//! - `Heuristic` trait that every check implements
//! - `AnalysisResult` for one check's score and feedback
//! - `AnalysisSummary` for counts over a whole run

use crate::paper::Paper;
use crate::researches::Researcher;
use anyhow::Result;
use serde::Serialize;

/// Score and feedback from a single heuristic
///
/// Built with the `with_*` methods; read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    score: Option<f64>,
    text: String,
    /// Feedback shown when no text was set
    empty: String,
    tooltip: String,
    /// Why the heuristic produced no score, when it failed
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<String>,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_empty(mut self, empty: impl Into<String>) -> Self {
        self.empty = empty.into();
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Placeholder for a heuristic that could not produce a score
    ///
    /// Keeps the empty template and tooltip so the host still has something
    /// to show.
    pub fn not_applicable(self, reason: impl Into<String>) -> Self {
        Self {
            score: None,
            text: String::new(),
            failure: Some(reason.into()),
            ..self
        }
    }

    /// Whether a comparable score was set
    pub fn has_score(&self) -> bool {
        self.score.is_some_and(f64::is_finite)
    }

    /// The score, or 0 when none was set
    pub fn score(&self) -> f64 {
        match self.score {
            Some(score) if score.is_finite() => score,
            _ => 0.0,
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Feedback text, falling back to the empty template
    pub fn text(&self) -> &str {
        if self.has_text() {
            &self.text
        } else {
            &self.empty
        }
    }

    pub fn has_tooltip(&self) -> bool {
        !self.tooltip.is_empty()
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// A pluggable scoring check
///
/// # Example Implementation
///
/// ```ignore
/// pub struct TitleHasKeyword;
///
/// impl Heuristic for TitleHasKeyword {
///     fn id(&self) -> &'static str {
///         "keyword-in-title"
///     }
///
///     fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
///         paper.has_keyword() && paper.has_title()
///     }
///
///     fn run(&self, paper: &Paper, _researcher: &Researcher) -> Result<AnalysisResult> {
///         let found = paper.get_lower("title").contains(paper.keyword_lower());
///         Ok(self.new_result().with_score(if found { 36.0 } else { 0.0 }))
///     }
/// }
/// ```
pub trait Heuristic: Send + Sync {
    /// Stable kebab-case identifier, used as the result key
    fn id(&self) -> &'static str;

    /// Human-readable description of what this heuristic checks
    fn description(&self) -> &'static str {
        ""
    }

    /// Result template with the empty text and tooltip filled in
    fn new_result(&self) -> AnalysisResult {
        AnalysisResult::new()
    }

    /// Whether the paper has what this heuristic needs
    fn is_applicable(&self, _paper: &Paper, _researcher: &Researcher) -> bool {
        true
    }

    /// Score the paper
    fn run(&self, paper: &Paper, researcher: &Researcher) -> Result<AnalysisResult>;
}

/// Counts over one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisSummary {
    /// Heuristics that were applicable and ran
    pub heuristics_run: usize,
    pub heuristics_succeeded: usize,
    /// Heuristics whose run errored or panicked
    pub heuristics_failed: usize,
    /// Heuristics filtered out as not applicable
    pub heuristics_skipped: usize,
    pub total_score: f64,
}

impl AnalysisSummary {
    /// Update summary with a heuristic result
    pub fn add_result(&mut self, result: &AnalysisResult) {
        self.heuristics_run += 1;
        if result.is_failure() {
            self.heuristics_failed += 1;
        } else {
            self.heuristics_succeeded += 1;
            self.total_score += result.score();
        }
    }

    pub fn add_skipped(&mut self) {
        self.heuristics_skipped += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_builder() {
        let result = AnalysisResult::new()
            .with_empty("Add some content.")
            .with_tooltip("Shorter sentences help.")
            .with_score(4.0)
            .with_text("Score is fine");

        assert!(result.has_score());
        assert_eq!(result.score(), 4.0);
        assert_eq!(result.text(), "Score is fine");
        assert!(result.has_tooltip());
        assert!(!result.is_failure());
    }

    #[test]
    fn test_text_falls_back_to_empty_template() {
        let result = AnalysisResult::new().with_empty("Add some content.");
        assert!(!result.has_score());
        assert_eq!(result.score(), 0.0);
        assert_eq!(result.text(), "Add some content.");
    }

    #[test]
    fn test_non_finite_score_is_not_a_score() {
        let result = AnalysisResult::new().with_score(f64::NAN);
        assert!(!result.has_score());
        assert_eq!(result.score(), 0.0);
    }

    #[test]
    fn test_zero_is_a_score() {
        assert!(AnalysisResult::new().with_score(0.0).has_score());
    }

    #[test]
    fn test_not_applicable_keeps_template() {
        let result = AnalysisResult::new()
            .with_empty("Nothing to report.")
            .with_tooltip("tip")
            .with_score(3.0)
            .with_text("partial")
            .not_applicable("boom");

        assert!(!result.has_score());
        assert_eq!(result.text(), "Nothing to report.");
        assert_eq!(result.tooltip(), "tip");
        assert_eq!(result.failure(), Some("boom"));
    }

    #[test]
    fn test_analysis_summary() {
        let mut summary = AnalysisSummary::default();

        summary.add_result(&AnalysisResult::new().with_score(6.0));
        summary.add_result(&AnalysisResult::new().with_score(2.0));
        summary.add_result(&AnalysisResult::new().not_applicable("err"));
        summary.add_skipped();

        assert_eq!(summary.heuristics_run, 3);
        assert_eq!(summary.heuristics_succeeded, 2);
        assert_eq!(summary.heuristics_failed, 1);
        assert_eq!(summary.heuristics_skipped, 1);
        assert_eq!(summary.total_score, 8.0);
    }
}
