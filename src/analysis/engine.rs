//! Heuristic execution engine
//!
//! The Analyzer runs every registered heuristic against a paper:
//! - Keeps heuristics in registration order, keyed by id
//! - Restricts the run to a configured subset when one is set
//! - Skips heuristics that are not applicable to the paper
//! - Isolates failures (errors and panics) as not-applicable results
//!
//! Everything runs synchronously on the caller's thread.

use crate::analysis::base::{AnalysisResult, AnalysisSummary, Heuristic};
use crate::config::{normalize_heuristic_name, AnalyzerConfig};
use crate::error::ConfigResult;
use crate::paper::Paper;
use crate::researches::Researcher;
use indexmap::{IndexMap, IndexSet};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Results keyed by heuristic id, in registration order
pub type AnalysisResults = IndexMap<String, AnalysisResult>;

fn panic_message(panic_info: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Runs heuristics against papers and keeps the latest results
pub struct Analyzer {
    researcher: Researcher,
    heuristics: IndexMap<&'static str, Arc<dyn Heuristic>>,
    /// Normalized ids allowed to run; `None` runs everything
    active: Option<IndexSet<String>>,
    results: AnalysisResults,
    summary: AnalysisSummary,
}

impl Analyzer {
    pub fn new(researcher: Researcher) -> Self {
        Self {
            researcher,
            heuristics: IndexMap::new(),
            active: None,
            results: IndexMap::new(),
            summary: AnalysisSummary::default(),
        }
    }

    /// Build the registry from `config` and apply its heuristic subset
    pub fn from_config(config: &AnalyzerConfig) -> ConfigResult<Self> {
        config.validate()?;
        let researcher = Researcher::new(config)?;
        Ok(Self::new(researcher).with_active_heuristics(config.heuristics.clone()))
    }

    /// Restrict runs to the named heuristics; names are normalized
    ///
    /// Names that match no registered heuristic are ignored.
    pub fn with_active_heuristics(mut self, names: Option<Vec<String>>) -> Self {
        self.set_active_heuristics(names);
        self
    }

    pub fn set_active_heuristics(&mut self, names: Option<Vec<String>>) {
        self.active = names.map(|names| {
            names
                .iter()
                .map(|name| normalize_heuristic_name(name))
                .collect()
        });
        if let Some(active) = &self.active {
            debug!("Active heuristics restricted to {} names", active.len());
        }
    }

    /// Register a heuristic; an existing heuristic with the same id is replaced
    pub fn register(&mut self, heuristic: Arc<dyn Heuristic>) {
        let id = heuristic.id();
        if self.heuristics.contains_key(id) {
            warn!("Replacing heuristic: {}", id);
        } else {
            debug!("Registering heuristic: {}", id);
        }
        self.heuristics.insert(id, heuristic);
    }

    /// Register multiple heuristics at once
    pub fn register_all(&mut self, heuristics: impl IntoIterator<Item = Arc<dyn Heuristic>>) {
        for heuristic in heuristics {
            self.register(heuristic);
        }
    }

    pub fn with_heuristic(mut self, heuristic: Arc<dyn Heuristic>) -> Self {
        self.register(heuristic);
        self
    }

    pub fn heuristic_count(&self) -> usize {
        self.heuristics.len()
    }

    /// Ids of all registered heuristics, in registration order
    pub fn heuristic_names(&self) -> Vec<&'static str> {
        self.heuristics.keys().copied().collect()
    }

    pub fn researcher(&self) -> &Researcher {
        &self.researcher
    }

    fn is_active(&self, id: &str) -> bool {
        match &self.active {
            Some(active) => active.contains(&normalize_heuristic_name(id)),
            None => true,
        }
    }

    /// Run every active heuristic against the paper
    pub fn analyze(&mut self, paper: &Paper) -> &AnalysisResults {
        let selected: Vec<Arc<dyn Heuristic>> = self
            .heuristics
            .values()
            .filter(|h| self.is_active(h.id()))
            .cloned()
            .collect();
        self.run(selected, paper)
    }

    /// Run only the named heuristics, in registration order
    ///
    /// Names are normalized; unknown names are ignored. The configured
    /// subset does not apply here.
    pub fn analyze_some<S: AsRef<str>>(&mut self, names: &[S], paper: &Paper) -> &AnalysisResults {
        let wanted: IndexSet<String> = names
            .iter()
            .map(|name| normalize_heuristic_name(name.as_ref()))
            .collect();
        let selected: Vec<Arc<dyn Heuristic>> = self
            .heuristics
            .values()
            .filter(|h| wanted.contains(&normalize_heuristic_name(h.id())))
            .cloned()
            .collect();
        self.run(selected, paper)
    }

    /// Results of the latest run
    pub fn get_results(&self) -> &AnalysisResults {
        &self.results
    }

    /// Summary of the latest run
    pub fn summary(&self) -> &AnalysisSummary {
        &self.summary
    }

    fn run(&mut self, heuristics: Vec<Arc<dyn Heuristic>>, paper: &Paper) -> &AnalysisResults {
        let start = Instant::now();
        info!("Starting analysis with {} heuristics", heuristics.len());

        let mut results = IndexMap::new();
        let mut summary = AnalysisSummary::default();

        for heuristic in heuristics {
            let id = heuristic.id();
            match self.run_single(heuristic.as_ref(), paper) {
                Some(result) => {
                    summary.add_result(&result);
                    results.insert(id.to_string(), result);
                }
                None => {
                    debug!("Heuristic {} skipped: not applicable", id);
                    summary.add_skipped();
                }
            }
        }

        info!(
            "Analysis complete: {} run, {} failed, {} skipped, score {} in {}ms",
            summary.heuristics_run,
            summary.heuristics_failed,
            summary.heuristics_skipped,
            summary.total_score,
            start.elapsed().as_millis()
        );

        self.results = results;
        self.summary = summary;
        &self.results
    }

    /// Run one heuristic; `None` when it does not apply to the paper
    fn run_single(&self, heuristic: &dyn Heuristic, paper: &Paper) -> Option<AnalysisResult> {
        let id = heuristic.id();
        let researcher = &self.researcher;
        let start = Instant::now();

        // Wrap in catch_unwind to handle panics
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            if heuristic.is_applicable(paper, researcher) {
                Some(heuristic.run(paper, researcher))
            } else {
                None
            }
        }));

        let failure = match outcome {
            Ok(None) => return None,
            Ok(Some(Ok(result))) => {
                debug!(
                    "Heuristic {} scored {} in {}ms",
                    id,
                    result.score(),
                    start.elapsed().as_millis()
                );
                return Some(result);
            }
            Ok(Some(Err(e))) => {
                warn!("Heuristic {} failed: {:#}", id, e);
                format!("{:#}", e)
            }
            Err(panic_info) => {
                let panic_msg = panic_message(panic_info);
                error!("Heuristic {} panicked: {}", id, panic_msg);
                format!("panic: {}", panic_msg)
            }
        };

        let template = catch_unwind(AssertUnwindSafe(|| heuristic.new_result())).unwrap_or_default();
        Some(template.not_applicable(failure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    struct Fixed {
        id: &'static str,
        score: f64,
    }

    impl Heuristic for Fixed {
        fn id(&self) -> &'static str {
            self.id
        }

        fn run(&self, _paper: &Paper, _researcher: &Researcher) -> anyhow::Result<AnalysisResult> {
            Ok(AnalysisResult::new().with_score(self.score))
        }
    }

    struct Failing;

    impl Heuristic for Failing {
        fn id(&self) -> &'static str {
            "failing"
        }

        fn new_result(&self) -> AnalysisResult {
            AnalysisResult::new().with_empty("Could not check.")
        }

        fn run(&self, _paper: &Paper, _researcher: &Researcher) -> anyhow::Result<AnalysisResult> {
            bail!("research unavailable")
        }
    }

    struct Panicking;

    impl Heuristic for Panicking {
        fn id(&self) -> &'static str {
            "panicking"
        }

        fn run(&self, _paper: &Paper, _researcher: &Researcher) -> anyhow::Result<AnalysisResult> {
            panic!("index out of range")
        }
    }

    struct NeedsKeyword;

    impl Heuristic for NeedsKeyword {
        fn id(&self) -> &'static str {
            "needs-keyword"
        }

        fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
            paper.has_keyword()
        }

        fn run(&self, _paper: &Paper, _researcher: &Researcher) -> anyhow::Result<AnalysisResult> {
            Ok(AnalysisResult::new().with_score(1.0))
        }
    }

    fn analyzer() -> Analyzer {
        Analyzer::from_config(&AnalyzerConfig::default()).expect("analyzer")
    }

    fn fixed(id: &'static str, score: f64) -> Arc<dyn Heuristic> {
        Arc::new(Fixed { id, score })
    }

    #[test]
    fn test_failure_is_isolated() {
        let mut analyzer = analyzer();
        let failing: Arc<dyn Heuristic> = Arc::new(Failing);
        analyzer.register_all([fixed("first", 2.0), failing, fixed("last", 3.0)]);

        let results = analyzer.analyze(&Paper::default());
        assert_eq!(results.len(), 3);
        let ids: Vec<&str> = results.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["first", "failing", "last"]);

        let failed = &results["failing"];
        assert!(!failed.has_score());
        assert_eq!(failed.text(), "Could not check.");
        assert!(failed.failure().unwrap_or_default().contains("research unavailable"));

        assert_eq!(analyzer.summary().heuristics_failed, 1);
        assert_eq!(analyzer.summary().total_score, 5.0);
    }

    #[test]
    fn test_panic_is_isolated() {
        let mut analyzer = analyzer()
            .with_heuristic(Arc::new(Panicking))
            .with_heuristic(fixed("ok", 1.0));
        let results = analyzer.analyze(&Paper::default());
        assert_eq!(results.len(), 2);
        assert!(results["panicking"]
            .failure()
            .unwrap_or_default()
            .contains("index out of range"));
        assert!(results["ok"].has_score());
    }

    #[test]
    fn test_inapplicable_heuristics_are_skipped() {
        let mut analyzer = analyzer()
            .with_heuristic(Arc::new(NeedsKeyword))
            .with_heuristic(fixed("always", 1.0));
        let results = analyzer.analyze(&Paper::default());
        assert_eq!(results.len(), 1);
        assert!(results.contains_key("always"));
        assert_eq!(analyzer.summary().heuristics_skipped, 1);
    }

    #[test]
    fn test_active_subset_ignores_unknown_names() {
        let mut analyzer = analyzer()
            .with_heuristic(fixed("keyword-in-title", 1.0))
            .with_heuristic(fixed("length-content", 2.0))
            .with_active_heuristics(Some(vec![
                "KeywordInTitle".to_string(),
                "no-such-heuristic".to_string(),
            ]));
        let results = analyzer.analyze(&Paper::default());
        let ids: Vec<&str> = results.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["keyword-in-title"]);
    }

    #[test]
    fn test_analyze_some_keeps_registration_order() {
        let mut analyzer = analyzer();
        analyzer.register_all([fixed("a", 1.0), fixed("b", 2.0), fixed("c", 3.0)]);
        let results = analyzer.analyze_some(&["c", "a", "missing"], &Paper::default());
        let ids: Vec<&str> = results.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(analyzer.get_results().len(), 2);
    }

    #[test]
    fn test_reregistering_replaces() {
        let mut analyzer = analyzer();
        analyzer.register(fixed("a", 1.0));
        analyzer.register(fixed("a", 5.0));
        assert_eq!(analyzer.heuristic_count(), 1);
        assert_eq!(analyzer.analyze(&Paper::default())["a"].score(), 5.0);
    }

    #[test]
    fn test_results_replaced_on_next_run() {
        let mut analyzer = analyzer().with_heuristic(Arc::new(NeedsKeyword));
        let mut paper = Paper::default();
        paper.set_keyword("cat");
        assert_eq!(analyzer.analyze(&paper).len(), 1);
        paper.set_keyword("");
        assert!(analyzer.analyze(&paper).is_empty());
        assert!(analyzer.get_results().is_empty());
    }
}
