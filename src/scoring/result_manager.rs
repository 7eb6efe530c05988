use crate::analysis::{AnalysisResult, AnalysisResults};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Accumulated results for one keyword
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordScore {
    pub results: AnalysisResults,
    pub is_primary: bool,
    /// Sum of every contained result's score
    pub score: f64,
}

impl KeywordScore {
    fn refresh_score(&mut self) {
        self.score = self.results.values().map(AnalysisResult::score).sum();
    }
}

/// Session-long store of results per keyword
#[derive(Debug, Clone, Default)]
pub struct ResultManager {
    entries: IndexMap<String, KeywordScore>,
}

impl ResultManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge new results into the keyword's entry
    ///
    /// Results for heuristics already present are overwritten; earlier
    /// results for heuristics missing from `results` are kept. The score is
    /// recomputed over the merged set.
    pub fn update(&mut self, keyword: impl Into<String>, results: AnalysisResults, is_primary: bool) {
        let keyword = keyword.into();
        let entry = self.entries.entry(keyword.clone()).or_default();
        entry.results.extend(results);
        entry.is_primary = is_primary;
        entry.refresh_score();
        debug!(
            "Updated results for '{}': {} heuristics, score {}",
            keyword,
            entry.results.len(),
            entry.score
        );
    }

    /// Total score of a keyword, 0 when unknown
    pub fn get_score(&self, keyword: &str) -> f64 {
        self.entries.get(keyword).map_or(0.0, |e| e.score)
    }

    /// Whether the keyword was last updated as primary; false when unknown
    pub fn is_primary(&self, keyword: &str) -> bool {
        self.entries.get(keyword).is_some_and(|e| e.is_primary)
    }

    pub fn get(&self, keyword: &str) -> Option<&KeywordScore> {
        self.entries.get(keyword)
    }

    /// Keywords in the order they were first seen
    pub fn keywords(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// The first keyword flagged as primary, with its entry
    pub fn primary(&self) -> Option<(&str, &KeywordScore)> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.is_primary)
            .map(|(keyword, entry)| (keyword.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(pairs: &[(&str, Option<f64>)]) -> AnalysisResults {
        pairs
            .iter()
            .map(|(id, score)| {
                let result = match score {
                    Some(score) => AnalysisResult::new().with_score(*score),
                    None => AnalysisResult::new().not_applicable("failed"),
                };
                (id.to_string(), result)
            })
            .collect()
    }

    #[test]
    fn test_unknown_keyword() {
        let manager = ResultManager::new();
        assert_eq!(manager.get_score("nothing"), 0.0);
        assert!(!manager.is_primary("nothing"));
        assert!(manager.get("nothing").is_none());
        assert!(manager.primary().is_none());
    }

    #[test]
    fn test_merge_disjoint_updates() {
        let mut manager = ResultManager::new();
        manager.update("cat", results(&[("a", Some(2.0)), ("b", Some(3.0))]), true);
        manager.update("cat", results(&[("c", Some(4.0))]), true);

        assert_eq!(manager.get_score("cat"), 9.0);
        assert_eq!(manager.get("cat").map(|e| e.results.len()), Some(3));
    }

    #[test]
    fn test_overwrite_same_heuristic() {
        let mut manager = ResultManager::new();
        manager.update("cat", results(&[("a", Some(2.0)), ("b", Some(3.0))]), false);
        manager.update("cat", results(&[("a", Some(10.0))]), false);
        assert_eq!(manager.get_score("cat"), 13.0);
    }

    #[test]
    fn test_results_without_score_count_zero() {
        let mut manager = ResultManager::new();
        manager.update("cat", results(&[("a", Some(2.0)), ("b", None)]), false);
        assert_eq!(manager.get_score("cat"), 2.0);
    }

    #[test]
    fn test_primary_flag_follows_latest_update() {
        let mut manager = ResultManager::new();
        manager.update("cat", results(&[("a", Some(1.0))]), true);
        manager.update("dog", results(&[("a", Some(1.0))]), false);
        assert!(manager.is_primary("cat"));
        assert_eq!(manager.primary().map(|(k, _)| k), Some("cat"));

        manager.update("cat", AnalysisResults::new(), false);
        assert!(!manager.is_primary("cat"));
        assert_eq!(manager.get_score("cat"), 1.0);
        assert_eq!(manager.keywords(), vec!["cat", "dog"]);
    }
}
