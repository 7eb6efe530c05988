//! Keyword density
//!
//! Counts how often any keyword combination occurs in the tag-stripped
//! text, relates it to the word count and grades the percentage against the
//! density table.

use super::readability::round2;
use crate::error::{ConfigError, ConfigResult};
use crate::models::{DensityBoundaries, DensityScores};
use crate::text::strip_tags;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Occurrences of the keyword and its density in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityReport {
    pub count: usize,
    pub density: f64,
}

/// Check that boundaries are ordered and scores finite
pub fn validate_density_table(
    boundaries: &DensityBoundaries,
    scores: &DensityScores,
) -> ConfigResult<()> {
    let DensityBoundaries {
        min,
        fair,
        good,
        max,
    } = *boundaries;

    if [min, fair, good, max].iter().any(|v| !v.is_finite()) {
        return Err(ConfigError::MalformedDensityTable(
            "boundaries must be finite numbers".to_string(),
        ));
    }
    if !(0.0 <= min && min <= fair && fair <= good && good <= max) {
        return Err(ConfigError::MalformedDensityTable(format!(
            "boundaries must satisfy 0 <= min <= fair <= good <= max (got {}, {}, {}, {})",
            min, fair, good, max
        )));
    }
    if [scores.fail, scores.fair, scores.good, scores.best]
        .iter()
        .any(|v| !v.is_finite())
    {
        return Err(ConfigError::MalformedDensityTable(
            "scores must be finite numbers".to_string(),
        ));
    }
    Ok(())
}

/// The keyword density research
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordDensity {
    boundaries: DensityBoundaries,
    scores: DensityScores,
}

impl KeywordDensity {
    pub fn new(boundaries: DensityBoundaries, scores: DensityScores) -> ConfigResult<Self> {
        validate_density_table(&boundaries, &scores)?;
        Ok(Self { boundaries, scores })
    }

    pub fn boundaries(&self) -> &DensityBoundaries {
        &self.boundaries
    }

    pub fn scores(&self) -> &DensityScores {
        &self.scores
    }

    /// Case-insensitive occurrences of any combination in the tag-stripped text
    ///
    /// Matches are leftmost-first over the alternation, so a combination
    /// that prefixes a longer one wins when it is listed first.
    pub fn count(&self, text: &str, combinations: &[String]) -> usize {
        let Some(regex) = combination_regex(combinations) else {
            return 0;
        };
        regex.find_iter(&strip_tags(text)).count()
    }

    /// Count and density for a text of `word_count` words
    ///
    /// `None` when there are no words or no combinations.
    pub fn measure(
        &self,
        text: &str,
        word_count: usize,
        combinations: &[String],
    ) -> Option<DensityReport> {
        if word_count == 0 || combinations.is_empty() {
            return None;
        }
        let count = self.count(text, combinations);
        let density = round2(count as f64 / word_count as f64 * 100.0);
        Some(DensityReport { count, density })
    }

    /// Score for a density percentage
    ///
    /// Outside `[min, max]` fails; `[min, fair)` is fair; `[fair, good)` is
    /// good; `[good, max]` is best.
    pub fn score(&self, density: f64) -> f64 {
        let b = &self.boundaries;
        if density.is_nan() || density < b.min || density > b.max {
            self.scores.fail
        } else if density < b.fair {
            self.scores.fair
        } else if density < b.good {
            self.scores.good
        } else {
            self.scores.best
        }
    }
}

fn combination_regex(combinations: &[String]) -> Option<Regex> {
    let alternatives: Vec<String> = combinations
        .iter()
        .filter(|c| !c.is_empty())
        .map(|c| regex::escape(c))
        .collect();
    if alternatives.is_empty() {
        return None;
    }
    // Escaped literals always form a valid pattern
    RegexBuilder::new(&alternatives.join("|"))
        .case_insensitive(true)
        .build()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combos(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_count_cat_and_cats() {
        let density = KeywordDensity::default();
        let text = "<p>The cat runs fast. The cats run fast.</p>";
        assert_eq!(density.count(text, &combos(&["cat", "cats"])), 2);
    }

    #[test]
    fn test_count_is_case_insensitive_and_literal() {
        let density = KeywordDensity::default();
        assert_eq!(density.count("C++ and c++ rock", &combos(&["c++"])), 2);
        assert_eq!(density.count("a.b axb", &combos(&["a.b"])), 1);
    }

    #[test]
    fn test_measure() {
        let density = KeywordDensity::default();
        let report = density
            .measure("<p>The cat runs fast. The cats run fast.</p>", 8, &combos(&["cat", "cats"]))
            .expect("report");
        assert_eq!(report.count, 2);
        assert_eq!(report.density, 25.0);
    }

    #[test]
    fn test_measure_unavailable() {
        let density = KeywordDensity::default();
        assert!(density.measure("text", 0, &combos(&["text"])).is_none());
        assert!(density.measure("text", 1, &[]).is_none());
    }

    #[test]
    fn test_score_bands() {
        let density = KeywordDensity::default();
        assert_eq!(density.score(0.2), 0.0);
        assert_eq!(density.score(0.5), 2.0);
        assert_eq!(density.score(0.755), 3.0);
        assert_eq!(density.score(1.0), 6.0);
        assert_eq!(density.score(2.5), 6.0);
        assert_eq!(density.score(2.51), 0.0);
    }

    #[test]
    fn test_malformed_table() {
        let boundaries = DensityBoundaries {
            min: 1.0,
            fair: 0.5,
            good: 2.0,
            max: 3.0,
        };
        let err = KeywordDensity::new(boundaries, DensityScores::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedDensityTable(_)));
    }
}
