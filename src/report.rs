//! Research report
//!
//! Runs the built-in researches over a paper and gathers their output in
//! one serializable value. This is what the command line prints; it does
//! not run any heuristics.

use crate::models::{LinkStatistics, Paragraph};
use crate::paper::Paper;
use crate::researches::{names, DensityReport, Researcher};
use serde::Serialize;

/// Flesch reading ease with its band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityReport {
    pub ease: f64,
    pub score: f64,
    pub label: String,
    pub max_score: f64,
}

/// Keyword-derived research output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordReport {
    pub keyword: String,
    pub permalink: String,
    pub combinations: Vec<String>,
    /// `None` when the text has no words
    pub density: Option<DensityReport>,
    pub density_score: Option<f64>,
}

/// Everything the researches can say about a paper
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResearchReport {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraphs: Vec<Paragraph>,
    /// `None` when reading ease is unavailable
    pub readability: Option<ReadabilityReport>,
    pub links: LinkStatistics,
    /// `None` when the paper has no keyword
    pub keyword: Option<KeywordReport>,
}

impl ResearchReport {
    pub fn build(paper: &Paper, researcher: &Researcher) -> Self {
        let count = |name: &str, text: &str| {
            researcher
                .get_research(name)
                .and_then(|research| research.count(text))
                .unwrap_or(0)
        };

        let word_count = count(names::WORD_COUNT, paper.text());
        let sentence_count = count(names::SENTENCE_COUNT, paper.text());

        let flesch = researcher.flesch_reading();
        let readability = flesch.ease(paper.text()).map(|ease| {
            let band = flesch.classify(ease);
            ReadabilityReport {
                ease,
                score: band.score,
                label: band.label.clone(),
                max_score: flesch.max_score(),
            }
        });

        let keyword = paper.has_keyword().then(|| {
            let combinations = paper.keyword_combinations(researcher).to_vec();
            let density_research = researcher.keyword_density();
            let density = density_research.measure(
                paper.text(),
                count(names::WORD_COUNT, paper.text_lower()),
                &combinations,
            );
            KeywordReport {
                keyword: paper.keyword().to_string(),
                permalink: paper.keyword_permalink(),
                density_score: density.map(|d| density_research.score(d.density)),
                density,
                combinations,
            }
        });

        Self {
            word_count,
            sentence_count,
            paragraphs: researcher.tokenizer().paragraphs(paper.text()),
            readability,
            links: researcher.links().link_stats(paper.text()),
            keyword,
        }
    }
}
