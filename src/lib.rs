//! seo-analyzer - content analysis core
//!
//! Scores written content against pluggable heuristics. The library holds
//! the shared machinery every heuristic depends on: text normalization and
//! tokenization, English pluralization, keyword combination generation,
//! Flesch readability, link classification, and the registry and engine
//! that run heuristics and aggregate their scores per keyword.
//!
//! ```ignore
//! use seo_analyzer::{Analyzer, AnalyzerConfig, Paper, PaperAttributes};
//!
//! let mut analyzer = Analyzer::from_config(&AnalyzerConfig::default())?;
//! analyzer.register(std::sync::Arc::new(MyHeuristic));
//!
//! let paper = Paper::new("<p>The cat runs fast.</p>", PaperAttributes::default());
//! let results = analyzer.analyze(&paper);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod paper;
pub mod report;
pub mod researches;
pub mod scoring;
pub mod text;

pub use analysis::{AnalysisResult, AnalysisResults, AnalysisSummary, Analyzer, Heuristic};
pub use config::{load_analyzer_config, AnalyzerConfig};
pub use error::{ConfigError, ConfigResult};
pub use paper::{Paper, PaperAttributes};
pub use report::ResearchReport;
pub use researches::{Research, Researcher, ResearcherBuilder};
pub use scoring::{KeywordScore, ResultManager};
