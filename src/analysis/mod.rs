//! Heuristic orchestration
//!
//! Heuristics are the pluggable scoring checks that consume the research
//! registry. This module defines their trait and the engine that runs them.

mod base;
mod engine;

pub use base::{AnalysisResult, AnalysisSummary, Heuristic};
pub use engine::{AnalysisResults, Analyzer};
