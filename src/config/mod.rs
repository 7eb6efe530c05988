//! Configuration module for seo-analyzer
//!
//! This module handles:
//! - Analyzer configuration (seo-analyzer.toml)
//! - Readability and keyword density table overrides
//! - Link policy (site domain and nofollow lists)
//! - Heuristic subset selection

mod analyzer_config;

pub use analyzer_config::{
    AnalyzerConfig,
    KeywordDensityConfig,
    ReadabilityConfig,
    CONFIG_FILE_JSON,
    CONFIG_FILE_TOML,
    EXAMPLE_CONFIG,
    load_analyzer_config,
    load_config_file,
    normalize_heuristic_name,
};
pub use crate::researches::LinkPolicy;
