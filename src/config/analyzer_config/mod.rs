//! Analyzer configuration
//!
//! Loads configuration from `seo-analyzer.toml` or `.seo-analyzer.json`
//! in a directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # seo-analyzer.toml
//!
//! # Only run these heuristics (omit to run all)
//! heuristics = ["keyword-density", "flesch-reading"]
//!
//! # Replaces the whole Flesch band table
//! [[readability.boundaries]]
//! boundary = 60
//! score = 6
//! label = "easy enough"
//!
//! [[readability.boundaries]]
//! boundary = 0
//! score = 1
//! label = "hard"
//!
//! [keyword_density.boundaries]
//! min = 0.5
//! fair = 0.75
//! good = 1.0
//! max = 2.5
//!
//! [links]
//! parent_domain = "example.com"
//! add_nofollow_to_externals = true
//! nofollow_deny_domains = ["spam.example"]
//! nofollow_allow_domains = []
//! ```

use crate::error::ConfigResult;
use crate::models::{default_readability_bands, DensityBoundaries, DensityScores, ReadabilityBand};
use crate::researches::{validate_bands, validate_density_table, LinkPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Preferred config file name
pub const CONFIG_FILE_TOML: &str = "seo-analyzer.toml";

/// Fallback config file name
pub const CONFIG_FILE_JSON: &str = ".seo-analyzer.json";

/// Written by `seo-analyzer init`
pub const EXAMPLE_CONFIG: &str = r#"# seo-analyzer configuration

# Restrict the heuristics that run (omit to run all registered heuristics)
# heuristics = ["keyword-density", "flesch-reading"]

[links]
# Links whose host contains this domain are internal
parent_domain = "example.com"
# Treat external links without a rel attribute as nofollow candidates
add_nofollow_to_externals = false
nofollow_deny_domains = []
nofollow_allow_domains = []

# Flesch reading ease bands, highest first (replaces the whole table)
# [[readability.boundaries]]
# boundary = 90
# score = 6
# label = "very easy"

[keyword_density.boundaries]
min = 0.5
fair = 0.75
good = 1.0
max = 2.5

[keyword_density.scores]
fail = 0
fair = 2
good = 3
best = 6
"#;

/// Readability overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadabilityConfig {
    /// Whole replacement for the Flesch band table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundaries: Option<Vec<ReadabilityBand>>,
}

/// Keyword density overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordDensityConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundaries: Option<DensityBoundaries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<DensityScores>,
}

/// Top-level analyzer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Heuristics allowed to run; `None` runs all of them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heuristics: Option<Vec<String>>,
    pub readability: ReadabilityConfig,
    pub keyword_density: KeywordDensityConfig,
    pub links: LinkPolicy,
}

impl AnalyzerConfig {
    /// Parse and validate TOML
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every override table
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(bands) = &self.readability.boundaries {
            validate_bands(bands)?;
        }
        validate_density_table(&self.density_boundaries(), &self.density_scores())?;
        self.links.validate()
    }

    /// The configured band table, or the default one
    pub fn readability_bands(&self) -> Vec<ReadabilityBand> {
        self.readability
            .boundaries
            .clone()
            .unwrap_or_else(default_readability_bands)
    }

    pub fn density_boundaries(&self) -> DensityBoundaries {
        self.keyword_density.boundaries.unwrap_or_default()
    }

    pub fn density_scores(&self) -> DensityScores {
        self.keyword_density.scores.unwrap_or_default()
    }

    /// Normalized names of the active heuristics
    pub fn active_heuristics(&self) -> Option<Vec<String>> {
        self.heuristics.as_ref().map(|names| {
            names
                .iter()
                .map(|name| normalize_heuristic_name(name))
                .collect()
        })
    }

    /// Check if a heuristic may run under this config
    pub fn is_heuristic_enabled(&self, name: &str) -> bool {
        let normalized = normalize_heuristic_name(name);
        self.active_heuristics()
            .map_or(true, |active| active.contains(&normalized))
    }
}

/// Load configuration from a directory
///
/// Tries `seo-analyzer.toml`, then `.seo-analyzer.json`. With neither file
/// present the defaults are returned. A file that exists but fails to
/// parse or validate is an error.
pub fn load_analyzer_config(dir: &Path) -> ConfigResult<AnalyzerConfig> {
    // TOML first (preferred format)
    for path in [dir.join(CONFIG_FILE_TOML), dir.join(CONFIG_FILE_JSON)] {
        if !path.exists() {
            continue;
        }
        let config = load_config_file(&path)?;
        debug!("Loaded analyzer config from {}", path.display());
        return Ok(config);
    }

    debug!("No analyzer config found, using defaults");
    Ok(AnalyzerConfig::default())
}

/// Load one config file, choosing the format by extension
pub fn load_config_file(path: &Path) -> ConfigResult<AnalyzerConfig> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        AnalyzerConfig::from_json_str(&content)
    } else {
        AnalyzerConfig::from_toml_str(&content)
    }
}

/// Normalize a heuristic name to kebab-case
///
/// `KeywordDensity`, `keyword_density` and `keyword-density` all become
/// `keyword-density`; a trailing `Heuristic` or `Analysis` is dropped.
pub fn normalize_heuristic_name(name: &str) -> String {
    let chars: Vec<char> = name.trim().chars().collect();
    let mut result = String::with_capacity(chars.len() + 4);

    for (i, c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            // keywordIn -> keyword-in, TOCCheck -> toc-check
            let prev_is_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
            let is_acronym_end = i > 0
                && chars[i - 1].is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if (prev_is_lower || is_acronym_end) && !result.ends_with('-') {
                result.push('-');
            }
            result.extend(c.to_lowercase());
        } else if *c == '_' || *c == ' ' {
            if !result.ends_with('-') {
                result.push('-');
            }
        } else {
            result.push(*c);
        }
    }

    let trimmed = result.trim_matches('-');
    trimmed
        .strip_suffix("-heuristic")
        .or_else(|| trimmed.strip_suffix("-analysis"))
        .unwrap_or(trimmed)
        .to_string()
}
