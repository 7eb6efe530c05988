//! The research registry
//!
//! A `Researcher` is a named map of stateless capabilities that heuristics
//! look up at run time:
//! - `Research` is the closed set of capability shapes
//! - `ResearcherBuilder` registers capabilities and checks that the core
//!   ones are present with the right shape
//! - `names` holds the stable lookup keys
//!
//! Capabilities never hold a reference to the paper being analyzed; they
//! receive text and attributes as arguments.

mod combinations;
mod density;
mod links;
mod pluralize;
mod readability;
mod slugify;

pub use combinations::Combinations;
pub use density::{validate_density_table, DensityReport, KeywordDensity};
pub use links::{anchors, classify_url, href, rel, LinkClassifier, LinkPolicy};
pub use pluralize::{restore_case, InflectionRule, Pluralize};
pub use readability::{validate_bands, FleschReading};
pub use slugify::slugify;

use crate::config::AnalyzerConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::models::Paragraph;
use crate::text::{self, Tokenizer};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Lookup keys of the built-in researches
pub mod names {
    pub const TOKENIZER: &str = "tokenizer";
    pub const PLURALIZE: &str = "pluralize";
    pub const COMBINATIONS: &str = "combinations";
    pub const FLESCH_READING: &str = "flesch-reading";
    pub const LINK_STATS: &str = "link-stats";
    pub const KEYWORD_DENSITY: &str = "keyword-density";
    pub const WORDS: &str = "words";
    pub const WORD_COUNT: &str = "word-count";
    pub const SENTENCE_COUNT: &str = "sentence-count";
    pub const PARAGRAPHS: &str = "paragraphs";
    pub const STRIP_TAGS: &str = "strip-tags";
    pub const CLEAN_HTML: &str = "clean-html";
    pub const NORMALIZE: &str = "normalize";
    pub const SLUGIFY: &str = "slugify";
}

/// A registered capability
#[derive(Debug, Clone)]
pub enum Research {
    Tokenizer(Tokenizer),
    Pluralize(Arc<Pluralize>),
    Combinations(Combinations),
    FleschReading(Arc<FleschReading>),
    LinkClassifier(Arc<LinkClassifier>),
    KeywordDensity(Arc<KeywordDensity>),
    /// Text to text (stripping, cleaning, slugs)
    Transform(fn(&str) -> String),
    /// Text to a count
    Count(fn(&str) -> usize),
    /// Text to words, `None` when there are none
    Words(fn(&str) -> Option<Vec<String>>),
    Paragraphs(fn(&str) -> Vec<Paragraph>),
}

impl Research {
    /// Short name of the capability shape, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Research::Tokenizer(_) => "tokenizer",
            Research::Pluralize(_) => "pluralize",
            Research::Combinations(_) => "combinations",
            Research::FleschReading(_) => "flesch-reading",
            Research::LinkClassifier(_) => "link-classifier",
            Research::KeywordDensity(_) => "keyword-density",
            Research::Transform(_) => "transform",
            Research::Count(_) => "count",
            Research::Words(_) => "words",
            Research::Paragraphs(_) => "paragraphs",
        }
    }

    /// Apply a text transform; `None` for other shapes
    pub fn transform(&self, text: &str) -> Option<String> {
        match self {
            Research::Transform(f) => Some(f(text)),
            _ => None,
        }
    }

    /// Apply a counter; `None` for other shapes
    pub fn count(&self, text: &str) -> Option<usize> {
        match self {
            Research::Count(f) => Some(f(text)),
            _ => None,
        }
    }
}

/// Builder for a [`Researcher`]
///
/// Starts empty; [`with_defaults`](Self::with_defaults) registers the
/// built-in set. Registering a name twice replaces the earlier entry.
#[derive(Debug, Default)]
pub struct ResearcherBuilder {
    researches: HashMap<String, Research>,
}

impl ResearcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the built-in researches configured from `config`
    pub fn with_defaults(mut self, config: &AnalyzerConfig) -> ConfigResult<Self> {
        let flesch = FleschReading::new(config.readability_bands())?;
        let density = KeywordDensity::new(config.density_boundaries(), config.density_scores())?;
        let links = LinkClassifier::new(config.links.clone())?;

        self = self
            .register(names::TOKENIZER, Research::Tokenizer(Tokenizer::new()))
            .register(names::PLURALIZE, Research::Pluralize(Arc::new(Pluralize::new()?)))
            .register(names::COMBINATIONS, Research::Combinations(Combinations::new()))
            .register(names::FLESCH_READING, Research::FleschReading(Arc::new(flesch)))
            .register(names::LINK_STATS, Research::LinkClassifier(Arc::new(links)))
            .register(names::KEYWORD_DENSITY, Research::KeywordDensity(Arc::new(density)))
            .register(names::WORDS, Research::Words(text::words))
            .register(names::WORD_COUNT, Research::Count(text::word_count))
            .register(names::SENTENCE_COUNT, Research::Count(text::sentence_count))
            .register(names::PARAGRAPHS, Research::Paragraphs(text::paragraphs))
            .register(names::STRIP_TAGS, Research::Transform(text::clean_tags_only))
            .register(names::CLEAN_HTML, Research::Transform(text::clean_html))
            .register(names::NORMALIZE, Research::Transform(text::normalize))
            .register(names::SLUGIFY, Research::Transform(slugify));
        Ok(self)
    }

    /// Register (or replace) a research under `name`
    pub fn register(mut self, name: impl Into<String>, research: Research) -> Self {
        let name = name.into();
        if let Some(previous) = self.researches.get(&name) {
            warn!(
                "Replacing research '{}' ({} -> {})",
                name,
                previous.kind(),
                research.kind()
            );
        } else {
            debug!("Registering research: {} ({})", name, research.kind());
        }
        self.researches.insert(name, research);
        self
    }

    /// Check the core researches and build the registry
    ///
    /// Fails with [`ConfigError::MissingResearch`] when a core research is
    /// absent or registered with the wrong shape.
    pub fn build(self) -> ConfigResult<Researcher> {
        let missing = |name: &str| ConfigError::MissingResearch(name.to_string());

        let tokenizer = match self.researches.get(names::TOKENIZER) {
            Some(Research::Tokenizer(t)) => *t,
            _ => return Err(missing(names::TOKENIZER)),
        };
        let pluralize = match self.researches.get(names::PLURALIZE) {
            Some(Research::Pluralize(p)) => Arc::clone(p),
            _ => return Err(missing(names::PLURALIZE)),
        };
        let combinations = match self.researches.get(names::COMBINATIONS) {
            Some(Research::Combinations(c)) => *c,
            _ => return Err(missing(names::COMBINATIONS)),
        };
        let flesch_reading = match self.researches.get(names::FLESCH_READING) {
            Some(Research::FleschReading(f)) => Arc::clone(f),
            _ => return Err(missing(names::FLESCH_READING)),
        };
        let links = match self.researches.get(names::LINK_STATS) {
            Some(Research::LinkClassifier(l)) => Arc::clone(l),
            _ => return Err(missing(names::LINK_STATS)),
        };
        let keyword_density = match self.researches.get(names::KEYWORD_DENSITY) {
            Some(Research::KeywordDensity(d)) => Arc::clone(d),
            _ => return Err(missing(names::KEYWORD_DENSITY)),
        };

        debug!("Built researcher with {} researches", self.researches.len());

        Ok(Researcher {
            researches: self.researches,
            tokenizer,
            pluralize,
            combinations,
            flesch_reading,
            links,
            keyword_density,
        })
    }
}

/// Named registry of analysis capabilities
///
/// Shared read-only by every heuristic of an analysis run.
#[derive(Debug, Clone)]
pub struct Researcher {
    researches: HashMap<String, Research>,
    tokenizer: Tokenizer,
    pluralize: Arc<Pluralize>,
    combinations: Combinations,
    flesch_reading: Arc<FleschReading>,
    links: Arc<LinkClassifier>,
    keyword_density: Arc<KeywordDensity>,
}

impl Researcher {
    /// Registry with every built-in research, configured from `config`
    pub fn new(config: &AnalyzerConfig) -> ConfigResult<Self> {
        ResearcherBuilder::new().with_defaults(config)?.build()
    }

    pub fn builder() -> ResearcherBuilder {
        ResearcherBuilder::new()
    }

    /// Look up a research by name; `None` for empty or unknown names
    pub fn get_research(&self, name: &str) -> Option<&Research> {
        if name.is_empty() {
            return None;
        }
        self.researches.get(name)
    }

    pub fn has_research(&self, name: &str) -> bool {
        self.researches.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.researches.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn pluralize(&self) -> &Pluralize {
        &self.pluralize
    }

    pub fn combinations(&self) -> &Combinations {
        &self.combinations
    }

    pub fn flesch_reading(&self) -> &FleschReading {
        &self.flesch_reading
    }

    pub fn links(&self) -> &LinkClassifier {
        &self.links
    }

    pub fn keyword_density(&self) -> &KeywordDensity {
        &self.keyword_density
    }
}
