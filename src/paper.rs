//! The content model
//!
//! A `Paper` holds the text under analysis and its metadata. Every string
//! attribute keeps a lowercase shadow computed when it is set, and reads of
//! unknown or unset attributes return `""` rather than failing.
//!
//! Keyword combinations are derived lazily through the registry and cached
//! until the keyword is replaced.

use crate::researches::{slugify, Researcher};
use crate::text::{normalize, words};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Metadata supplied alongside the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperAttributes {
    pub keyword: String,
    pub synonyms: String,
    pub title: String,
    /// Rendered title width in pixels; 0 when unknown
    pub title_width: u32,
    pub description: String,
    pub url: String,
    pub permalink: String,
    pub locale: String,
    pub thumbnail_alt: String,
}

impl Default for PaperAttributes {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            synonyms: String::new(),
            title: String::new(),
            title_width: 0,
            description: String::new(),
            url: String::new(),
            permalink: String::new(),
            locale: "en_US".to_string(),
            thumbnail_alt: String::new(),
        }
    }
}

/// A string attribute with its lowercase shadow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Field {
    value: String,
    lower: String,
}

impl Field {
    fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let lower = value.to_lowercase();
        Self { value, lower }
    }

    fn is_set(&self) -> bool {
        !self.value.is_empty()
    }
}

/// The subject of an analysis
#[derive(Debug, Clone)]
pub struct Paper {
    text: String,
    normalized_text: String,
    text_lower: String,
    keyword: Field,
    synonyms: Field,
    title: Field,
    title_width: u32,
    description: Field,
    url: Field,
    permalink: Field,
    locale: Field,
    thumbnail_alt: Field,
    /// Derived from `keyword`; replaced whenever the keyword is set
    combinations: OnceLock<Vec<String>>,
}

impl Default for Paper {
    fn default() -> Self {
        Self::new("", PaperAttributes::default())
    }
}

impl Paper {
    pub fn new(text: impl Into<String>, attributes: PaperAttributes) -> Self {
        let mut paper = Self {
            text: String::new(),
            normalized_text: String::new(),
            text_lower: String::new(),
            keyword: Field::new(attributes.keyword),
            synonyms: Field::new(attributes.synonyms),
            title: Field::new(attributes.title),
            title_width: attributes.title_width,
            description: Field::new(attributes.description),
            url: Field::new(attributes.url),
            permalink: Field::new(attributes.permalink),
            locale: Field::new(attributes.locale),
            thumbnail_alt: Field::new(attributes.thumbnail_alt),
            combinations: OnceLock::new(),
        };
        paper.set_text(text);
        paper
    }

    fn field(&self, name: &str) -> Option<&Field> {
        match name {
            "keyword" => Some(&self.keyword),
            "synonyms" => Some(&self.synonyms),
            "title" => Some(&self.title),
            "description" => Some(&self.description),
            "url" => Some(&self.url),
            "permalink" => Some(&self.permalink),
            "locale" => Some(&self.locale),
            "thumbnail_alt" | "thumbnailAlt" => Some(&self.thumbnail_alt),
            _ => None,
        }
    }

    /// A string attribute by name, `""` when unknown or unset
    ///
    /// Only string attributes are reachable here. The numeric title width
    /// (default 0) is read through [`Paper::title_width`].
    pub fn get(&self, name: &str) -> &str {
        self.field(name).map_or("", |f| f.value.as_str())
    }

    /// Lowercase form of a string attribute, `""` when unknown or unset
    pub fn get_lower(&self, name: &str) -> &str {
        self.field(name).map_or("", |f| f.lower.as_str())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text with markup, comments and entities removed
    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    pub fn text_lower(&self) -> &str {
        &self.text_lower
    }

    pub fn keyword(&self) -> &str {
        &self.keyword.value
    }

    pub fn keyword_lower(&self) -> &str {
        &self.keyword.lower
    }

    pub fn title(&self) -> &str {
        &self.title.value
    }

    pub fn title_width(&self) -> u32 {
        self.title_width
    }

    pub fn description(&self) -> &str {
        &self.description.value
    }

    pub fn url(&self) -> &str {
        &self.url.value
    }

    pub fn permalink(&self) -> &str {
        &self.permalink.value
    }

    pub fn locale(&self) -> &str {
        &self.locale.value
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.normalized_text = normalize(&self.text);
        self.text_lower = self.text.to_lowercase();
    }

    /// Replace the keyword and drop the cached combinations
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = Field::new(keyword);
        self.combinations = OnceLock::new();
    }

    pub fn set_synonyms(&mut self, synonyms: impl Into<String>) {
        self.synonyms = Field::new(synonyms);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Field::new(title);
    }

    pub fn set_title_width(&mut self, width: u32) {
        self.title_width = width;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Field::new(description);
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Field::new(url);
    }

    pub fn set_permalink(&mut self, permalink: impl Into<String>) {
        self.permalink = Field::new(permalink);
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Field::new(locale);
    }

    pub fn set_thumbnail_alt(&mut self, alt: impl Into<String>) {
        self.thumbnail_alt = Field::new(alt);
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn has_keyword(&self) -> bool {
        self.keyword.is_set()
    }

    pub fn has_synonyms(&self) -> bool {
        self.synonyms.is_set()
    }

    pub fn has_title(&self) -> bool {
        self.title.is_set()
    }

    pub fn has_title_width(&self) -> bool {
        self.title_width != 0
    }

    pub fn has_description(&self) -> bool {
        self.description.is_set()
    }

    pub fn has_url(&self) -> bool {
        self.url.is_set()
    }

    pub fn has_permalink(&self) -> bool {
        self.permalink.is_set()
    }

    pub fn has_locale(&self) -> bool {
        self.locale.is_set()
    }

    pub fn has_thumbnail_alt(&self) -> bool {
        self.thumbnail_alt.is_set()
    }

    /// Singular/plural variants of the keyword, computed once per keyword
    ///
    /// Contains the lowercase keyword itself. Empty when there is no keyword.
    pub fn keyword_combinations(&self, researcher: &Researcher) -> &[String] {
        self.combinations
            .get_or_init(|| build_combinations(self.keyword_lower(), researcher))
    }

    /// Whether the combinations for the current keyword are already cached
    pub fn has_cached_combinations(&self) -> bool {
        self.combinations.get().is_some()
    }

    /// Slug form of the keyword, as a permalink would spell it
    pub fn keyword_permalink(&self) -> String {
        let cleaned: String = self
            .keyword_lower()
            .replace('.', "")
            .replace('_', "-")
            .chars()
            .filter(|c| *c == '-' || !c.is_ascii_punctuation())
            .collect();
        let spaced = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
        slugify(&spaced)
    }
}

fn build_combinations(keyword_lower: &str, researcher: &Researcher) -> Vec<String> {
    let keyword = keyword_lower.trim();
    if keyword.is_empty() {
        return Vec::new();
    }

    let pluralize = researcher.pluralize();
    let plurals: IndexMap<String, String> = words(keyword)
        .unwrap_or_default()
        .into_iter()
        .map(|word| {
            let plural = pluralize.get(&word);
            (word, plural)
        })
        .collect();

    let mut combinations = researcher.combinations().generate(&plurals);
    combinations.push(keyword.to_string());
    combinations
        .into_iter()
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;

    fn researcher() -> Researcher {
        Researcher::new(&AnalyzerConfig::default()).expect("researcher")
    }

    fn paper_with_keyword(keyword: &str) -> Paper {
        Paper::new(
            "<p>Some text.</p>",
            PaperAttributes {
                keyword: keyword.to_string(),
                ..PaperAttributes::default()
            },
        )
    }

    #[test]
    fn test_defaults() {
        let paper = Paper::default();
        assert_eq!(paper.get("title"), "");
        assert_eq!(paper.get("no-such-attribute"), "");
        assert_eq!(paper.get_lower("keyword"), "");
        assert_eq!(paper.title_width(), 0);
        assert_eq!(paper.locale(), "en_US");
        assert!(!paper.has_text());
        assert!(!paper.has_keyword());
        assert!(paper.has_locale());
    }

    #[test]
    fn test_title_width_is_numeric_only() {
        let mut paper = Paper::default();
        assert_eq!(paper.get("titleWidth"), "");
        assert_eq!(paper.get("title_width"), "");
        assert_eq!(paper.title_width(), 0);

        paper.set_title_width(480);
        assert_eq!(paper.title_width(), 480);
        assert_eq!(paper.get("titleWidth"), "");
    }

    #[test]
    fn test_lowercase_shadows() {
        let mut paper = Paper::new("<p>Hello World</p>", PaperAttributes::default());
        paper.set_title("Best Running Shoes");
        paper.set_thumbnail_alt("A Shoe");
        assert_eq!(paper.get("title"), "Best Running Shoes");
        assert_eq!(paper.get_lower("title"), "best running shoes");
        assert_eq!(paper.get_lower("thumbnailAlt"), "a shoe");
        assert_eq!(paper.text_lower(), "<p>hello world</p>");
        assert_eq!(paper.normalized_text(), "Hello World");
    }

    #[test]
    fn test_keyword_combinations() {
        let paper = paper_with_keyword("Cat");
        assert!(!paper.has_cached_combinations());
        let combos = paper.keyword_combinations(&researcher()).to_vec();
        assert_eq!(combos, vec!["cat", "cats"]);
        assert!(paper.has_cached_combinations());
    }

    #[test]
    fn test_multi_word_keyword_combinations() {
        let paper = paper_with_keyword("running shoe");
        let combos = paper.keyword_combinations(&researcher()).to_vec();
        assert_eq!(combos[0], "running shoe");
        assert!(combos.contains(&"running shoes".to_string()));
        let unique: IndexSet<&String> = combos.iter().collect();
        assert_eq!(unique.len(), combos.len());
    }

    #[test]
    fn test_set_keyword_invalidates_cache() {
        let researcher = researcher();
        let mut paper = paper_with_keyword("cat");
        assert_eq!(paper.keyword_combinations(&researcher), ["cat", "cats"]);

        paper.set_keyword("dog");
        assert!(!paper.has_cached_combinations());
        assert_eq!(paper.keyword_combinations(&researcher), ["dog", "dogs"]);
    }

    #[test]
    fn test_empty_keyword_has_no_combinations() {
        let paper = paper_with_keyword("");
        assert!(paper.keyword_combinations(&researcher()).is_empty());
    }

    #[test]
    fn test_keyword_permalink() {
        assert_eq!(paper_with_keyword("Running Shoes").keyword_permalink(), "running-shoes");
        assert_eq!(paper_with_keyword("node.js tips").keyword_permalink(), "nodejs-tips");
        assert_eq!(paper_with_keyword("rock_and roll!").keyword_permalink(), "rock-and-roll");
        assert_eq!(paper_with_keyword("Café  Au Lait").keyword_permalink(), "cafe-au-lait");
    }
}
