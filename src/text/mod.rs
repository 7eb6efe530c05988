//! Text normalization and tokenization
//!
//! Leaf layer of the analysis core. Everything here is a pure function of
//! its input; empty input yields the documented sentinel (`None`, `0` or an
//! empty list) rather than an error.

mod normalize;
mod paragraphs;
mod syllables;
mod tokenizer;

pub use normalize::{
    clean_html, clean_tags_only, collapse_whitespace, normalize, normalize_quotes,
    strip_comments, strip_connectors, strip_entities, strip_numbers, strip_shortcodes,
    strip_style_and_script, strip_tags,
};
pub use paragraphs::{autop, match_paragraphs, paragraphs};
pub use syllables::{syllable_count, total_syllables};
pub use tokenizer::{sentence_count, word_count, words, Tokenizer};
