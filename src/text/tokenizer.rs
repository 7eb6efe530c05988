//! Word and sentence tokenization
//!
//! Words come from normalized, shortcode-free text split on whitespace with
//! edge punctuation trimmed. Sentences use Unicode sentence boundaries
//! (UAX #29) and only count segments that contain a word character.

use super::normalize::{normalize, strip_connectors, strip_shortcodes};
use super::paragraphs;
use super::syllables;
use crate::models::Paragraph;
use unicode_segmentation::UnicodeSegmentation;

/// Punctuation trimmed from both ends of every token
fn is_edge_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{2013}'
                | '\u{2014}'
                | '\u{2018}'
                | '\u{2019}'
                | '\u{201C}'
                | '\u{201D}'
                | '\u{2026}'
                | '\u{00BF}'
                | '\u{00A1}'
                | '\u{00AB}'
                | '\u{00BB}'
                | '\u{2039}'
                | '\u{203A}'
        )
}

fn prepare(text: &str) -> String {
    strip_connectors(&strip_shortcodes(&normalize(text)))
}

/// Words of the text, or `None` when it has none
///
/// `None` lets callers tell "no words" apart from a computed empty list.
pub fn words(text: &str) -> Option<Vec<String>> {
    let prepared = prepare(text);
    let words: Vec<String> = prepared
        .split_whitespace()
        .map(|token| token.trim_matches(is_edge_punctuation))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words)
    }
}

/// Number of words, 0 for empty text
pub fn word_count(text: &str) -> usize {
    words(text).map_or(0, |w| w.len())
}

/// Number of sentences, 0 for empty text
pub fn sentence_count(text: &str) -> usize {
    let prepared = prepare(text);
    if prepared.is_empty() {
        return 0;
    }

    prepared
        .unicode_sentences()
        .filter(|sentence| sentence.chars().any(char::is_alphanumeric))
        .count()
}

/// The tokenizer research: stateless word, sentence, syllable and paragraph splitting
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn words(&self, text: &str) -> Option<Vec<String>> {
        words(text)
    }

    pub fn word_count(&self, text: &str) -> usize {
        word_count(text)
    }

    pub fn sentence_count(&self, text: &str) -> usize {
        sentence_count(text)
    }

    pub fn syllable_count(&self, word: &str) -> usize {
        syllables::syllable_count(word)
    }

    pub fn paragraphs(&self, text: &str) -> Vec<Paragraph> {
        paragraphs::paragraphs(text)
    }
}
