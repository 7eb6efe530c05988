//! Keyword combination generation
//!
//! Given the ordered word -> plural map of a keyword, produce every phrase
//! reachable by swapping words for their plurals. Generation walks the
//! growing output list up to `n²` entries (n = word count), which reaches
//! every subset of simultaneous substitutions without enumerating subsets.

use indexmap::{IndexMap, IndexSet};

/// The combinations research
#[derive(Debug, Clone, Copy, Default)]
pub struct Combinations;

impl Combinations {
    pub fn new() -> Self {
        Self
    }

    /// All singular/plural phrase variants, deduplicated in first-seen order
    ///
    /// Always contains the all-singular phrase first and the all-plural
    /// phrase. An empty map yields an empty list.
    pub fn generate(&self, plurals: &IndexMap<String, String>) -> Vec<String> {
        if plurals.is_empty() {
            return Vec::new();
        }

        let words: Vec<&str> = plurals.keys().map(String::as_str).collect();
        let bound = words.len() * words.len();
        let mut output: Vec<String> = vec![words.join(" ")];

        let mut i = 0;
        while i < bound {
            if let Some(phrase) = output.get(i).cloned() {
                let tokens: Vec<&str> = phrase.split(' ').collect();
                for (word, plural) in plurals {
                    // Skip words without a distinct plural and words already pluralized
                    if plural == word || tokens.contains(&plural.as_str()) {
                        continue;
                    }
                    output.push(replace_first_token(&tokens, word, plural));
                }
            }
            i += 1;
        }

        output.push(plurals.values().map(String::as_str).collect::<Vec<_>>().join(" "));

        output
            .into_iter()
            .collect::<IndexSet<String>>()
            .into_iter()
            .collect()
    }
}

/// Swap the first token equal to `word` for `plural`
fn replace_first_token(tokens: &[&str], word: &str, plural: &str) -> String {
    let mut replaced = false;
    tokens
        .iter()
        .map(|&token| {
            if !replaced && token == word {
                replaced = true;
                plural
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
