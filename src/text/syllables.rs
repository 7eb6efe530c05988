//! Vowel-cluster syllable counting
//!
//! A heuristic, not a dictionary lookup: short words count as one syllable,
//! silent endings are dropped, and every run of one or two vowels counts once.

use regex::Regex;
use std::sync::OnceLock;

static SILENT_SUFFIX: OnceLock<Regex> = OnceLock::new();
static LEADING_Y: OnceLock<Regex> = OnceLock::new();
static VOWEL_RUN: OnceLock<Regex> = OnceLock::new();

fn silent_suffix() -> &'static Regex {
    SILENT_SUFFIX.get_or_init(|| {
        Regex::new(r"(?:[^laeiouy]es|ed|lle|[^laeiouy]e)$").expect("valid regex")
    })
}

fn leading_y() -> &'static Regex {
    LEADING_Y.get_or_init(|| Regex::new(r"^y").expect("valid regex"))
}

fn vowel_run() -> &'static Regex {
    VOWEL_RUN.get_or_init(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"))
}

/// Count the syllables of a single word
///
/// Returns 0 when no vowel run survives the suffix stripping.
pub fn syllable_count(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let word = silent_suffix().replace(&word, "");
    let word = leading_y().replace(&word, "");
    vowel_run().find_iter(&word).count()
}

/// Sum of the syllables of every word
pub fn total_syllables<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| syllable_count(w.as_ref())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_are_one_syllable() {
        assert_eq!(syllable_count("a"), 1);
        assert_eq!(syllable_count("cat"), 1);
        assert_eq!(syllable_count("the"), 1);
        assert_eq!(syllable_count("xyz"), 1);
    }

    #[test]
    fn test_vowel_runs() {
        assert_eq!(syllable_count("water"), 2);
        assert_eq!(syllable_count("reading"), 2);
        assert_eq!(syllable_count("banana"), 3);
        assert_eq!(syllable_count("Computer"), 3);
    }

    #[test]
    fn test_silent_suffixes() {
        // "make" -> "ma"
        assert_eq!(syllable_count("make"), 1);
        // "jumped" -> "jump"
        assert_eq!(syllable_count("jumped"), 1);
        // "yellow": leading y stripped, "ellow" -> e, o
        assert_eq!(syllable_count("yellow"), 2);
    }

    #[test]
    fn test_no_vowels() {
        assert_eq!(syllable_count("rhythm"), 1);
        assert_eq!(syllable_count("pfffft"), 0);
    }

    #[test]
    fn test_total_syllables() {
        assert_eq!(total_syllables(&["the", "water", "banana"]), 6);
        let empty: [&str; 0] = [];
        assert_eq!(total_syllables(&empty), 0);
    }
}
