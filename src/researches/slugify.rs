//! URL slugs for keywords and permalinks

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics, turn spaces into dashes and lowercase
///
/// Only the space character is replaced; other punctuation is kept.
pub fn slugify(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect::<String>()
        .to_lowercase()
}
